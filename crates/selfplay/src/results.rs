//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::SelfPlayConfig;
use crate::error::SelfPlayError;
use crate::match_runner::{GameOutcome, GameRecord};

/// Result of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Everything a self-play run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Engine names as reported by the engines
    pub engine1: String,
    pub engine2: String,
    pub config: SelfPlayConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), SelfPlayError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SelfPlayError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SelfPlayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Count of games that ended a given way
    pub fn count(&self, outcome: GameOutcome) -> usize {
        self.games.iter().filter(|g| g.outcome == outcome).count()
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Self-play: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "Config: {} games, depth {}, ply cap {}\n\n",
            self.config.games, self.config.depth, self.config.max_plies
        ));

        report.push_str(&format!("{:>5}-{:<5}-{:<5}\n", "W", "L", "D"));
        report.push_str(&format!(
            "{:>5}-{:<5}-{:<5}\n",
            self.result.wins, self.result.losses, self.result.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n", self.result.score() * 100.0));
        report.push_str(&format!(
            "Draws by ply cap: {}, by blockade: {}\n",
            self.count(GameOutcome::DrawByPlyCap),
            self.count(GameOutcome::DrawByBlockade)
        ));

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
