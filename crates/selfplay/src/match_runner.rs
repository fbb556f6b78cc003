//! Match runner for playing games between engines

use fog_core::{Color, Engine, Game, GameStatus, SearchLimits};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log each finished game at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: fog_core::DEFAULT_DEPTH,
            max_plies: 300,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    /// The ply cap ran out with both kings standing
    DrawByPlyCap,
    /// Neither side had a move
    DrawByBlockade,
}

impl GameOutcome {
    /// Result from white's perspective
    pub fn for_white(self) -> GameResult {
        match self {
            GameOutcome::WhiteWins => GameResult::Win,
            GameOutcome::BlackWins => GameResult::Loss,
            GameOutcome::DrawByPlyCap | GameOutcome::DrawByBlockade => GameResult::Draw,
        }
    }

    fn won_by(c: Color) -> Self {
        match c {
            Color::White => GameOutcome::WhiteWins,
            Color::Black => GameOutcome::BlackWins,
        }
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub plies: u32,
    /// Moves in coordinate notation, e.g. `e2e4`
    pub moves: Vec<String>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective along with every game.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> (MatchResult, Vec<GameRecord>) {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };

            let game_result = match (engine1_white, record.outcome.for_white()) {
                (true, r) => r,
                // Flip result since engine1 is black
                (false, GameResult::Win) => GameResult::Loss,
                (false, GameResult::Loss) => GameResult::Win,
                (false, GameResult::Draw) => GameResult::Draw,
            };
            result.record(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    engine1 = if engine1_white { "white" } else { "black" },
                    outcome = ?record.outcome,
                    plies = record.plies,
                    score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                    "game finished"
                );
            }
            games.push(record);
        }

        (result, games)
    }

    /// Play a single game from the initial position.
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut game = Game::new();
        white.new_game();
        black.new_game();
        let limits = SearchLimits::depth(self.config.depth);
        let mut moves = Vec::new();

        let outcome = loop {
            match game.status() {
                GameStatus::WhiteWon => break GameOutcome::WhiteWins,
                GameStatus::BlackWon => break GameOutcome::BlackWins,
                GameStatus::Drawn => break GameOutcome::DrawByBlockade,
                GameStatus::InProgress => {}
            }
            if moves.len() as u32 >= self.config.max_plies {
                break GameOutcome::DrawByPlyCap;
            }

            let side = game.side_to_move();
            let result = match side {
                Color::White => white.search(game.state(), limits),
                Color::Black => black.search(game.state(), limits),
            };

            // The controller skips a side with no moves, so one is always there
            let Some(mv) = result.best_move else {
                warn!(side = %side, "engine found no move");
                break GameOutcome::DrawByBlockade;
            };
            if let Err(err) = game.submit(&mv) {
                warn!(side = %side, mv = %mv, %err, "engine move refused, game forfeited");
                break GameOutcome::won_by(side.other());
            }
            debug!(side = %side, mv = %mv, score = result.score, nodes = result.nodes, "ply");
            moves.push(mv.to_coords());
        };

        GameRecord {
            outcome,
            plies: moves.len() as u32,
            moves,
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2).0
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
