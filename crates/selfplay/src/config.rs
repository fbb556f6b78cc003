//! Match configuration, read from TOML.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use alphabeta_engine::AlphaBetaEngine;
use fog_core::{Engine, DEFAULT_DEPTH};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::SelfPlayError;
use crate::match_runner::MatchConfig;

/// Which engine sits in a seat, written `alphabeta`, `alphabeta:<depth>`,
/// `random` or `random:<seed>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EngineSpec {
    AlphaBeta { depth: Option<u8> },
    Random { seed: u64 },
}

impl EngineSpec {
    pub fn create(self) -> Box<dyn Engine> {
        match self {
            EngineSpec::AlphaBeta { depth: Some(d) } => Box::new(AlphaBetaEngine::with_depth(d)),
            EngineSpec::AlphaBeta { depth: None } => Box::new(AlphaBetaEngine::new()),
            EngineSpec::Random { seed } => Box::new(RandomEngine::with_seed(seed)),
        }
    }
}

impl FromStr for EngineSpec {
    type Err = SelfPlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SelfPlayError::UnknownEngine(s.to_string());
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        match name.to_lowercase().as_str() {
            "alphabeta" | "ab" => {
                let depth = arg.map(|a| a.parse::<u8>()).transpose().map_err(|_| unknown())?;
                if depth == Some(0) {
                    return Err(unknown());
                }
                Ok(EngineSpec::AlphaBeta { depth })
            }
            "random" => {
                let seed = arg.map(|a| a.parse::<u64>()).transpose().map_err(|_| unknown())?;
                Ok(EngineSpec::Random {
                    seed: seed.unwrap_or(0),
                })
            }
            _ => Err(unknown()),
        }
    }
}

impl TryFrom<String> for EngineSpec {
    type Error = SelfPlayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EngineSpec> for String {
    fn from(spec: EngineSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSpec::AlphaBeta { depth: None } => f.write_str("alphabeta"),
            EngineSpec::AlphaBeta { depth: Some(d) } => write!(f, "alphabeta:{d}"),
            EngineSpec::Random { seed } => write!(f, "random:{seed}"),
        }
    }
}

/// Self-play settings. Every field may be left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies before a game is called a draw
    pub max_plies: u32,
    /// First engine; plays white in even games
    pub white: EngineSpec,
    /// Second engine
    pub black: EngineSpec,
    /// Search depth for engines without their own
    pub depth: u8,
    /// Swap colors every other game
    pub alternate_colors: bool,
    /// Where to write the JSON report
    pub report: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 300,
            white: EngineSpec::AlphaBeta { depth: None },
            black: EngineSpec::Random { seed: 0 },
            depth: DEFAULT_DEPTH,
            alternate_colors: true,
            report: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, SelfPlayError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SelfPlayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games,
            depth: self.depth,
            max_plies: self.max_plies,
            alternate_colors: self.alternate_colors,
            verbose: true,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
