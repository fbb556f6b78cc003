//! Self-play Runner for fog-of-war chess
//!
//! This crate provides infrastructure for:
//! - Playing engines against each other, each seeing only its own fog
//! - Aggregating match results from the first engine's point of view
//! - Writing JSON reports for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Ten games of alpha-beta against a seeded random mover
//! cargo run -p selfplay -- --white alphabeta --black random:7 --games 10
//!
//! # Everything from a config file
//! cargo run -p selfplay -- selfplay.toml
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
