//! Error types returned across the rules boundary.

use thiserror::Error;

/// Errors produced when a submission cannot be applied.
///
/// Every variant leaves the game untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FogError {
    /// The move is not in the generated set for the side to move.
    #[error("illegal move from square {from} to square {to}")]
    IllegalMove { from: u8, to: u8 },

    /// A king has already been captured.
    #[error("game is over")]
    GameOver,

    /// Coordinates or a promotion choice could not be understood.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A human submission arrived while the other side is to move.
    #[error("not your turn")]
    NotYourTurn,
}

pub type FogResult<T> = Result<T, FogError>;
