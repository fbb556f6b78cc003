pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod view;
pub mod visibility;

// Re-export core game logic (not engine-specific)
pub use attacks::attacks_from;
pub use bitboard::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::{find_move, generate_moves, generate_moves_into};
pub use perft::perft;
pub use types::*;
pub use view::*;
pub use visibility::*;

// =============================================================================
// Engine trait — implemented by every automated player
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Limits for one search. Depth is the only bound; the board is small enough
/// that alpha-beta at this depth needs no clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the side has nothing to play)
    pub best_move: Option<Move>,
    /// Evaluation from the searching side's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all automated players implement.
///
/// An engine plays the side to move of `state` and may only use what that
/// side can see; `state` itself is the true board so the returned move can
/// be checked against it.
pub trait Engine: Send {
    /// Chooses a move for `state.side_to_move`.
    fn search(&mut self, state: &BoardState, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
