//! Fog-of-war Alpha-Beta Engine
//!
//! Negamax with alpha-beta pruning over the searching side's fogged board.
//! Nothing the side cannot currently see enters the tree: hidden squares are
//! empty, and the opponent's replies come only from the pieces in view.

mod eval;
mod search;

use fog_core::{BoardState, Color, Engine, Move, SearchLimits, SearchResult, DEFAULT_DEPTH};

/// Alpha-beta engine playing from its own fog.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning, fixed depth
/// - Visible material plus a center-control term
/// - Capture-first move ordering, first generated move on ties
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    /// Fixed depth that overrides the caller's limits
    depth: Option<u8>,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self { depth: None, nodes: 0 }
    }

    /// Always searches `depth` plies whatever limits it is given.
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            nodes: 0,
        }
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, state: &BoardState, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let depth = self.depth.unwrap_or(limits.depth);

        let best = search::pick_best_move(state, state.side_to_move, depth, &mut self.nodes);

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Best move for `color` at `depth` plies, or `None` if it has no move.
///
/// Deterministic: the same state, color and depth always give the same move.
pub fn choose_move(state: &BoardState, color: Color, depth: u8) -> Option<Move> {
    let mut nodes = 0;
    search::pick_best_move(state, color, depth, &mut nodes).map(|(mv, _)| mv)
}

/// [`choose_move`] at the default depth.
pub fn choose_default(state: &BoardState, color: Color) -> Option<Move> {
    choose_move(state, color, DEFAULT_DEPTH)
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value, KING_CAPTURE, KING_VALUE};
