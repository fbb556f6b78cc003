//! Per-side visibility.
//!
//! A side sees the squares its pieces stand on, every destination its
//! generated moves reach, the diagonal-forward squares of its pawns whatever
//! stands there, the full offset sets of its knights and king, and the
//! blocking square at the end of each slider ray even when the blocker is
//! its own. Visibility is never cached: it is recomputed from the state each
//! time it is asked for.

use crate::attacks::attacks_from;
use crate::bitboard::Bitboard;
use crate::board::BoardState;
use crate::movegen::basic_moves;
use crate::types::Color;

/// Squares `color` may observe in `state`.
pub fn compute_visibility(state: &BoardState, color: Color) -> Bitboard {
    let occupied = state.occupancy();
    let mut visible = Bitboard::EMPTY;
    for (from, pc) in state.pieces(color) {
        visible.set(from);
        visible |= attacks_from(pc, from, occupied);
    }

    let mut moves = Vec::with_capacity(64);
    basic_moves(state, color, &mut moves);
    for mv in &moves {
        visible.set(mv.to);
    }
    visible
}

/// The board as `color` knows it: every square outside its visibility set
/// is emptied, an en-passant target it cannot see is dropped, and the move
/// history is left out.
pub fn fog_view(state: &BoardState, color: Color) -> BoardState {
    let visible = compute_visibility(state, color);
    let mut view = state.clone();
    view.history.clear();
    for s in !visible {
        view.set_piece(s, None);
    }
    if view.en_passant.is_some_and(|ep| !visible.contains(ep)) {
        view.en_passant = None;
    }
    view
}

/// Squares attacked by opposing pieces that `color` can currently see,
/// with rays traced over the fogged board.
pub fn visible_threats(state: &BoardState, color: Color) -> Bitboard {
    let view = fog_view(state, color);
    let occupied = view.occupancy();
    let mut threats = Bitboard::EMPTY;
    for (from, pc) in view.pieces(color.other()) {
        threats |= attacks_from(pc, from, occupied);
    }
    threats
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod visibility_tests;
