//! Static evaluation of a fogged board.

use fog_core::{compute_visibility, Bitboard, BoardState, Color, PieceKind};

/// Material weight of the king; large enough to dwarf everything else.
pub const KING_VALUE: i32 = 20_000;

/// Score of a line that takes the opposing king. Sits above any reachable
/// material total; the search subtracts the ply so quicker captures win.
pub const KING_CAPTURE: i32 = 1_000_000;

/// Per center square the side sees.
const CENTER_SIGHT: i32 = 10;
/// Per piece standing on a center square.
const CENTER_POST: i32 = 15;

/// Material values in centipawns.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => KING_VALUE,
    }
}

/// Evaluates `state` from `me`'s point of view.
///
/// `state` is expected to be `me`'s fogged board, so every piece on it is
/// one `me` has seen. Material is signed (own minus opposing); center
/// control adds a small bonus for the central squares `me` sees and for
/// pieces posted there.
pub fn evaluate(state: &BoardState, me: Color) -> i32 {
    let mut score = 0i32;
    for (_, pc) in state.pieces(me) {
        score += piece_value(pc.kind);
    }
    for (_, pc) in state.pieces(me.other()) {
        score -= piece_value(pc.kind);
    }

    let sight = compute_visibility(state, me) & Bitboard::CENTER;
    score += CENTER_SIGHT * sight.popcount() as i32;
    score += CENTER_POST * (state.occupancy_of(me) & Bitboard::CENTER).popcount() as i32;
    score -= CENTER_POST * (state.occupancy_of(me.other()) & Bitboard::CENTER).popcount() as i32;
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
