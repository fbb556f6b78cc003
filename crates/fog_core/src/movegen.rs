//! Pseudo-legal move generation.
//!
//! There is no check in this variant: a move is generated whenever the piece
//! can make it by its movement rule and the target is not held by its own
//! side. Leaving the king en prise is allowed; losing it ends the game.

use crate::{board::BoardState, types::*, visibility::visible_threats};

/// Generate every move `color` can make, returning a freshly allocated vector.
pub fn generate_moves(state: &BoardState, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_moves_into(state, color, &mut out);
    out
}

/// Generate every move `color` can make into the provided buffer, reusing it across calls.
pub fn generate_moves_into(state: &BoardState, color: Color, out: &mut Vec<Move>) {
    out.clear();
    basic_moves(state, color, out);
    if let Some(king_from) = state.king_square(color) {
        gen_castle(state, king_from, color, out);
    }
}

/// Looks up a submitted from/to pair. A promoting move without a choice
/// resolves to the queen.
pub fn find_move(
    state: &BoardState,
    color: Color,
    from: u8,
    to: u8,
    promo: Option<PieceKind>,
) -> Option<Move> {
    generate_moves(state, color).into_iter().find(|mv| {
        mv.from == from
            && mv.to == to
            && match mv.kind {
                MoveKind::Promotion => mv.promo == Some(promo.unwrap_or(PieceKind::Queen)),
                _ => true,
            }
    })
}

/// Everything except castling. Visibility is derived from this set; castling
/// destinations are always on the castling rook's ray, so nothing is lost.
pub(crate) fn basic_moves(state: &BoardState, color: Color, out: &mut Vec<Move>) {
    for (from, pc) in state.pieces(color) {
        match pc.kind {
            PieceKind::Pawn => gen_pawn(state, from, pc, out),
            PieceKind::Knight => gen_leaper(state, from, pc, out, &crate::attacks::KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(state, from, pc, out, &crate::attacks::BISHOP_DIRS),
            PieceKind::Rook => gen_slider(state, from, pc, out, &crate::attacks::ROOK_DIRS),
            PieceKind::Queen => gen_slider(state, from, pc, out, &crate::attacks::QUEEN_DIRS),
            PieceKind::King => gen_leaper(state, from, pc, out, &crate::attacks::KING_DELTAS),
        }
    }
}

fn push_pawn_move(mv: Move, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(mv.to) == promo_rank {
        for pk in PieceKind::PROMOTIONS {
            let mut promo = mv.with_kind(MoveKind::Promotion);
            promo.promo = Some(pk);
            out.push(promo);
        }
    } else {
        out.push(mv);
    }
}

fn gen_pawn(state: &BoardState, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c = pc.color;
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let promo_rank = c.promotion_rank();

    // forward 1
    if let Some(to) = sq(f, r + dir)
        && state.piece_at(to).is_none()
    {
        push_pawn_move(Move::new(from, to, pc, None), promo_rank, out);

        // forward 2 from start
        if r == c.pawn_rank()
            && let Some(to2) = sq(f, r + 2 * dir)
            && state.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2, pc, None).with_kind(MoveKind::DoublePawnPush));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match state.piece_at(to) {
            Some(target) if target.color != c => {
                push_pawn_move(Move::new(from, to, pc, Some(target)), promo_rank, out);
            }
            Some(_) => {}
            // The target always belongs to the side to move.
            None if state.en_passant == Some(to) && state.side_to_move == c => {
                let passed = sq(f + df, r).and_then(|s| state.piece_at(s));
                out.push(Move::new(from, to, pc, passed).with_kind(MoveKind::EnPassant));
            }
            None => {}
        }
    }
}

fn gen_leaper(state: &BoardState, from: u8, pc: Piece, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match state.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)))
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(state: &BoardState, from: u8, pc: Piece, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match state.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

/// Castling needs an unmoved king on its home square, an unmoved rook in the
/// corner with the matching right, empty squares between them, and no threat
/// the mover can currently see on the squares the king stands on, crosses or lands on.
fn gen_castle(state: &BoardState, from: u8, c: Color, out: &mut Vec<Move>) {
    let Some(king) = state.piece_at(from) else {
        return;
    };
    let back = c.back_rank();
    if king.moved || sq(4, back) != Some(from) {
        return;
    }

    let rook_ready = |file: i8| {
        sq(file, back)
            .and_then(|s| state.piece_at(s))
            .is_some_and(|p| p.color == c && p.kind == PieceKind::Rook && !p.moved)
    };
    let empty = |files: &[i8]| {
        files
            .iter()
            .all(|&file| sq(file, back).is_some_and(|s| state.piece_at(s).is_none()))
    };

    let kingside = state.castling.kingside(c) && rook_ready(7) && empty(&[5, 6]);
    let queenside = state.castling.queenside(c) && rook_ready(0) && empty(&[1, 2, 3]);
    if !kingside && !queenside {
        return;
    }

    // Only computed once the cheap conditions hold.
    let threats = visible_threats(state, c);
    let safe = |files: &[i8]| {
        files
            .iter()
            .all(|&file| sq(file, back).is_some_and(|s| !threats.contains(s)))
    };

    if kingside
        && safe(&[4, 5, 6])
        && let Some(to) = sq(6, back)
    {
        out.push(Move::new(from, to, king, None).with_kind(MoveKind::CastleKingside));
    }
    if queenside
        && safe(&[4, 3, 2])
        && let Some(to) = sq(2, back)
    {
        out.push(Move::new(from, to, king, None).with_kind(MoveKind::CastleQueenside));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
