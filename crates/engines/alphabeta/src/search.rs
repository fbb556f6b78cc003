use std::cmp::Reverse;

use fog_core::{fog_view, generate_moves, BoardState, Color, Move};
use tracing::debug;

use crate::eval::{evaluate, piece_value, KING_CAPTURE};

const INF: i32 = i32::MAX / 2;

/// Picks a move for `color` in `state` looking only at `color`'s fog.
///
/// The tree is built on [`fog_view`]; each root candidate is then matched
/// against the moves generated on the true board by from, to and promotion
/// piece, and dropped if the true board does not allow it (a pawn push into
/// a square that only looked empty, say). The returned move is the true one.
pub fn pick_best_move(
    state: &BoardState,
    color: Color,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let truth = generate_moves(state, color);
    if truth.is_empty() {
        return None;
    }

    let mut view = fog_view(state, color);
    view.side_to_move = color;
    let mut candidates = generate_moves(&view, color);
    order_moves(&mut candidates);

    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INF;
    for cand in candidates {
        let Some(real) = truth
            .iter()
            .find(|m| m.from == cand.from && m.to == cand.to && m.promo == cand.promo)
        else {
            continue;
        };

        *nodes += 1;
        let score = if cand.captures_king() {
            KING_CAPTURE - 1
        } else {
            -negamax(&view.apply(&cand), depth.saturating_sub(1), 1, -INF, -alpha, color, nodes)
        };

        // Strictly better only: the first of equal moves stays.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((*real, score));
            alpha = alpha.max(score);
        }
    }

    // Every planned move bumped into something unseen
    let best = best.or_else(|| {
        let mv = truth[0];
        Some((mv, evaluate(&view, color)))
    });

    if let Some((mv, score)) = best {
        debug!(side = %color, mv = %mv, score, nodes = *nodes, "search done");
    }
    best
}

/// Negamax over the fogged board. Scores are from the side to move's view;
/// `me` is the searching side whose knowledge the board reflects.
fn negamax(
    state: &BoardState,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    me: Color,
    nodes: &mut u64,
) -> i32 {
    let mover = state.side_to_move;
    let perspective = |score: i32| if mover == me { score } else { -score };

    if depth == 0 {
        return perspective(evaluate(state, me));
    }

    let mut moves = generate_moves(state, mover);
    if moves.is_empty() {
        // No stalemate here; the turn would just pass
        return perspective(evaluate(state, me));
    }
    order_moves(&mut moves);

    let mut best = -INF;
    for mv in moves {
        *nodes += 1;
        let score = if mv.captures_king() {
            KING_CAPTURE - (ply as i32 + 1)
        } else {
            -negamax(&state.apply(&mv), depth - 1, ply + 1, -beta, -alpha, me, nodes)
        };

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Captures first, most valuable victim first. The sort is stable, so
/// generation order survives among equals.
fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|m| Reverse(m.captured.map_or(0, |pc| piece_value(pc.kind))));
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
