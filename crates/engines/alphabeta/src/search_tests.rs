use super::*;
use crate::{choose_move, AlphaBetaEngine};
use fog_core::{coord_to_sq, Engine, Piece, PieceKind, SearchLimits};

fn s(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

const OPEN_GAME: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";

#[test]
fn takes_a_visible_king_at_once() {
    let state = BoardState::from_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1").unwrap();
    let mv = choose_move(&state, Color::White, 3).unwrap();
    assert_eq!((mv.from, mv.to), (s("e1"), s("e8")));
    assert!(mv.captures_king());
}

#[test]
fn wins_a_hanging_queen() {
    let state = BoardState::from_fen("4k3/8/8/8/q7/8/8/R3K3 w - - 0 1").unwrap();
    let mv = choose_move(&state, Color::White, 3).unwrap();
    assert_eq!(mv.to_coords(), "a1a4");
}

#[test]
fn black_searches_its_own_fog() {
    let state = BoardState::from_fen("4k3/8/8/8/8/8/8/r3K3 b - - 0 1").unwrap();
    let mv = choose_move(&state, Color::Black, 3).unwrap();
    assert_eq!(mv.to_coords(), "a1e1");
}

#[test]
fn same_input_same_move() {
    let state = BoardState::from_fen(OPEN_GAME).unwrap();
    let first = choose_move(&state, Color::White, 3);
    for _ in 0..3 {
        assert_eq!(choose_move(&state, Color::White, 3), first);
    }
}

#[test]
fn returns_a_move_of_the_true_board() {
    let state = BoardState::from_fen(OPEN_GAME).unwrap();
    let mv = choose_move(&state, Color::White, 3).unwrap();
    assert!(generate_moves(&state, Color::White).contains(&mv));
}

#[test]
fn unseen_squares_do_not_change_the_choice() {
    let state = BoardState::initial();
    let mut altered = state.clone();
    // White sees nothing past rank 4 at the start
    altered.set_piece(s("a8"), None);
    altered.set_piece(s("h7"), None);
    altered.set_piece(s("d5"), Some(Piece::new(Color::Black, PieceKind::Queen)));
    assert_eq!(fog_view(&state, Color::White), fog_view(&altered, Color::White));
    assert_eq!(
        choose_move(&state, Color::White, 3),
        choose_move(&altered, Color::White, 3)
    );
}

#[test]
fn never_pushes_into_a_hidden_piece() {
    // e5 pawn cannot see e6; the rook there blocks the push for real
    let state = BoardState::empty(Color::White)
        .with_piece(s("h8"), Piece::new(Color::White, PieceKind::King))
        .with_piece(s("g8"), Piece::new(Color::White, PieceKind::Pawn))
        .with_piece(s("g7"), Piece::new(Color::White, PieceKind::Pawn))
        .with_piece(s("h7"), Piece::new(Color::White, PieceKind::Pawn))
        .with_piece(s("e5"), Piece::new(Color::White, PieceKind::Pawn))
        .with_piece(s("a2"), Piece::new(Color::White, PieceKind::Pawn))
        .with_piece(s("e6"), Piece::new(Color::Black, PieceKind::Rook))
        .with_piece(s("a8"), Piece::new(Color::Black, PieceKind::King));
    let view = fog_view(&state, Color::White);
    assert!(generate_moves(&view, Color::White)
        .iter()
        .any(|m| m.from == s("e5") && m.to == s("e6")));

    let mv = choose_move(&state, Color::White, 3).unwrap();
    assert_eq!(mv.from, s("a2"));
}

#[test]
fn no_move_when_boxed_in() {
    let state = BoardState::empty(Color::Black)
        .with_piece(s("a1"), Piece::new(Color::Black, PieceKind::King))
        .with_piece(s("b1"), Piece::new(Color::Black, PieceKind::Pawn))
        .with_piece(s("a2"), Piece::new(Color::Black, PieceKind::Pawn))
        .with_piece(s("b2"), Piece::new(Color::Black, PieceKind::Pawn))
        .with_piece(s("h8"), Piece::new(Color::White, PieceKind::King));
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&state, SearchLimits::default());
    assert!(result.best_move.is_none());
    assert_eq!(result.nodes, 0);
}

#[test]
fn engine_reports_search_stats() {
    let state = BoardState::from_fen(OPEN_GAME).unwrap();
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&state, SearchLimits::depth(3));
    assert_eq!(result.depth, 3);
    assert!(result.nodes > 0);
    assert_eq!(result.best_move, choose_move(&state, Color::White, 3));
    assert_eq!(engine.name(), "AlphaBeta v1.0");
}

#[test]
fn fixed_depth_overrides_limits() {
    let state = BoardState::from_fen(OPEN_GAME).unwrap();
    let mut engine = AlphaBetaEngine::with_depth(1);
    let result = engine.search(&state, SearchLimits::depth(3));
    assert_eq!(result.depth, 1);
    assert_eq!(result.best_move, choose_move(&state, Color::White, 1));
}
