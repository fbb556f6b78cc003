use super::*;
use crate::types::{Piece, coord_to_sq};

fn s(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

fn white(kind: PieceKind) -> Piece {
    Piece::new(Color::White, kind)
}

fn black(kind: PieceKind) -> Piece {
    Piece::new(Color::Black, kind)
}

/// Black king boxed into a1 by its own pawns, none of which can move.
fn boxed_black(side: Color) -> BoardState {
    BoardState::empty(side)
        .with_piece(s("a1"), black(PieceKind::King))
        .with_piece(s("b1"), black(PieceKind::Pawn))
        .with_piece(s("a2"), black(PieceKind::Pawn))
        .with_piece(s("b2"), black(PieceKind::Pawn))
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.winner(), None);
    assert!(game.last_move().is_none());
}

#[test]
fn test_from_state_without_king_is_over() {
    let state = BoardState::empty(Color::White).with_piece(s("e1"), white(PieceKind::King));
    let game = Game::from_state(state);
    assert_eq!(game.status(), GameStatus::WhiteWon);
}

#[test]
fn test_submit_advances_turn() {
    let mut game = Game::new();
    let mv = game.submit_coords(s("e2"), s("e4"), None).unwrap();
    assert_eq!(mv.kind, crate::types::MoveKind::DoublePawnPush);
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.last_move(), Some(&mv));
    assert_eq!(game.status(), GameStatus::InProgress);

    let reply = crate::movegen::find_move(game.state(), Color::Black, s("e7"), s("e5"), None)
        .unwrap();
    let state = game.submit(&reply).unwrap();
    assert_eq!(state.side_to_move, Color::White);
    assert_eq!(state.ply(), 2);
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut game = Game::new();
    let before = game.state().clone();
    let err = game.submit_coords(s("e2"), s("e5"), None).unwrap_err();
    assert_eq!(
        err,
        FogError::IllegalMove {
            from: s("e2"),
            to: s("e5")
        }
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_moving_opponent_piece_is_illegal() {
    let mut game = Game::new();
    assert!(matches!(
        game.submit_coords(s("e7"), s("e5"), None),
        Err(FogError::IllegalMove { .. })
    ));
    // A hand-built move for the wrong side is rejected the same way
    let foreign = crate::movegen::find_move(game.state(), Color::Black, s("e7"), s("e5"), None)
        .unwrap();
    assert!(matches!(game.submit(&foreign), Err(FogError::IllegalMove { .. })));
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn test_king_capture_ends_game() {
    let state = BoardState::from_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1").unwrap();
    let mut game = Game::from_state(state);
    let mv = game.submit_coords(s("e1"), s("e8"), None).unwrap();
    assert!(mv.captures_king());
    assert_eq!(game.status(), GameStatus::WhiteWon);
    assert_eq!(game.winner(), Some(Color::White));
    assert!(!game.state().king_present(Color::Black));

    assert_eq!(
        game.submit_coords(s("f1"), s("f2"), None),
        Err(FogError::GameOver)
    );
    assert_eq!(game.submit(&mv), Err(FogError::GameOver));
}

#[test]
fn test_black_wins_by_capture() {
    let state = BoardState::from_fen("4k3/8/8/8/8/8/8/q3K3 b - - 0 1").unwrap();
    let mut game = Game::from_state(state);
    game.submit_coords(s("a1"), s("e1"), None).unwrap();
    assert_eq!(game.status(), GameStatus::BlackWon);
    assert_eq!(game.winner(), Some(Color::Black));
}

#[test]
fn test_blocked_side_is_skipped() {
    let state = boxed_black(Color::White).with_piece(s("h8"), white(PieceKind::King));
    let mut game = Game::from_state(state);
    assert!(crate::movegen::generate_moves(game.state(), Color::Black).is_empty());

    let mv = game.submit_coords(s("h8"), s("g8"), None).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.skipped_turns(), 1);
    assert_eq!(game.last_move(), Some(&mv));
}

#[test]
fn test_both_sides_blocked_is_drawn() {
    // White's last free pawn steps into a jam next to its boxed king
    let state = boxed_black(Color::White)
        .with_piece(s("h8"), white(PieceKind::King))
        .with_piece(s("g8"), white(PieceKind::Pawn))
        .with_piece(s("g7"), white(PieceKind::Pawn))
        .with_piece(s("h7"), white(PieceKind::Pawn))
        .with_piece(s("e6"), white(PieceKind::Pawn))
        .with_piece(s("e8"), black(PieceKind::Pawn));
    let mut game = Game::from_state(state);
    assert_eq!(
        crate::movegen::generate_moves(game.state(), Color::White).len(),
        1
    );

    game.submit_coords(s("e6"), s("e7"), None).unwrap();
    assert_eq!(game.status(), GameStatus::Drawn);
    assert!(game.status().is_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.skipped_turns(), 0);
}

#[test]
fn test_status_serializes_by_name() {
    let json = serde_json::to_string(&GameStatus::WhiteWon).unwrap();
    assert_eq!(json, "\"WhiteWon\"");
}
