use super::*;
use crate::types::{Piece, PieceKind, coord_to_sq};

fn s(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

fn lone(piece: PieceKind, at: &str) -> BoardState {
    BoardState::empty(Color::White).with_piece(s(at), Piece::new(Color::White, piece))
}

#[test]
fn test_initial_visibility() {
    let state = BoardState::initial();
    let white = compute_visibility(&state, Color::White);
    // Ranks 1-4 only: own pieces, pushes, and the knights' squares
    assert_eq!(white.popcount(), 32);
    assert!(white.contains(s("e4")));
    assert!(!white.contains(s("e5")));
    assert!(!white.contains(s("e7")));

    let black = compute_visibility(&state, Color::Black);
    assert_eq!(black.popcount(), 32);
    assert!(black.contains(s("d5")));
    assert!(!black.contains(s("d4")));
}

#[test]
fn test_central_knight_sees_eight() {
    let state = lone(PieceKind::Knight, "e4");
    let visible = compute_visibility(&state, Color::White);
    // Its own square plus the eight jumps
    assert_eq!(visible.popcount(), 9);
    assert_eq!((visible & !Bitboard::from_square(s("e4"))).popcount(), 8);
}

#[test]
fn test_knight_sees_jumps_onto_own_pieces() {
    let state = lone(PieceKind::Knight, "e4")
        .with_piece(s("f6"), Piece::new(Color::White, PieceKind::Pawn));
    let visible = compute_visibility(&state, Color::White);
    assert!(visible.contains(s("f6")));
    assert!(visible.contains(s("g5")));
}

#[test]
fn test_slider_ray_stops_at_first_piece_of_either_color() {
    let state = lone(PieceKind::Rook, "a1")
        .with_piece(s("a5"), Piece::new(Color::Black, PieceKind::Pawn))
        .with_piece(s("d1"), Piece::new(Color::White, PieceKind::Knight));
    let visible = compute_visibility(&state, Color::White);

    assert!(visible.contains(s("a5")), "enemy blocker is visible");
    assert!(!visible.contains(s("a6")), "nothing past the enemy blocker");
    assert!(visible.contains(s("d1")), "own blocker is visible");
    assert!(visible.contains(s("c1")));
    // Past d1 only what the knight itself sees
    assert!(!visible.contains(s("e1")));
    assert!(!visible.contains(s("h1")));
}

#[test]
fn test_each_slider_stops_on_empty_board_blocker() {
    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        let blocker = match kind {
            PieceKind::Bishop => "f6",
            _ => "d7",
        };
        let beyond = match kind {
            PieceKind::Bishop => "g7",
            _ => "d8",
        };
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        let state = lone(kind, "d4").with_piece(s(blocker), knight);
        let visible = compute_visibility(&state, Color::White);
        assert!(visible.contains(s(blocker)), "{kind:?} sees its blocker");
        assert!(!visible.contains(s(beyond)), "{kind:?} stops at its blocker");
    }
}

#[test]
fn test_pawn_diagonals_visible_when_empty() {
    let state = lone(PieceKind::Pawn, "e4");
    let visible = compute_visibility(&state, Color::White);
    assert!(visible.contains(s("d5")));
    assert!(visible.contains(s("f5")));
    assert!(visible.contains(s("e5")));
    assert!(!visible.contains(s("e6")));
}

#[test]
fn test_blocked_pawn_does_not_see_forward() {
    let state = lone(PieceKind::Pawn, "e4")
        .with_piece(s("e5"), Piece::new(Color::Black, PieceKind::Pawn));
    let visible = compute_visibility(&state, Color::White);
    assert!(!visible.contains(s("e5")));
}

#[test]
fn test_king_sees_full_neighbourhood() {
    let state = lone(PieceKind::King, "a1");
    assert_eq!(compute_visibility(&state, Color::White).popcount(), 4);
    let state = lone(PieceKind::King, "d4");
    assert_eq!(compute_visibility(&state, Color::White).popcount(), 9);
}

#[test]
fn test_enemy_pieces_do_not_add_sight() {
    let state = lone(PieceKind::King, "a1")
        .with_piece(s("h8"), Piece::new(Color::Black, PieceKind::Queen));
    let visible = compute_visibility(&state, Color::White);
    assert_eq!(visible.popcount(), 4);
}

#[test]
fn test_fog_view_hides_unseen_pieces() {
    let state = BoardState::initial();
    let view = fog_view(&state, Color::White);
    assert_eq!(view.occupancy_of(Color::White).popcount(), 16);
    assert_eq!(view.occupancy_of(Color::Black).popcount(), 0);
    assert!(!view.king_present(Color::Black));
    assert!(state.king_present(Color::Black));
}

#[test]
fn test_fog_view_keeps_visible_target() {
    let state = BoardState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let view = fog_view(&state, Color::White);
    assert_eq!(view.en_passant, Some(s("d6")));
    assert_eq!(view.piece_at(s("d5")), None, "d5 is beside the pawn, not in its sight");
}

#[test]
fn test_fog_view_drops_history() {
    let mut state = BoardState::initial();
    for (from, to) in [("e2", "e4"), ("g8", "f6")] {
        let side = state.side_to_move;
        let mv = crate::movegen::find_move(&state, side, s(from), s(to), None).unwrap();
        state = state.apply(&mv);
    }
    assert_eq!(state.ply(), 2);
    let view = fog_view(&state, Color::White);
    assert!(view.history.is_empty());
    assert_eq!(view.piece_at(s("f6")), None);
}

#[test]
fn test_visible_threats_use_only_seen_attackers() {
    let state = BoardState::from_fen("4k3/5r2/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(visible_threats(&state, Color::White).is_empty());

    let state = BoardState::from_fen("4k3/5r2/8/3B4/8/8/8/4K2R w K - 0 1").unwrap();
    let threats = visible_threats(&state, Color::White);
    assert!(threats.contains(s("f1")));
    assert!(threats.contains(s("f2")));
}

#[test]
fn test_visibility_follows_the_board() {
    let state = BoardState::initial();
    let before = compute_visibility(&state, Color::White);
    let mv = crate::movegen::find_move(&state, Color::White, s("e2"), s("e4"), None).unwrap();
    let after = compute_visibility(&state.apply(&mv), Color::White);
    assert_ne!(before, after);
    assert!(after.contains(s("e5")));
    assert!(after.contains(s("d5")));
    // Bishop and queen now look down the opened diagonals
    assert!(after.contains(s("a6")));
    assert!(after.contains(s("h5")));
}
