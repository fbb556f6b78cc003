use super::*;
use fog_core::{BoardState, Color, FogError};

#[test]
fn sessions_are_independent() {
    let mut store = SessionStore::default();
    let a = store.create();
    let b = store.create();
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);

    let response = store.submit_move(a, [6, 4], [4, 4], None).unwrap();
    assert!(response.success);
    assert_eq!(store.get(a).unwrap().game().state().ply(), 2);
    assert_eq!(store.get(b).unwrap().game().state(), &BoardState::initial());
}

#[test]
fn unknown_session() {
    let mut store = SessionStore::default();
    let stray = Uuid::new_v4();
    assert_eq!(store.view(stray).unwrap_err(), SessionError::UnknownSession(stray));
    assert!(matches!(
        store.submit_move(stray, [6, 4], [4, 4], None),
        Err(SessionError::UnknownSession(_))
    ));
    assert!(store.remove(stray).is_err());
}

#[test]
fn rule_errors_pass_through() {
    let mut store = SessionStore::default();
    let id = store.create();
    assert_eq!(
        store.try_submit(id, [6, 4], [3, 4], None),
        Err(SessionError::Fog(FogError::IllegalMove { from: 12, to: 36 }))
    );
}

#[test]
fn new_game_and_remove() {
    let mut store = SessionStore::new(SessionConfig {
        human: Color::Black,
        ai_depth: 1,
    });
    let id = store.create();
    assert_eq!(store.view(id).unwrap().turn, Color::Black);

    let view = store.new_game(id).unwrap();
    assert_eq!(view.turn, Color::Black);
    assert_eq!(store.get(id).unwrap().game().state().ply(), 1);

    store.remove(id).unwrap();
    assert!(store.is_empty());
}
