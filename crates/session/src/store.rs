use std::collections::HashMap;

use fog_core::Move;
use tracing::info;
use uuid::Uuid;

use crate::{GameView, MoveResponse, Session, SessionConfig, SessionError, SessionResult};

pub type SessionId = Uuid;

/// Every live session, keyed by id. Sessions never see each other.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, Session>,
    config: SessionConfig,
}

impl SessionStore {
    /// New sessions start with `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            config,
        }
    }

    /// Opens a session and returns its id.
    pub fn create(&mut self) -> SessionId {
        let id = Uuid::new_v4();
        self.sessions.insert(id, Session::new(self.config));
        info!(session = %id, human = %self.config.human, "session created");
        id
    }

    pub fn get(&self, id: SessionId) -> SessionResult<&Session> {
        self.sessions.get(&id).ok_or(SessionError::UnknownSession(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> SessionResult<&mut Session> {
        self.sessions.get_mut(&id).ok_or(SessionError::UnknownSession(id))
    }

    /// Resets the session's game to the initial position.
    pub fn new_game(&mut self, id: SessionId) -> SessionResult<GameView> {
        let view = self.get_mut(id)?.new_game();
        info!(session = %id, "game reset");
        Ok(view)
    }

    pub fn view(&self, id: SessionId) -> SessionResult<GameView> {
        Ok(self.get(id)?.view())
    }

    pub fn submit_move(
        &mut self,
        id: SessionId,
        from: [i64; 2],
        to: [i64; 2],
        promotion: Option<&str>,
    ) -> SessionResult<MoveResponse> {
        Ok(self.get_mut(id)?.submit_move(from, to, promotion))
    }

    /// Typed form of [`SessionStore::submit_move`].
    pub fn try_submit(
        &mut self,
        id: SessionId,
        from: [i64; 2],
        to: [i64; 2],
        promotion: Option<&str>,
    ) -> SessionResult<Option<Move>> {
        Ok(self.get_mut(id)?.try_submit(from, to, promotion)?)
    }

    pub fn remove(&mut self, id: SessionId) -> SessionResult<Session> {
        let session = self.sessions.remove(&id).ok_or(SessionError::UnknownSession(id))?;
        info!(session = %id, "session closed");
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
