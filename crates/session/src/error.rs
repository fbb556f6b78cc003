use fog_core::FogError;
use thiserror::Error;

use crate::SessionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),

    #[error(transparent)]
    Fog(#[from] FogError),
}

pub type SessionResult<T> = Result<T, SessionError>;
