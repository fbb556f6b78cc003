//! Game sessions for fog-of-war chess.
//!
//! A [`Session`] pairs one [`fog_core::Game`] with an alpha-beta opponent and
//! answers in the shapes a front end consumes: [`GameView`] for the board as
//! the human sees it, [`MoveResponse`] for a submitted move. A
//! [`SessionStore`] maps session ids to sessions; sessions share nothing.

mod error;
mod session;
mod store;

pub use error::*;
pub use session::*;
pub use store::*;
