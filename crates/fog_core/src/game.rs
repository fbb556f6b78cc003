//! Turn state machine.
//!
//! One [`Game`] owns the authoritative [`BoardState`] of a session and
//! advances it one validated ply at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    board::BoardState,
    error::{FogError, FogResult},
    movegen::{find_move, generate_moves},
    types::{Color, Move, PieceKind},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    WhiteWon,
    BlackWon,
    /// Neither side can move while both kings stand.
    Drawn,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
            _ => None,
        }
    }

    fn won_by(c: Color) -> Self {
        match c {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    state: BoardState,
    status: GameStatus,
    skipped_turns: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard position, white to move.
    pub fn new() -> Self {
        Self::from_state(BoardState::initial())
    }

    /// Continues from an arbitrary position.
    pub fn from_state(state: BoardState) -> Self {
        let status = if !state.king_present(Color::White) {
            GameStatus::BlackWon
        } else if !state.king_present(Color::Black) {
            GameStatus::WhiteWon
        } else {
            GameStatus::InProgress
        };
        Self {
            state,
            status,
            skipped_turns: 0,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.state.history.last()
    }

    /// Turns handed over because the side to move had nothing to play.
    pub fn skipped_turns(&self) -> u32 {
        self.skipped_turns
    }

    /// Applies `mv` if it is one of the moves generated for the side to move.
    pub fn submit(&mut self, mv: &Move) -> FogResult<&BoardState> {
        if self.status.is_over() {
            warn!(mv = %mv, "move submitted after game end");
            return Err(FogError::GameOver);
        }
        let mover = self.state.side_to_move;
        if !generate_moves(&self.state, mover).contains(mv) {
            warn!(mv = %mv, side = %mover, "illegal move rejected");
            return Err(FogError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        self.advance(mv);
        Ok(&self.state)
    }

    /// Resolves a from/to pair against the generated moves and submits it.
    pub fn submit_coords(
        &mut self,
        from: u8,
        to: u8,
        promo: Option<PieceKind>,
    ) -> FogResult<Move> {
        if self.status.is_over() {
            warn!(from, to, "move submitted after game end");
            return Err(FogError::GameOver);
        }
        let mover = self.state.side_to_move;
        let mv = find_move(&self.state, mover, from, to, promo).ok_or_else(|| {
            warn!(from, to, side = %mover, "illegal move rejected");
            FogError::IllegalMove { from, to }
        })?;
        self.advance(&mv);
        Ok(mv)
    }

    fn advance(&mut self, mv: &Move) {
        let mover = mv.piece.color;
        self.state = self.state.apply(mv);
        debug!(mv = %mv, side = %mover, ply = self.state.ply(), "applied");

        if mv.captures_king() {
            self.status = GameStatus::won_by(mover);
            info!(winner = %mover, ply = self.state.ply(), "king captured");
            return;
        }

        let next = self.state.side_to_move;
        if !generate_moves(&self.state, next).is_empty() {
            return;
        }
        // Nothing to play with the king still standing: the turn passes,
        // and if the mover is stuck as well the game is drawn.
        if generate_moves(&self.state, mover).is_empty() {
            self.status = GameStatus::Drawn;
            info!(ply = self.state.ply(), "both sides blocked, game drawn");
            return;
        }
        self.state = self.state.pass();
        self.skipped_turns += 1;
        info!(side = %next, "no moves available, turn skipped");
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
