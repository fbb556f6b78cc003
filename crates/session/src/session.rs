use alphabeta_engine::AlphaBetaEngine;
use fog_core::{
    compute_visibility, render_view, sq_from_view, view_of_sq, Bitboard, BoardView, Color, Engine,
    FogError, FogResult, Game, Move, PieceKind, SearchLimits, DEFAULT_DEPTH,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Consecutive AI plies allowed in one reply. More than one happens only
/// when the human side is left without moves and its turn is skipped.
const AI_STREAK_LIMIT: usize = 64;

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side the human plays; the engine takes the other.
    pub human: Color,
    /// Search depth for the engine's replies.
    pub ai_depth: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: Color::White,
            ai_depth: DEFAULT_DEPTH,
        }
    }
}

/// A move as view coordinates: `[row, col]` with row 0 on rank 8. An end
/// the viewer cannot see is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovePoints {
    pub from: Option<[usize; 2]>,
    pub to: Option<[usize; 2]>,
}

impl MovePoints {
    /// Keeps only the ends inside `visible`; `None` if both are hidden.
    pub fn seen_through(mv: &Move, visible: Bitboard) -> Option<Self> {
        let end = |sq: u8| visible.contains(sq).then(|| point(sq));
        let points = Self {
            from: end(mv.from),
            to: end(mv.to),
        };
        (points.from.is_some() || points.to.is_some()).then_some(points)
    }
}

impl From<&Move> for MovePoints {
    fn from(mv: &Move) -> Self {
        Self {
            from: Some(point(mv.from)),
            to: Some(point(mv.to)),
        }
    }
}

fn point(sq: u8) -> [usize; 2] {
    let (row, col) = view_of_sq(sq);
    [row, col]
}

/// The game as the human side is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub board: BoardView,
    pub turn: Color,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub last_move: Option<MovePoints>,
}

/// Outcome of a submitted move: `{success: true, state, aiMove}` or
/// `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_move: Option<MovePoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MoveResponse {
    fn accepted(state: GameView, ai_move: Option<MovePoints>) -> Self {
        Self {
            success: true,
            state: Some(state),
            ai_move,
            error: None,
        }
    }

    fn rejected(err: &FogError) -> Self {
        Self {
            success: false,
            state: None,
            ai_move: None,
            error: Some(err.to_string()),
        }
    }
}

/// One human-vs-engine game.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    config: SessionConfig,
    engine: AlphaBetaEngine,
}

impl Session {
    /// Fresh game. If the engine plays white it moves straight away.
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self::with_game(Game::new(), config);
        session.ai_reply();
        session
    }

    /// Resumes `game` exactly as it stands; nothing is played.
    pub fn with_game(game: Game, config: SessionConfig) -> Self {
        Self {
            game,
            config,
            engine: AlphaBetaEngine::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn ai_color(&self) -> Color {
        self.config.human.other()
    }

    /// Discards the current game and starts over.
    pub fn new_game(&mut self) -> GameView {
        self.game = Game::new();
        self.engine.new_game();
        self.ai_reply();
        self.view()
    }

    /// The board through the human side's fog.
    pub fn view(&self) -> GameView {
        let status = self.game.status();
        GameView {
            board: render_view(self.game.state(), self.config.human),
            turn: self.game.side_to_move(),
            game_over: status.is_over(),
            winner: status.winner(),
            last_move: self.game.last_move().and_then(|mv| self.seen(mv)),
        }
    }

    /// `mv` as the human may see it. Their own moves are shown whole; the
    /// engine's are cut down to the ends inside the human's sight.
    pub fn seen(&self, mv: &Move) -> Option<MovePoints> {
        let human = self.config.human;
        if mv.piece.color == human {
            return Some(MovePoints::from(mv));
        }
        MovePoints::seen_through(mv, compute_visibility(self.game.state(), human))
    }

    /// Validates and plays a human move given as view `[row, col]` pairs,
    /// then lets the engine answer.
    pub fn submit_move(
        &mut self,
        from: [i64; 2],
        to: [i64; 2],
        promotion: Option<&str>,
    ) -> MoveResponse {
        match self.try_submit(from, to, promotion) {
            Ok(ai_move) => {
                let seen = ai_move.as_ref().and_then(|mv| self.seen(mv));
                MoveResponse::accepted(self.view(), seen)
            }
            Err(err) => MoveResponse::rejected(&err),
        }
    }

    /// [`Session::submit_move`] with the error kept typed. Returns the
    /// engine's true reply, if it made one; callers showing it to the human
    /// go through [`Session::seen`].
    pub fn try_submit(
        &mut self,
        from: [i64; 2],
        to: [i64; 2],
        promotion: Option<&str>,
    ) -> FogResult<Option<Move>> {
        if self.game.status().is_over() {
            return Err(FogError::GameOver);
        }
        if self.game.side_to_move() != self.config.human {
            warn!(human = %self.config.human, "submission out of turn");
            return Err(FogError::NotYourTurn);
        }

        let from = point_to_sq(from)?;
        let to = point_to_sq(to)?;
        let promo = match promotion {
            None => None,
            Some(p) => Some(PieceKind::parse_promotion(p).ok_or_else(|| {
                FogError::MalformedInput(format!("unknown promotion piece {p:?}"))
            })?),
        };

        self.game.submit_coords(from, to, promo)?;
        Ok(self.ai_reply())
    }

    /// Plays the engine's side while it is to move and the game runs.
    /// Returns the last engine move.
    pub fn ai_reply(&mut self) -> Option<Move> {
        let ai = self.ai_color();
        let limits = SearchLimits::depth(self.config.ai_depth);
        let mut last = None;

        for _ in 0..AI_STREAK_LIMIT {
            if self.game.status().is_over() || self.game.side_to_move() != ai {
                return last;
            }
            let result = self.engine.search(self.game.state(), limits);
            let Some(mv) = result.best_move else {
                return last;
            };
            if let Err(err) = self.game.submit(&mv) {
                warn!(%err, mv = %mv, "engine move refused");
                return last;
            }
            debug!(mv = %mv, score = result.score, nodes = result.nodes, "engine replied");
            last = Some(mv);
        }
        warn!(limit = AI_STREAK_LIMIT, "engine streak cut short");
        last
    }
}

fn point_to_sq([row, col]: [i64; 2]) -> FogResult<u8> {
    sq_from_view(row, col)
        .ok_or_else(|| FogError::MalformedInput(format!("square [{row}, {col}] is off the board")))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
