//! Line commands against one session.

use std::fmt::Write as _;

use fog_core::{
    coord_to_sq, sq_from_view, sq_to_coord, view_of_sq, Color, FogError, GameStatus, Move,
};
use fog_session::{MovePoints, Session, SessionConfig};

pub const HELP: &str = "\
commands:
  new [white|black]         start over, optionally switching sides
  show                      print your view of the board
  move <from> <to> [promo]  e.g. `move e2 e4` or `move a7 a8 n`
                            the engine's reply shows `??` for squares you cannot see
  help                      this text
  quit                      leave";

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

pub struct Driver {
    session: Session,
}

impl Driver {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: Session::new(config),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs one input line.
    pub fn handle(&mut self, line: &str) -> Reply {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Reply::say("");
        };

        match cmd {
            "new" => {
                let mut config = self.session.config();
                match args.first().copied() {
                    None => {}
                    Some("white") => config.human = Color::White,
                    Some("black") => config.human = Color::Black,
                    Some(other) => return Reply::say(format!("unknown side {other:?}")),
                }
                self.session = Session::new(config);
                let mut text = format!("new game, you play {}\n", config.human);
                if let Some(mv) = self.session.game().last_move() {
                    let _ = writeln!(text, "ai: {}", self.describe(mv));
                }
                text.push_str(&self.board());
                Reply::say(text)
            }
            "show" => Reply::say(self.board()),
            "move" => Reply::say(self.play(args)),
            "help" => Reply::say(HELP),
            "quit" | "exit" => Reply {
                text: String::new(),
                quit: true,
            },
            other => Reply::say(format!("unknown command {other:?}, try `help`")),
        }
    }

    fn play(&mut self, args: &[&str]) -> String {
        let (from, to, promo) = match args {
            [from, to] => (*from, *to, None),
            [from, to, promo] => (*from, *to, Some(*promo)),
            _ => return "usage: move <from> <to> [promo]".to_string(),
        };

        let result = point(from)
            .and_then(|f| point(to).map(|t| (f, t)))
            .and_then(|(f, t)| self.session.try_submit(f, t, promo));
        let ai_move = match result {
            Ok(ai_move) => ai_move,
            Err(err) => return format!("rejected: {err}"),
        };

        let mut text = String::new();
        if let Some(mv) = ai_move {
            let _ = writeln!(text, "ai: {}", self.describe(&mv));
        }
        text.push_str(&self.board());
        text
    }

    /// The engine's move with hidden ends shown as `??`.
    fn describe(&self, mv: &Move) -> String {
        let Some(MovePoints { from, to }) = self.session.seen(mv) else {
            return "moved out of sight".to_string();
        };
        let name = |end: Option<[usize; 2]>| {
            end.and_then(|[row, col]| sq_from_view(row as i64, col as i64))
                .map_or_else(|| "??".to_string(), sq_to_coord)
        };
        format!("{} {}", name(from), name(to))
    }

    fn board(&self) -> String {
        let view = self.session.view();
        let mut text = view.board.to_string();
        let status = self.session.game().status();
        match status {
            GameStatus::InProgress => {
                let _ = write!(text, "\n{} to move", view.turn);
            }
            GameStatus::Drawn => text.push_str("\ngame drawn: neither side can move"),
            GameStatus::WhiteWon | GameStatus::BlackWon => {
                let winner = status.winner().map_or("nobody", |c| c.name());
                let _ = write!(text, "\ngame over, {winner} captured the king");
            }
        }
        text
    }
}

/// Algebraic square to view `[row, col]`.
fn point(square: &str) -> Result<[i64; 2], FogError> {
    let sq = coord_to_sq(square)
        .ok_or_else(|| FogError::MalformedInput(format!("bad square {square:?}")))?;
    let (row, col) = view_of_sq(sq);
    Ok([row as i64, col as i64])
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
