//! Fogged rendering for presentation.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::board::BoardState;
use crate::types::{Color, PieceKind, sq};
use crate::visibility::compute_visibility;

/// Marker sent for squares a side cannot see.
pub const FOG: &str = "fog";

/// One square as shown to a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Fog,
    Piece { kind: PieceKind, color: Color },
}

/// Serializes as `null`, `"fog"`, or `{"type": .., "color": ..}`.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_none(),
            Cell::Fog => serializer.serialize_str(FOG),
            Cell::Piece { kind, color } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", kind)?;
                map.serialize_entry("color", color)?;
                map.end()
            }
        }
    }
}

/// 8x8 grid, row 0 = rank 8, column 0 = file a.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardView(pub [[Cell; 8]; 8]);

impl BoardView {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.0[row][col]
    }

    pub fn fog_count(&self) -> usize {
        self.0.iter().flatten().filter(|c| **c == Cell::Fog).count()
    }
}

/// Renders `state` for `color`. Squares outside its visibility set come out
/// as [`Cell::Fog`] whether or not anything stands on them.
pub fn render_view(state: &BoardState, color: Color) -> BoardView {
    let visible = compute_visibility(state, color);
    let mut grid = [[Cell::Fog; 8]; 8];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let Some(s) = sq(col as i8, 7 - row as i8) else {
                continue;
            };
            if !visible.contains(s) {
                continue;
            }
            *cell = match state.piece_at(s) {
                Some(p) => Cell::Piece {
                    kind: p.kind,
                    color: p.color,
                },
                None => Cell::Empty,
            };
        }
    }
    BoardView(grid)
}

/// Text diagram: FEN letters, `.` for empty, `#` for fog.
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Fog => '#',
                    Cell::Piece { kind, color } => match color {
                        Color::White => kind.letter().to_ascii_uppercase(),
                        Color::Black => kind.letter(),
                    },
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
