use crate::bitboard::Bitboard;
use crate::error::{FogError, FogResult};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    /// Drops every right tied to `sq` (a king or rook home square).
    /// Rights are never restored.
    fn revoke_touching(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            7 => self.wk = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            56 => self.bq = false,
            63 => self.bk = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            _ => {}
        }
    }
}

/// Full-information snapshot of a game.
///
/// States are values: [`BoardState::apply`] returns the successor and leaves
/// `self` untouched, so callers can branch freely without undo bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub history: Vec<Move>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

impl BoardState {
    /// Standard starting position, white to move.
    pub fn initial() -> Self {
        let mut p = Self::empty(Color::White);
        p.castling = CastlingRights::ALL;

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Board with no pieces and no castling rights.
    pub fn empty(side_to_move: Color) -> Self {
        BoardState {
            board: [None; 64],
            side_to_move,
            castling: CastlingRights::NONE,
            en_passant: None,
            history: Vec::new(),
        }
    }

    /// Builder used to construct positions piece by piece.
    pub fn with_piece(mut self, sq: u8, piece: Piece) -> Self {
        self.board[sq as usize] = Some(piece);
        self
    }

    /// Parses the first four FEN fields; move counters are ignored.
    ///
    /// Kings and rooks count as unmoved only when a castling right still
    /// refers to them, pawns only on their starting rank.
    pub fn from_fen(fen: &str) -> FogResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FogError::InvalidFen(format!(
                "expected at least 4 fields, got {}",
                parts.len()
            )));
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FogError::InvalidFen(format!("side to move '{other}'")));
            }
        };

        let mut castling = CastlingRights::NONE;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FogError::InvalidFen(format!("castling char '{c}'"))),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            c => Some(
                coord_to_sq(c)
                    .ok_or_else(|| FogError::InvalidFen(format!("en passant square '{c}'")))?,
            ),
        };

        let mut state = BoardState {
            board: [None; 64],
            side_to_move,
            castling,
            en_passant,
            history: Vec::new(),
        };

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FogError::InvalidFen(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_letter(ch)
                        .ok_or_else(|| FogError::InvalidFen(format!("piece char '{ch}'")))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let s = sq(file, rank).ok_or_else(|| {
                        FogError::InvalidFen(format!("rank {} overflows", rank + 1))
                    })?;
                    let piece = Piece::new(color, kind);
                    let moved = !state.starts_unmoved(piece, s);
                    state.board[s as usize] = Some(if moved { piece.with_moved() } else { piece });
                    file += 1;
                }
                if file > 8 {
                    return Err(FogError::InvalidFen(format!("rank {} overflows", rank + 1)));
                }
            }
            if file != 8 {
                return Err(FogError::InvalidFen(format!("rank {} is short", rank + 1)));
            }
        }
        Ok(state)
    }

    fn starts_unmoved(&self, piece: Piece, s: u8) -> bool {
        let c = piece.color;
        let home = |file: i8| sq(file, c.back_rank()) == Some(s);
        match piece.kind {
            PieceKind::Pawn => rank_of(s) == c.pawn_rank(),
            PieceKind::King => {
                home(4) && (self.castling.kingside(c) || self.castling.queenside(c))
            }
            PieceKind::Rook => {
                (home(7) && self.castling.kingside(c)) || (home(0) && self.castling.queenside(c))
            }
            _ => true,
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Squares and pieces of one color, a1 first.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(move |(i, pc)| match pc {
                Some(p) if p.color == c => Some((i as u8, *p)),
                _ => None,
            })
    }

    pub fn occupancy(&self) -> Bitboard {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, pc)| pc.is_some())
            .map(|(i, _)| i as u8)
            .collect()
    }

    pub fn occupancy_of(&self, c: Color) -> Bitboard {
        self.pieces(c).map(|(s, _)| s).collect()
    }

    pub fn king_square(&self, c: Color) -> Option<u8> {
        self.pieces(c)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    /// Whether `c` still has a king. A missing king means the game is lost.
    pub fn king_present(&self, c: Color) -> bool {
        self.king_square(c).is_some()
    }

    /// Plies applied since the game started.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Returns the state after `mv`, which must come from the move generator
    /// for this state.
    pub fn apply(&self, mv: &Move) -> BoardState {
        let mut next = self.clone();
        let mover = mv.piece.color;
        let rank = rank_of(mv.from);

        // Any ply clears the previous target
        next.en_passant = None;

        let placed = match (mv.kind, mv.promo) {
            (MoveKind::Promotion, promo) => Piece {
                kind: promo.unwrap_or(PieceKind::Queen),
                ..mv.piece
            },
            _ => mv.piece,
        }
        .with_moved();

        match mv.kind {
            MoveKind::EnPassant => {
                if let Some(passed) = sq(file_of(mv.to), rank) {
                    next.set_piece(passed, None);
                }
            }
            MoveKind::CastleKingside => {
                if let (Some(rf), Some(rt)) = (sq(7, rank), sq(5, rank)) {
                    let rook = next.piece_at(rf).map(Piece::with_moved);
                    next.set_piece(rf, None);
                    next.set_piece(rt, rook);
                }
            }
            MoveKind::CastleQueenside => {
                if let (Some(rf), Some(rt)) = (sq(0, rank), sq(3, rank)) {
                    let rook = next.piece_at(rf).map(Piece::with_moved);
                    next.set_piece(rf, None);
                    next.set_piece(rt, rook);
                }
            }
            MoveKind::DoublePawnPush => {
                next.en_passant = sq(file_of(mv.from), (rank + rank_of(mv.to)) / 2);
            }
            MoveKind::Normal | MoveKind::Promotion => {}
        }

        next.set_piece(mv.from, None);
        next.set_piece(mv.to, Some(placed));

        next.castling.revoke_touching(mv.from);
        next.castling.revoke_touching(mv.to);

        next.history.push(*mv);
        next.side_to_move = mover.other();
        next
    }

    /// Hands the turn over without moving; the en-passant target lapses.
    pub fn pass(&self) -> BoardState {
        let mut next = self.clone();
        next.en_passant = None;
        next.side_to_move = self.side_to_move.other();
        next
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
