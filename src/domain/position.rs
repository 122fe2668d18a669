//! Board state parsed from the piece-placement field of a FEN string.
//!
//! No legality checks are performed: any arrangement of the twelve piece
//! letters is accepted, including boards with several kings or none.

use std::fmt::Write as _;

use shakmaty::{Board, Piece, Square};

use crate::domain::orientation::Orientation;
use crate::domain::square::square_from_coords;

/// Placement field of the standard starting position
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Placement field of an empty board
pub const EMPTY_PLACEMENT: &str = "8/8/8/8/8/8/8/8";

/// Reasons a placement string is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("position string is empty")]
    Empty,
    #[error("expected 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("invalid character {character:?} in rank {rank}")]
    InvalidCharacter { rank: u32, character: char },
    #[error("rank {0} describes more than 8 files")]
    RankOverflow(u32),
}

/// An 8x8 grid of optional pieces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
}

impl BoardState {
    /// An empty board
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
        }
    }

    /// Parse a placement field into a fresh board state.
    ///
    /// Only the first whitespace-separated field is read, so a full FEN
    /// string works as well. Ranks are listed from 8 down to 1. A rank
    /// with fewer than 8 files leaves the rest of that rank empty.
    pub fn parse(fen: &str) -> Result<Self, PositionError> {
        let placement = fen.split_whitespace().next().ok_or(PositionError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PositionError::WrongRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u32;
            let mut file = 0u32;

            for c in rank_str.chars() {
                if file > 7 {
                    return Err(PositionError::RankOverflow(rank + 1));
                }
                match c {
                    '1'..='8' => {
                        file += c as u32 - '0' as u32;
                        if file > 8 {
                            return Err(PositionError::RankOverflow(rank + 1));
                        }
                    }
                    _ => {
                        let piece = Piece::from_char(c).ok_or(PositionError::InvalidCharacter {
                            rank: rank + 1,
                            character: c,
                        })?;
                        if let Some(sq) = square_from_coords(file, rank) {
                            board.set_piece_at(sq, piece);
                        }
                        file += 1;
                    }
                }
            }
        }

        Ok(Self { board })
    }

    /// Replace the whole grid. On error the current state is left as is.
    pub fn set_position(&mut self, fen: &str) -> Result<(), PositionError> {
        *self = Self::parse(fen)?;
        Ok(())
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn set_piece_at(&mut self, square: Square, piece: Piece) {
        self.board.set_piece_at(square, piece);
    }

    /// Empty a square, returning whatever stood there
    pub fn clear_piece_at(&mut self, square: Square) -> Option<Piece> {
        self.board.remove_piece_at(square)
    }

    /// Number of occupied squares
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// All occupied squares with their pieces, A1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .into_iter()
            .filter_map(|sq| self.board.piece_at(sq).map(|p| (sq, p)))
    }

    /// Render the grid back into a placement field
    pub fn board_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let piece = square_from_coords(file, rank).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(p) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(p.char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }

    /// ASCII diagram of the board as seen from the given side, headed by
    /// the placement field
    pub fn diagram(&self, orientation: Orientation) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "fen: {}", self.board_fen());
        for row in 0..8 {
            out.push_str("+---+---+---+---+---+---+---+---+\n");
            for col in 0..8 {
                let symbol = orientation
                    .square_at_cell(col, row)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or(' ', |p| p.char());
                let _ = write!(out, "| {} ", symbol);
            }
            let rank = orientation
                .square_at_cell(0, row)
                .map_or(' ', |sq| sq.rank().char());
            let _ = writeln!(out, "|{}", rank);
        }
        let files: Vec<String> = (0..8)
            .filter_map(|col| orientation.square_at_cell(col, 0))
            .map(|sq| format!("-{}-", sq.file().char().to_ascii_uppercase()))
            .collect();
        let _ = writeln!(out, "+{}+", files.join("+"));
        out
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
