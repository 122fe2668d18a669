//! Square naming in `A1`..`H8` form.
//!
//! shakmaty prints squares in lowercase algebraic notation; the widget's
//! listener interface talks about squares as an uppercase file letter
//! followed by a rank digit.

use std::fmt;

use shakmaty::{File, Rank, Square};

/// Error returned when a string is not a square name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square name: {0:?}")]
pub struct SquareParseError(pub String);

/// Display adapter that prints a square as e.g. `E4`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareName(pub Square);

impl fmt::Display for SquareName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, rank) = file_rank(self.0);
        write!(f, "{}{}", (b'A' + file as u8) as char, rank + 1)
    }
}

/// Build a square from 0-indexed file and rank. Returns None outside 0..8.
pub fn square_from_coords(file: u32, rank: u32) -> Option<Square> {
    if file > 7 || rank > 7 {
        return None;
    }
    Some(Square::from_coords(File::new(file), Rank::new(rank)))
}

/// Split a square into its 0-indexed (file, rank)
pub fn file_rank(square: Square) -> (u32, u32) {
    let index = u32::from(square);
    (index % 8, index / 8)
}

/// Parse `E4` (or `e4`) into a square
pub fn parse_square(name: &str) -> Result<Square, SquareParseError> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(SquareParseError(name.to_string()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];
    if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(SquareParseError(name.to_string()));
    }

    square_from_coords(u32::from(file - b'A'), u32::from(rank - b'1'))
        .ok_or_else(|| SquareParseError(name.to_string()))
}

/// Format a square as an uppercase name
pub fn square_name(square: Square) -> String {
    SquareName(square).to_string()
}
