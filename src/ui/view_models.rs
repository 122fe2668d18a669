//! View models for rendering the board.
//!
//! These types are DTOs that prepare board state for display. Coordinates
//! are in pixels relative to the render surface.

use shakmaty::{Piece, Square};

/// One checkerboard tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileDisplay {
    pub x: f32,
    pub y: f32,
    pub col: u32,
    pub row: u32,
    pub is_light: bool,
}

/// A highlight overlay covering one tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightDisplay {
    pub x: f32,
    pub y: f32,
    pub square: Square,
}

/// A piece drawn at a position, either in its cell or under the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceDisplay {
    pub x: f32,
    pub y: f32,
    pub piece: Piece,
    pub square: Square,
}

/// Everything needed to draw one frame, in paint order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardScene {
    pub square_size: f32,
    pub piece_size: f32,
    pub tiles: Vec<TileDisplay>,
    pub highlights: Vec<HighlightDisplay>,
    pub pieces: Vec<PieceDisplay>,
    /// The piece under the pointer, drawn last
    pub held: Option<PieceDisplay>,
}
