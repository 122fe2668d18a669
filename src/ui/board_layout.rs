//! Board layout calculations - handles sizing and coordinate transformations.
//!
//! The board is a square whose side is the smaller surface dimension minus
//! the margin, rounded down to a multiple of 8 so every tile has the same
//! integral width. It is centered in the surface.

use gpui::{Bounds, Pixels, Point, point, px, size};
use shakmaty::Square;

use crate::domain::Orientation;
use crate::ui::theme::{BOARD_MARGIN, PIECE_SCALE};

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    /// Surface bounds in window coordinates
    pub surface: Bounds<Pixels>,
    pub margin: f32,
}

impl BoardLayout {
    pub fn new(surface: Bounds<Pixels>, margin: f32) -> Self {
        Self { surface, margin }
    }

    fn surface_width(&self) -> f32 {
        self.surface.size.width.into()
    }

    fn surface_height(&self) -> f32 {
        self.surface.size.height.into()
    }

    /// Side length of the board, a multiple of 8
    pub fn board_size(&self) -> f32 {
        let available = (self.surface_width() - self.margin)
            .min(self.surface_height() - self.margin)
            .floor();
        if available <= 0.0 {
            return 0.0;
        }
        available - available % 8.0
    }

    pub fn square_size(&self) -> f32 {
        self.board_size() / 8.0
    }

    /// Calculate piece size based on square size
    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Top-left corner of the board relative to the surface
    pub fn board_offset(&self) -> (f32, f32) {
        let half_board = self.board_size() / 2.0;
        (
            (self.surface_width() / 2.0).floor() - half_board,
            (self.surface_height() / 2.0).floor() - half_board,
        )
    }

    /// Translate a window position into surface-relative coordinates
    pub fn to_local(&self, position: Point<Pixels>) -> (f32, f32) {
        let x: f32 = (position.x - self.surface.origin.x).into();
        let y: f32 = (position.y - self.surface.origin.y).into();
        (x, y)
    }

    /// Screen cell (col, row) under a surface-relative position, if on the board
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        let square_size = self.square_size();
        if square_size <= 0.0 {
            return None;
        }

        let (offset_x, offset_y) = self.board_offset();
        let board_x = x - offset_x;
        let board_y = y - offset_y;
        let board_size = self.board_size();

        if board_x < 0.0 || board_y < 0.0 || board_x >= board_size || board_y >= board_size {
            return None;
        }

        let col = (board_x / square_size).floor() as u32;
        let row = (board_y / square_size).floor() as u32;
        if col < 8 && row < 8 {
            Some((col, row))
        } else {
            None
        }
    }

    /// Square under a window position, if on the board
    pub fn square_at(&self, position: Point<Pixels>, orientation: Orientation) -> Option<Square> {
        let (x, y) = self.to_local(position);
        self.cell_at(x, y)
            .and_then(|(col, row)| orientation.square_at_cell(col, row))
    }

    /// Top-left corner of a screen cell relative to the surface
    pub fn cell_origin(&self, col: u32, row: u32) -> (f32, f32) {
        let (offset_x, offset_y) = self.board_offset();
        let square_size = self.square_size();
        (
            offset_x + col as f32 * square_size,
            offset_y + row as f32 * square_size,
        )
    }

    /// Top-left corner of the cell a square is drawn in, relative to the surface
    pub fn square_origin(&self, square: Square, orientation: Orientation) -> (f32, f32) {
        let (col, row) = orientation.cell_of(square);
        self.cell_origin(col, row)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(
            Bounds::new(point(px(0.0), px(0.0)), size(px(1000.0), px(1000.0))),
            BOARD_MARGIN,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32, height: f32) -> BoardLayout {
        BoardLayout::new(
            Bounds::new(point(px(0.0), px(0.0)), size(px(width), px(height))),
            50.0,
        )
    }

    #[test]
    fn test_board_size_is_multiple_of_eight() {
        let l = layout(1000.0, 1000.0);
        // 950 rounded down to 944
        assert_eq!(l.board_size(), 944.0);
        assert_eq!(l.square_size(), 118.0);

        let l = layout(700.0, 453.0);
        // min(650, 403) = 403 -> 400
        assert_eq!(l.board_size(), 400.0);
        assert_eq!(l.square_size(), 50.0);
    }

    #[test]
    fn test_board_is_centered() {
        let l = layout(700.0, 453.0);
        assert_eq!(l.board_offset(), (150.0, 26.0));
    }

    #[test]
    fn test_tiny_surface_has_no_squares() {
        let l = layout(40.0, 40.0);
        assert_eq!(l.board_size(), 0.0);
        assert_eq!(l.cell_at(10.0, 10.0), None);
    }

    #[test]
    fn test_cell_at_floor_divides() {
        let l = layout(700.0, 453.0);
        assert_eq!(l.cell_at(150.0, 26.0), Some((0, 0)));
        assert_eq!(l.cell_at(199.9, 75.9), Some((0, 0)));
        assert_eq!(l.cell_at(200.0, 76.0), Some((1, 1)));
        assert_eq!(l.cell_at(549.0, 425.0), Some((7, 7)));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let l = layout(700.0, 453.0);
        assert_eq!(l.cell_at(149.0, 100.0), None);
        assert_eq!(l.cell_at(200.0, 25.0), None);
        assert_eq!(l.cell_at(550.0, 100.0), None);
        assert_eq!(l.cell_at(200.0, 426.0), None);
    }

    #[test]
    fn test_square_at_respects_orientation() {
        let l = layout(700.0, 453.0);
        let top_left = point(px(160.0), px(30.0));
        assert_eq!(l.square_at(top_left, Orientation::Normal), Some(Square::A8));
        assert_eq!(l.square_at(top_left, Orientation::Flipped), Some(Square::H1));
    }

    #[test]
    fn test_square_at_uses_surface_origin() {
        let l = BoardLayout::new(
            Bounds::new(point(px(100.0), px(100.0)), size(px(700.0), px(453.0))),
            50.0,
        );
        assert_eq!(l.square_at(point(px(160.0), px(30.0)), Orientation::Normal), None);
        assert_eq!(
            l.square_at(point(px(260.0), px(130.0)), Orientation::Normal),
            Some(Square::A8)
        );
    }

    #[test]
    fn test_square_origin_round_trips() {
        let l = layout(1000.0, 800.0);
        for orientation in [Orientation::Normal, Orientation::Flipped] {
            for sq in Square::ALL {
                let (x, y) = l.square_origin(sq, orientation);
                let half = l.square_size() / 2.0;
                let center = point(px(x + half), px(y + half));
                assert_eq!(l.square_at(center, orientation), Some(sq));
            }
        }
    }
}
