//! Board orientation and the mapping between screen cells and squares.
//!
//! Screen cells are addressed as (col, row) with row 0 at the top of the
//! board. In the normal orientation white sits at the bottom; flipping
//! mirrors both axes.

use shakmaty::Square;

use crate::domain::square::{file_rank, square_from_coords};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// White at the bottom, A1 in the lower left corner
    #[default]
    Normal,
    /// Black at the bottom, H8 in the lower left corner
    Flipped,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Flipped,
            Orientation::Flipped => Orientation::Normal,
        }
    }

    pub fn is_flipped(self) -> bool {
        self == Orientation::Flipped
    }

    /// Square shown in a screen cell, `None` outside the 8x8 grid
    pub fn square_at_cell(self, col: u32, row: u32) -> Option<Square> {
        if col > 7 || row > 7 {
            return None;
        }
        match self {
            Orientation::Normal => square_from_coords(col, 7 - row),
            Orientation::Flipped => square_from_coords(7 - col, row),
        }
    }

    /// Screen cell (col, row) a square is drawn in
    pub fn cell_of(self, square: Square) -> (u32, u32) {
        let (file, rank) = file_rank(square);
        match self {
            Orientation::Normal => (file, 7 - rank),
            Orientation::Flipped => (7 - file, rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_corners() {
        let o = Orientation::Normal;
        assert_eq!(o.square_at_cell(0, 0), Some(Square::A8));
        assert_eq!(o.square_at_cell(0, 7), Some(Square::A1));
        assert_eq!(o.square_at_cell(7, 7), Some(Square::H1));
    }

    #[test]
    fn test_flipped_corners() {
        let o = Orientation::Flipped;
        assert_eq!(o.square_at_cell(0, 0), Some(Square::H1));
        assert_eq!(o.square_at_cell(0, 7), Some(Square::H8));
        assert_eq!(o.square_at_cell(7, 7), Some(Square::A8));
    }

    #[test]
    fn test_cells_outside_grid_have_no_square() {
        for o in [Orientation::Normal, Orientation::Flipped] {
            assert_eq!(o.square_at_cell(8, 0), None);
            assert_eq!(o.square_at_cell(0, 8), None);
            assert_eq!(o.square_at_cell(u32::MAX, u32::MAX), None);
        }
    }

    #[test]
    fn test_cell_of_inverts_square_at_cell() {
        for o in [Orientation::Normal, Orientation::Flipped] {
            for col in 0..8 {
                for row in 0..8 {
                    let square = o.square_at_cell(col, row).unwrap();
                    assert_eq!(o.cell_of(square), (col, row));
                }
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_mapping() {
        let start = Orientation::default();
        let twice = start.toggled().toggled();
        assert_eq!(start, twice);
        assert!(start.toggled().is_flipped());
        for col in 0..8 {
            for row in 0..8 {
                assert_eq!(start.square_at_cell(col, row), twice.square_at_cell(col, row));
            }
        }
    }
}
