//! Scene generation for the board.
//!
//! This module transforms board state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::models::BoardModel;
use crate::ui::theme::is_light_cell;
use crate::ui::view_models::{BoardScene, HighlightDisplay, PieceDisplay, TileDisplay};

/// Build the scene for the current model state and measured surface
pub fn board_scene(board: &BoardModel) -> BoardScene {
    let layout = board.layout();
    let orientation = board.orientation();
    let square_size = layout.square_size();
    let piece_size = layout.piece_size();
    if square_size <= 0.0 {
        return BoardScene::default();
    }

    let mut tiles = Vec::with_capacity(64);
    for row in 0..8 {
        for col in 0..8 {
            let (x, y) = layout.cell_origin(col, row);
            tiles.push(TileDisplay {
                x,
                y,
                col,
                row,
                is_light: is_light_cell(col, row),
            });
        }
    }

    let highlights = board
        .highlights()
        .iter()
        .map(|h| {
            let (x, y) = layout.square_origin(h.square, orientation);
            HighlightDisplay {
                x,
                y,
                square: h.square,
            }
        })
        .collect();

    let drag = board.drag_state().copied();
    let held_square = drag.map(|d| d.from);

    // Pieces are centered in their tile
    let inset = (square_size - piece_size) / 2.0;
    let pieces = board
        .position()
        .pieces()
        .filter(|(square, _)| Some(*square) != held_square)
        .map(|(square, piece)| {
            let (x, y) = layout.square_origin(square, orientation);
            PieceDisplay {
                x: x + inset,
                y: y + inset,
                piece,
                square,
            }
        })
        .collect();

    // Floating piece follows cursor during drag
    let held = drag.map(|d| PieceDisplay {
        x: d.mouse_x - piece_size / 2.0,
        y: d.mouse_y - piece_size / 2.0,
        piece: d.piece,
        square: d.from,
    });

    BoardScene {
        square_size,
        piece_size,
        tiles,
        highlights,
        pieces,
        held,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::START_PLACEMENT;
    use gpui::{Bounds, point, px, size};
    use shakmaty::Square;

    fn model() -> BoardModel {
        let mut model = BoardModel::default();
        // board 400px at (150, 26)
        model.surface = Bounds::new(point(px(0.0), px(0.0)), size(px(700.0), px(453.0)));
        model.set_position(START_PLACEMENT);
        model
    }

    #[test]
    fn test_checkerboard() {
        let scene = board_scene(&model());
        assert_eq!(scene.tiles.len(), 64);
        assert_eq!(scene.square_size, 50.0);

        let first = scene.tiles[0];
        assert_eq!((first.x, first.y), (150.0, 26.0));
        assert!(first.is_light);
        assert!(!scene.tiles[1].is_light);
        // second row starts dark
        assert!(!scene.tiles[8].is_light);
        assert_eq!((scene.tiles[9].x, scene.tiles[9].y), (200.0, 76.0));
    }

    #[test]
    fn test_all_pieces_drawn_when_idle() {
        let scene = board_scene(&model());
        assert_eq!(scene.pieces.len(), 32);
        assert!(scene.held.is_none());
    }

    #[test]
    fn test_held_piece_skipped_and_follows_pointer() {
        let mut model = model();
        // E2 sits in col 4, row 6
        model.pointer_down(point(px(150.0 + 4.0 * 50.0 + 25.0), px(26.0 + 6.0 * 50.0 + 25.0)));
        model.pointer_move(point(px(400.0), px(100.0)));

        let scene = board_scene(&model);
        assert_eq!(scene.pieces.len(), 31);
        assert!(scene.pieces.iter().all(|p| p.square != Square::E2));

        let held = scene.held.unwrap();
        assert_eq!(held.square, Square::E2);
        assert_eq!((held.x, held.y), (400.0 - 25.0, 100.0 - 25.0));
    }

    #[test]
    fn test_highlights_follow_orientation() {
        let mut model = model();
        model.add_highlight(Square::A1);

        let scene = board_scene(&model);
        assert_eq!(scene.highlights.len(), 1);
        assert_eq!((scene.highlights[0].x, scene.highlights[0].y), (150.0, 376.0));

        model.flip_board();
        let scene = board_scene(&model);
        assert_eq!((scene.highlights[0].x, scene.highlights[0].y), (500.0, 26.0));
    }

    #[test]
    fn test_flipped_piece_positions() {
        let mut model = model();
        model.flip_board();
        let scene = board_scene(&model);
        let h1 = scene.pieces.iter().find(|p| p.square == Square::H1).unwrap();
        assert_eq!((h1.x, h1.y), (150.0, 26.0));
    }

    #[test]
    fn test_tiny_surface_draws_nothing() {
        let mut model = model();
        model.surface = Bounds::new(point(px(0.0), px(0.0)), size(px(20.0), px(20.0)));
        assert_eq!(board_scene(&model), BoardScene::default());
    }
}
