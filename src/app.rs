//! Application setup and window creation.

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use log::{info, warn};
use shakmaty::{Piece, Square};

use crate::config::BoardConfig;
use crate::domain::SquareName;
use crate::models::{BoardModel, ChessActionListener};
use crate::ui::PieceAtlas;
use crate::ui::views::ChessBoardView;

/// Demo listener: accepts every move and marks the lifted piece's square
pub struct FreePlay;

impl ChessActionListener for FreePlay {
    fn picked_up(&mut self, board: &mut BoardModel, piece: Piece, from: Square) {
        info!("{}{}", piece.char(), SquareName(from));
        board.add_highlight(from);
    }

    fn move_attempt(&mut self, board: &mut BoardModel, piece: Piece, from: Square, to: Square) {
        info!("{}{}{}", piece.char(), SquareName(from), SquareName(to));
        board.clear_highlights();
        board.clear_piece_at(from);
        board.set_piece_at(to, piece);
    }

    fn aborted(&mut self, board: &mut BoardModel) {
        board.clear_highlights();
    }
}

/// Initialize and run the board application
pub fn run(cx: &mut App, config: BoardConfig) -> anyhow::Result<()> {
    gpui_component::init(cx);

    let atlas = match PieceAtlas::load(&config.sprite_sheet) {
        Ok(atlas) => atlas,
        Err(e) => {
            warn!("{}; drawing pieces as glyphs", e);
            PieceAtlas::empty()
        }
    };

    // Create the board model
    let model = cx.new(|_| {
        let mut board = BoardModel::new(&config);
        board.set_position(&config.initial_position);
        board.subscribe(Box::new(FreePlay));
        info!("\n{}", board.position().diagram(board.orientation()));
        board
    });

    let bounds = Bounds::centered(
        None,
        size(px(config.window_width), px(config.window_height)),
        cx,
    );
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, atlas, config, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoardEvent, Highlight, START_PLACEMENT};

    #[test]
    fn test_free_play_applies_moves() {
        let mut board = BoardModel::default();
        board.set_position(START_PLACEMENT);
        board.subscribe(Box::new(FreePlay));
        let knight = Piece::from_char('N').unwrap();

        board.emit(BoardEvent::PickedUp {
            piece: knight,
            from: Square::G1,
        });
        assert!(board.highlights().contains(Highlight::new(Square::G1)));

        board.emit(BoardEvent::MoveAttempt {
            piece: knight,
            from: Square::G1,
            to: Square::F3,
        });
        assert!(board.highlights().is_empty());
        assert_eq!(board.piece_at(Square::F3), Some(knight));
        assert_eq!(board.piece_at(Square::G1), None);
    }

    #[test]
    fn test_free_play_abort_clears_highlights() {
        let mut board = BoardModel::default();
        board.subscribe(Box::new(FreePlay));
        board.add_highlight(Square::E2);
        board.emit(BoardEvent::Aborted);
        assert!(board.highlights().is_empty());
    }
}
