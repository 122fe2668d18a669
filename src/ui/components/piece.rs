//! Piece rendering component.

use std::sync::Arc;

use gpui::{RenderImage, div, img, prelude::*, px, rgb};
use shakmaty::{Color, Piece, Role};

use crate::ui::theme::{GLYPH_BLACK, GLYPH_SCALE, GLYPH_WHITE};
use crate::ui::view_models::PieceDisplay;

/// Unicode glyph used when the atlas has no sprite for a piece
pub fn piece_glyph(piece: Piece) -> &'static str {
    match (piece.role, piece.color) {
        (Role::Pawn, Color::White) => "♙",
        (Role::Knight, Color::White) => "♘",
        (Role::Bishop, Color::White) => "♗",
        (Role::Rook, Color::White) => "♖",
        (Role::Queen, Color::White) => "♕",
        (Role::King, Color::White) => "♔",
        (Role::Pawn, Color::Black) => "♟",
        (Role::Knight, Color::Black) => "♞",
        (Role::Bishop, Color::Black) => "♝",
        (Role::Rook, Color::Black) => "♜",
        (Role::Queen, Color::Black) => "♛",
        (Role::King, Color::Black) => "♚",
    }
}

/// Render a piece at its display position, sprite if available, glyph otherwise
pub fn render_piece(
    display: PieceDisplay,
    sprite: Option<Arc<RenderImage>>,
    piece_size: f32,
) -> impl IntoElement {
    let container = div()
        .absolute()
        .left(px(display.x))
        .top(px(display.y))
        .size(px(piece_size))
        .flex()
        .items_center()
        .justify_center();

    match sprite {
        Some(sprite) => container.child(img(sprite).size(px(piece_size))),
        None => {
            let color = match display.piece.color {
                Color::White => GLYPH_WHITE,
                Color::Black => GLYPH_BLACK,
            };
            container
                .text_size(px(piece_size * GLYPH_SCALE))
                .text_color(rgb(color))
                .child(piece_glyph(display.piece))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_differ_by_color() {
        let white = piece_glyph(Piece::from_char('Q').unwrap());
        let black = piece_glyph(Piece::from_char('q').unwrap());
        assert_eq!(white, "♕");
        assert_eq!(black, "♛");
    }
}
