//! Tile and highlight rendering components.

use gpui::{div, prelude::*, px, rgba};

use crate::ui::theme::square_color;
use crate::ui::view_models::{HighlightDisplay, TileDisplay};

/// Render a single checkerboard tile
pub fn render_tile(tile: TileDisplay, square_size: f32, light: u32, dark: u32) -> impl IntoElement {
    div()
        .absolute()
        .left(px(tile.x))
        .top(px(tile.y))
        .size(px(square_size))
        .bg(square_color(tile.col, tile.row, light, dark))
}

/// Render a semi-transparent overlay over one tile
pub fn render_highlight(
    highlight: HighlightDisplay,
    square_size: f32,
    color: u32,
) -> impl IntoElement {
    div()
        .absolute()
        .left(px(highlight.x))
        .top(px(highlight.y))
        .size(px(square_size))
        .bg(rgba(color))
}
