//! Theme constants and colors for the board.

use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_MARGIN: f32 = 50.0;
pub const PIECE_SCALE: f32 = 1.0; // piece size relative to square
pub const GLYPH_SCALE: f32 = 0.8;

// Initial window size
pub const INITIAL_WINDOW_WIDTH: f32 = 1000.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 1000.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xD9DBC8;
pub const DARK_SQUARE: u32 = 0x848A5B;
pub const SURFACE_BG: u32 = 0xFFFFFF;
/// 0xRRGGBBAA
pub const HIGHLIGHT: u32 = 0xBDEEFF64;

// Glyph fallback colors
pub const GLYPH_WHITE: u32 = 0xFFFFFF;
pub const GLYPH_BLACK: u32 = 0x000000;

/// Get the color for a board cell based on its screen position
pub fn square_color(col: u32, row: u32, light: u32, dark: u32) -> Rgba {
    if is_light_cell(col, row) {
        rgb(light)
    } else {
        rgb(dark)
    }
}

/// Light cells are those with an even coordinate sum
pub fn is_light_cell(col: u32, row: u32) -> bool {
    (col + row) % 2 == 0
}
