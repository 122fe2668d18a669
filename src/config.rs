//! Widget and demo-window configuration.
//!
//! Read from an optional JSON file; every field has a default so a partial
//! file (or none at all) is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::START_PLACEMENT;
use crate::ui::theme::{
    BOARD_MARGIN, DARK_SQUARE, HIGHLIGHT, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LIGHT_SQUARE, SURFACE_BG,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BoardConfig {
    /// Space kept free around the board, in pixels
    pub margin: f32,
    /// Light square color, 0xRRGGBB
    pub light_square: u32,
    /// Dark square color, 0xRRGGBB
    pub dark_square: u32,
    /// Surface background, 0xRRGGBB
    pub background: u32,
    /// Highlight overlay color, 0xRRGGBBAA
    pub highlight: u32,
    /// Sprite sheet with six columns (K Q B N R P) and two rows (white, black)
    pub sprite_sheet: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    /// Position shown at startup
    pub initial_position: String,
    /// Key that flips the board
    pub flip_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            margin: BOARD_MARGIN,
            light_square: LIGHT_SQUARE,
            dark_square: DARK_SQUARE,
            background: SURFACE_BG,
            highlight: HIGHLIGHT,
            sprite_sheet: PathBuf::from("assets/pieces.png"),
            window_width: INITIAL_WINDOW_WIDTH,
            window_height: INITIAL_WINDOW_HEIGHT,
            initial_position: START_PLACEMENT.to_string(),
            flip_key: "f".to_string(),
        }
    }
}

impl BoardConfig {
    /// Load a config file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        anyhow::ensure!(config.margin >= 0.0, "margin must not be negative");
        anyhow::ensure!(!config.flip_key.is_empty(), "flip_key must not be empty");
        Ok(config)
    }

    /// JSON schema of the config file
    pub fn schema_json() -> anyhow::Result<String> {
        let schema = schemars::schema_for!(BoardConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
