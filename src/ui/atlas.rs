//! Piece sprites sliced from a single sprite sheet.
//!
//! The sheet has six equal columns, K Q B N R P from left to right, and two
//! rows, white on top and black below.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use gpui::RenderImage;
use image::{Frame, RgbaImage, imageops};
use log::debug;
use shakmaty::{Color, Piece, Role};

/// Column of each role in the sheet
const SHEET_COLUMNS: [Role; 6] = [
    Role::King,
    Role::Queen,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
    Role::Pawn,
];

/// Row of each color in the sheet
const SHEET_ROWS: [Color; 2] = [Color::White, Color::Black];

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("sprite sheet not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to decode sprite sheet {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite sheet is {width}x{height}, too small for 6x2 sprites")]
    TooSmall { width: u32, height: u32 },
}

/// Look for a file next to the executable, as given, then under the working directory
pub fn locate(path: &Path) -> Option<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    let cwd = std::env::current_dir().ok();

    let paths_to_try = [
        exe_dir.map(|dir| dir.join(path)),
        Some(path.to_path_buf()),
        cwd.map(|dir| dir.join(path)),
    ];

    paths_to_try.into_iter().flatten().find(|p| p.is_file())
}

/// Cut a sheet into one sprite per piece
pub fn slice_sheet(sheet: &RgbaImage) -> Result<HashMap<Piece, RgbaImage>, AtlasError> {
    let sprite_width = sheet.width() / SHEET_COLUMNS.len() as u32;
    let sprite_height = sheet.height() / SHEET_ROWS.len() as u32;
    if sprite_width == 0 || sprite_height == 0 {
        return Err(AtlasError::TooSmall {
            width: sheet.width(),
            height: sheet.height(),
        });
    }

    let mut sprites = HashMap::new();
    for (row, &color) in SHEET_ROWS.iter().enumerate() {
        for (col, &role) in SHEET_COLUMNS.iter().enumerate() {
            let sprite = imageops::crop_imm(
                sheet,
                sprite_width * col as u32,
                sprite_height * row as u32,
                sprite_width,
                sprite_height,
            )
            .to_image();
            sprites.insert(Piece { color, role }, sprite);
        }
    }
    Ok(sprites)
}

/// gpui wants BGRA pixel data
fn to_render_image(mut sprite: RgbaImage) -> Arc<RenderImage> {
    for pixel in sprite.pixels_mut() {
        pixel.0.swap(0, 2);
    }
    Arc::new(RenderImage::new(vec![Frame::new(sprite)]))
}

/// Sprites for the twelve pieces, owned by the board view
#[derive(Clone, Default)]
pub struct PieceAtlas {
    sprites: HashMap<Piece, Arc<RenderImage>>,
}

impl PieceAtlas {
    /// An atlas without sprites; pieces are drawn as glyphs
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, AtlasError> {
        let found = locate(path).ok_or_else(|| AtlasError::NotFound(path.to_path_buf()))?;
        let sheet = image::open(&found)
            .map_err(|source| AtlasError::Decode {
                path: found.clone(),
                source,
            })?
            .to_rgba8();
        let atlas = Self::from_sheet(&sheet)?;
        debug!("loaded {} sprites from {}", atlas.len(), found.display());
        Ok(atlas)
    }

    pub fn from_sheet(sheet: &RgbaImage) -> Result<Self, AtlasError> {
        let sprites = slice_sheet(sheet)?
            .into_iter()
            .map(|(piece, sprite)| (piece, to_render_image(sprite)))
            .collect();
        Ok(Self { sprites })
    }

    pub fn get(&self, piece: Piece) -> Option<Arc<RenderImage>> {
        self.sprites.get(&piece).cloned()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 60x20 sheet where every 10x10 cell is filled with (col, row, 0, 255)
    fn test_sheet() -> RgbaImage {
        RgbaImage::from_fn(60, 20, |x, y| Rgba([(x / 10) as u8, (y / 10) as u8, 0, 255]))
    }

    #[test]
    fn test_slice_yields_twelve_sprites() {
        let sprites = slice_sheet(&test_sheet()).unwrap();
        assert_eq!(sprites.len(), 12);
        for sprite in sprites.values() {
            assert_eq!(sprite.dimensions(), (10, 10));
        }
    }

    #[test]
    fn test_slice_column_and_row_order() {
        let sprites = slice_sheet(&test_sheet()).unwrap();
        let cell = |c: char| {
            let sprite = &sprites[&Piece::from_char(c).unwrap()];
            let px = sprite.get_pixel(5, 5);
            (px.0[0], px.0[1])
        };

        assert_eq!(cell('K'), (0, 0));
        assert_eq!(cell('Q'), (1, 0));
        assert_eq!(cell('B'), (2, 0));
        assert_eq!(cell('N'), (3, 0));
        assert_eq!(cell('R'), (4, 0));
        assert_eq!(cell('P'), (5, 0));
        assert_eq!(cell('k'), (0, 1));
        assert_eq!(cell('p'), (5, 1));
    }

    #[test]
    fn test_uneven_sheet_truncates() {
        let sheet = RgbaImage::new(65, 21);
        let sprites = slice_sheet(&sheet).unwrap();
        assert_eq!(sprites[&Piece::from_char('p').unwrap()].dimensions(), (10, 10));
    }

    #[test]
    fn test_too_small_sheet() {
        let sheet = RgbaImage::new(5, 1);
        assert!(matches!(
            slice_sheet(&sheet),
            Err(AtlasError::TooSmall { width: 5, height: 1 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = PieceAtlas::load(Path::new("does/not/exist/pieces.png"));
        assert!(matches!(result, Err(AtlasError::NotFound(_))));
    }

    /// Scratch directory unique to this test process
    fn scratch_dir(name: &str) -> PathBuf {
        let unique = format!("chessboard-atlas-{}-{}", name, std::process::id());
        let dir = std::env::temp_dir().join(unique);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_png_sheet() {
        let dir = scratch_dir("png");
        let path = dir.join("pieces.png");
        test_sheet().save(&path).unwrap();

        let atlas = PieceAtlas::load(&path).unwrap();
        assert_eq!(atlas.len(), 12);
        for c in "KQBNRPkqbnrp".chars() {
            assert!(atlas.get(Piece::from_char(c).unwrap()).is_some());
        }

        // RGBA (1, 0, 0, 255) comes out as BGRA
        let queen = atlas.get(Piece::from_char('Q').unwrap()).unwrap();
        let bytes = queen.as_bytes(0).unwrap();
        assert_eq!(&bytes[..4], &[0, 0, 1, 255]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_undecodable_file() {
        let dir = scratch_dir("garbage");
        let path = dir.join("pieces.png");
        std::fs::write(&path, b"not a png").unwrap();

        let result = PieceAtlas::load(&path);
        assert!(matches!(result, Err(AtlasError::Decode { .. })));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_atlas_has_no_sprites() {
        let atlas = PieceAtlas::empty();
        assert!(atlas.is_empty());
        assert!(atlas.get(Piece::from_char('K').unwrap()).is_none());
    }
}
