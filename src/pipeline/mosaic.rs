//! Mosaic output types.

use serde::Serialize;

/// One cell of the output grid: a position plus the matched entry's glyph
/// and canonical color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub row: u32,
    pub col: u32,
    /// Matched emoji glyph (fallback glyph when the catalog was empty).
    pub glyph: String,
    /// The matched entry's canonical `#rrggbb` color.
    pub color: String,
}

/// The final emoji tile grid plus the resolved pixel dimensions of the
/// processing stage.
///
/// Tiles are stored row-major; `rows * cols == tiles.len()`. The struct
/// serializes directly (serde) so the consuming layer can hand it to a
/// response encoder untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mosaic {
    tiles: Vec<Tile>,
    rows: u32,
    cols: u32,
    width: u32,
    height: u32,
}

impl Mosaic {
    pub(crate) fn new(tiles: Vec<Tile>, rows: u32, cols: u32, width: u32, height: u32) -> Self {
        debug_assert_eq!(tiles.len(), (rows as usize) * (cols as usize));
        Self {
            tiles,
            rows,
            cols,
            width,
            height,
        }
    }

    /// Number of grid rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of grid columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Pixel width of the processing stage.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height of the processing stage.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All tiles, row-major.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at (row, col), if in range.
    pub fn get(&self, row: u32, col: u32) -> Option<&Tile> {
        if row < self.rows && col < self.cols {
            self.tiles.get((row * self.cols + col) as usize)
        } else {
            None
        }
    }
}
