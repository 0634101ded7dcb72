//! MosaicRenderer -- the high-level entry point composing reducer and
//! matcher.

use std::path::Path;

use image::RgbImage;

use super::error::MosaicError;
use super::mosaic::{Mosaic, Tile};
use crate::catalog::{Catalog, CatalogOptions};
use crate::grid::{reduce_to_grid, AspectRatio};
use crate::matcher::Matcher;

/// Default grid size when none is configured.
const DEFAULT_GRID_SIZE: u32 = 32;

/// High-level image-to-mosaic renderer.
///
/// `MosaicRenderer` is the single integration point of the crate: it owns
/// a [`Matcher`] (which owns the [`Catalog`]) and composes grid reduction
/// with nearest-entry matching. It carries no algorithmic logic of its own
/// and propagates the first fatal error from either sub-stage.
///
/// # Design
///
/// - Constructor requires a built [`Catalog`] (no ambient global state;
///   reloading means constructing a new renderer)
/// - Configuration methods consume and return `self` (builder pattern)
/// - [`render()`](Self::render) takes `&mut self` so the match cache
///   warms across calls; one renderer per thread, or one per request
///
/// # Example
///
/// ```no_run
/// use emoji_mosaic::{Catalog, MosaicRenderer};
///
/// let mut renderer = MosaicRenderer::new(Catalog::builtin())
///     .grid_size(16)
///     .aspect_ratio("1:1");
///
/// let bytes = std::fs::read("photo.png")?;
/// let mosaic = renderer.render(&bytes)?;
/// for tile in mosaic.tiles() {
///     print!("{}", tile.glyph);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct MosaicRenderer {
    matcher: Matcher,
    grid_size: u32,
    aspect: AspectRatio,
}

impl MosaicRenderer {
    /// Create a renderer over the given catalog.
    ///
    /// Defaults: grid size 32, square aspect ratio.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            matcher: Matcher::new(catalog),
            grid_size: DEFAULT_GRID_SIZE,
            aspect: AspectRatio::SQUARE,
        }
    }

    /// Create a renderer with a catalog loaded from a CSV file.
    ///
    /// Load failures surface as [`MosaicError::Catalog`].
    pub fn from_csv(
        path: impl AsRef<Path>,
        options: CatalogOptions,
    ) -> Result<Self, MosaicError> {
        Ok(Self::new(Catalog::load_csv(path, options)?))
    }

    /// Set the grid size (rows and columns of the output).
    #[inline]
    pub fn grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the aspect ratio from a `"W:H"` or decimal string.
    ///
    /// Invalid strings fall back to 1:1 (the reducer's documented
    /// leniency policy); use [`aspect()`](Self::aspect) to pass an
    /// already-validated ratio.
    #[inline]
    pub fn aspect_ratio(mut self, s: &str) -> Self {
        self.aspect = AspectRatio::parse(s);
        self
    }

    /// Set an already-parsed aspect ratio.
    #[inline]
    pub fn aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = aspect;
        self
    }

    /// The matcher backing this renderer (cache instrumentation).
    #[inline]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Render raw image bytes into an emoji mosaic.
    ///
    /// Decode failures surface as [`MosaicError::UnprocessableImage`],
    /// distinct from the parameter validation errors of the grid stage.
    pub fn render(&mut self, image_bytes: &[u8]) -> Result<Mosaic, MosaicError> {
        let image = image::load_from_memory(image_bytes)?.to_rgb8();
        self.render_image(&image)
    }

    /// Render an already-decoded RGB image into an emoji mosaic.
    pub fn render_image(&mut self, image: &RgbImage) -> Result<Mosaic, MosaicError> {
        let grid = reduce_to_grid(image, self.grid_size, self.aspect)?;

        let cols = grid.cols();
        let mut tiles = Vec::with_capacity(grid.cells().len());
        for (idx, &color) in grid.cells().iter().enumerate() {
            let entry = self.matcher.find_closest(&color.to_hex())?;
            tiles.push(Tile {
                row: idx as u32 / cols,
                col: idx as u32 % cols,
                glyph: entry.glyph.clone(),
                color: entry.hex.clone(),
            });
        }

        Ok(Mosaic::new(
            tiles,
            grid.rows(),
            grid.cols(),
            grid.width(),
            grid.height(),
        ))
    }
}
