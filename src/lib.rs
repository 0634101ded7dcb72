//! emoji-mosaic: turn raster images into emoji tile grids.
//!
//! This library converts an arbitrary image into a grid of emoji tiles,
//! each tile being the catalog emoji whose representative color is
//! perceptually closest to the average color of the corresponding image
//! region.
//!
//! # Quick Start
//!
//! The [`MosaicRenderer`] builder is the primary entry point:
//!
//! ```no_run
//! use emoji_mosaic::{Catalog, MosaicRenderer};
//!
//! let mut renderer = MosaicRenderer::new(Catalog::builtin())
//!     .grid_size(16)
//!     .aspect_ratio("1:1");
//!
//! let bytes = std::fs::read("photo.png")?;
//! let mosaic = renderer.render(&bytes)?;
//! assert_eq!(mosaic.rows(), 16);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! image bytes                 (PNG/JPEG from the caller)
//!     |
//!     v
//! decode + resize             (Lanczos3, aspect-aware target dimensions)
//!     |
//!     v
//! grid reduction              (per-cell arithmetic mean -> one Rgb per cell)
//!     |
//!     v
//! nearest-entry match         (CIE76 Delta-E in Lab, memoized per color)
//!     |
//!     v
//! Mosaic                      (glyph + color per tile, resolved dimensions)
//! ```
//!
//! # Why Lab, Not RGB
//!
//! Euclidean distance in raw sRGB does not track human perception: the
//! numeric gap between two greens that look identical can exceed the gap
//! between a green and an olive that look clearly different. The matcher
//! therefore converts both sides through linear-light XYZ into CIE
//! L\*a\*b\* and uses CIE76 Delta-E, where equal numeric differences
//! correspond much more closely to equal perceived differences. Catalog
//! colors are converted once at load; per query the cost is one
//! conversion plus a linear scan (and usually just a cache hit).
//!
//! # Catalog
//!
//! The reference set of emoji-to-color entries is loaded once from a CSV
//! source ([`Catalog::load_csv`]) or taken from the built-in table
//! ([`Catalog::builtin`]). Loading is fatal on schema-level problems and
//! tolerant on row-level ones; see the [`catalog`] module docs. The
//! catalog is immutable after load -- a reload constructs a new catalog
//! and a new renderer, replacing the old one wholesale.

pub mod catalog;
pub mod color;
pub mod grid;
pub mod matcher;
pub mod pipeline;


pub use catalog::{Catalog, CatalogEntry, CatalogError, CatalogOptions, GlyphPolicy};
pub use color::{color_distance, name_of, Lab, ParseColorError, Rgb, Xyz};
pub use grid::{reduce_to_grid, AspectRatio, ColorGrid, GridError};
pub use matcher::{MatchError, Matcher, FALLBACK_GLYPH};
pub use pipeline::{Mosaic, MosaicError, MosaicRenderer, Tile};
