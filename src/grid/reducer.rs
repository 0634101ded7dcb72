//! Image-to-grid reduction: resize, partition, average.

use image::imageops::{self, FilterType};
use image::RgbImage;
use thiserror::Error;
use tracing::debug;

use super::aspect::AspectRatio;
use crate::color::Rgb;

/// Error type for grid reduction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid size must be at least 1.
    #[error("grid size must be positive")]
    InvalidGridSize,

    /// Source image has a zero pixel dimension.
    #[error("image has zero pixel dimensions")]
    EmptyImage,

    /// Grid size exceeds the resized pixel dimensions, so cells would be
    /// empty.
    #[error("grid size {grid_size} exceeds resized image dimensions {width}x{height}")]
    GridTooFine {
        grid_size: u32,
        width: u32,
        height: u32,
    },
}

/// A grid of per-cell representative colors plus the resolved pixel
/// dimensions of the processing stage.
///
/// Cells are stored row-major. `rows == cols == grid_size` under the fixed
/// square-grid contract (see [`reduce_to_grid`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    cells: Vec<Rgb>,
    rows: u32,
    cols: u32,
    width: u32,
    height: u32,
}

impl ColorGrid {
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

    /// Resolved pixel width of the processing stage (after resize).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Resolved pixel height of the processing stage (after resize).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All cell colors, row-major.
    #[inline]
    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    /// Cell color at (row, col), if in range.
    pub fn get(&self, row: u32, col: u32) -> Option<Rgb> {
        if row < self.rows && col < self.cols {
            self.cells.get((row * self.cols + col) as usize).copied()
        } else {
            None
        }
    }
}

/// Reduce an image to a `grid_size` x `grid_size` grid of mean colors.
///
/// # Contract
///
/// This implements the fixed square-grid contract: the output is always
/// `grid_size` rows by `grid_size` cols. The aspect ratio shapes the
/// intermediate pixel dimensions (and therefore how much horizontal vs
/// vertical content each cell averages), not the grid shape.
///
/// Processing stages:
///
/// 1. **Target dimensions**: the longer requested side equals the longer
///    source dimension, the shorter side is derived from `aspect` -- the
///    image is never upsampled beyond the source's proportions.
/// 2. **Resample** with Lanczos3 (skipped when dimensions already match).
///    A high-quality filter matters here: aliasing artifacts from a cheap
///    filter would bias the per-cell averages.
/// 3. **Partition** into cells of `width / grid_size` by
///    `height / grid_size` pixels (integer division; up to
///    `grid_size - 1` trailing pixels per axis are cropped).
/// 4. **Average** each cell: per-channel arithmetic mean with truncating
///    integer division.
///
/// # Errors
///
/// - [`GridError::InvalidGridSize`] for `grid_size == 0`
/// - [`GridError::EmptyImage`] for a zero-dimension source
/// - [`GridError::GridTooFine`] when a cell would round to zero pixels
pub fn reduce_to_grid(
    image: &RgbImage,
    grid_size: u32,
    aspect: AspectRatio,
) -> Result<ColorGrid, GridError> {
    if grid_size == 0 {
        return Err(GridError::InvalidGridSize);
    }
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(GridError::EmptyImage);
    }

    let (width, height) = target_dimensions(src_w, src_h, aspect.ratio());
    debug!(src_w, src_h, width, height, grid_size, "reducing image to grid");

    let resized;
    let working: &RgbImage = if (width, height) == (src_w, src_h) {
        image
    } else {
        resized = imageops::resize(image, width, height, FilterType::Lanczos3);
        &resized
    };

    let cell_w = width / grid_size;
    let cell_h = height / grid_size;
    if cell_w == 0 || cell_h == 0 {
        return Err(GridError::GridTooFine {
            grid_size,
            width,
            height,
        });
    }

    let mut cells = Vec::with_capacity(cell_count(grid_size));
    for gy in 0..grid_size {
        for gx in 0..grid_size {
            cells.push(cell_mean(working, gx * cell_w, gy * cell_h, cell_w, cell_h));
        }
    }

    Ok(ColorGrid {
        cells,
        rows: grid_size,
        cols: grid_size,
        width,
        height,
    })
}

/// Total number of cells in a `grid_size` x `grid_size` grid.
///
/// Widens before multiplying so the product cannot overflow `u32` for
/// large grids.
#[inline]
fn cell_count(grid_size: u32) -> usize {
    (grid_size as usize) * (grid_size as usize)
}

/// Pick target dimensions: longer requested side = longer source side,
/// shorter side derived from the ratio, clamped to at least 1 pixel.
fn target_dimensions(src_w: u32, src_h: u32, ratio: f64) -> (u32, u32) {
    let max_dim = src_w.max(src_h);
    if ratio >= 1.0 {
        let height = (max_dim as f64 / ratio).round() as u32;
        (max_dim, height.max(1))
    } else {
        let width = (max_dim as f64 * ratio).round() as u32;
        (width.max(1), max_dim)
    }
}

/// Truncating per-channel mean over one cell region.
fn cell_mean(image: &RgbImage, x0: u32, y0: u32, cell_w: u32, cell_h: u32) -> Rgb {
    let mut sum = [0u64; 3];
    for y in y0..y0 + cell_h {
        for x in x0..x0 + cell_w {
            let px = image.get_pixel(x, y);
            sum[0] += px.0[0] as u64;
            sum[1] += px.0[1] as u64;
            sum[2] += px.0[2] as u64;
        }
    }
    let count = (cell_w as u64) * (cell_h as u64);
    Rgb::new(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    )
}
