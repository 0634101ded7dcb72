//! Image grid reduction.
//!
//! Turns a decoded image plus grid parameters into one representative
//! color per cell: aspect-aware resize (Lanczos3), partition, per-cell
//! channel means.

mod aspect;
mod reducer;

pub use aspect::AspectRatio;
pub use reducer::{reduce_to_grid, ColorGrid, GridError};
