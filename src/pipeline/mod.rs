//! Pipeline orchestration: grid reduction composed with matching.

mod error;
mod mosaic;
mod renderer;

pub use error::MosaicError;
pub use mosaic::{Mosaic, Tile};
pub use renderer::MosaicRenderer;
