//! Unified error type at the pipeline boundary.
//!
//! [`MosaicError`] is the single error type the external layer sees; the
//! orchestrator converts every internal error kind into it via `#[from]`.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::grid::GridError;
use crate::matcher::MatchError;

#[derive(Debug, Error)]
pub enum MosaicError {
    /// The input bytes could not be decoded as an image. Deliberately
    /// distinct from parameter validation errors.
    #[error("unprocessable image: {0}")]
    UnprocessableImage(#[from] image::ImageError),

    /// Grid parameter or geometry validation failure.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Invalid query color reached the matcher.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Catalog load failure, surfaced when a pipeline is built from a
    /// source path.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
