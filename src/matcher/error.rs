//! Error types for emoji matching.

use thiserror::Error;

use crate::color::ParseColorError;

/// Error type for matcher queries.
///
/// An empty catalog is deliberately NOT an error: it yields the documented
/// fallback entry so a single bad catalog never aborts a whole grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The query color is not a valid `#RRGGBB` hex string.
    #[error("invalid query color: {0}")]
    InvalidColor(#[from] ParseColorError),
}
