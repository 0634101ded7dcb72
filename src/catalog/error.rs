//! Error types for catalog loading.
//!
//! Only batch-level failures surface here. Per-row validation failures are
//! recovered locally: the row is dropped with a `tracing::warn!` and the
//! load continues.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source is missing or unreadable.
    #[error("catalog source unreadable: {0}")]
    Io(#[from] std::io::Error),

    /// The header row does not exactly match the expected schema
    /// (names and order).
    #[error("invalid catalog header: expected {expected:?}, got {got:?}")]
    InvalidHeader {
        expected: &'static [&'static str],
        got: Vec<String>,
    },

    /// The source is not parseable as CSV at all (encoding, structure).
    #[error("malformed catalog source: {0}")]
    Csv(#[from] csv::Error),
}
