//! Emoji catalog: validated entries loaded from a tabular source.
//!
//! The catalog is the reference set for all matching. It is loaded once
//! (fatal on schema-level problems, tolerant on row-level ones), ordered,
//! and immutable afterwards.

#[allow(clippy::module_inception)]
mod catalog;
mod entry;
mod error;

pub use catalog::{Catalog, CatalogOptions, EXPECTED_HEADER};
pub use entry::{CatalogEntry, GlyphPolicy};
pub use error::CatalogError;
