//! Nearest-emoji matching with memoization.

mod error;
#[allow(clippy::module_inception)]
mod matcher;

pub use error::MatchError;
pub use matcher::{Matcher, FALLBACK_GLYPH};
