//! Nearest-entry matching with memoization.

use std::collections::HashMap;

use tracing::warn;

use super::error::MatchError;
use crate::catalog::{Catalog, CatalogEntry};
use crate::color::Rgb;

/// Glyph of the fallback entry returned when the catalog is empty.
pub const FALLBACK_GLYPH: &str = "\u{2B1C}";

/// Color of the fallback entry.
const FALLBACK_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Finds the catalog entry perceptually closest to a query color.
///
/// The matcher owns its [`Catalog`] (constructed once, immutable) and a
/// memoization cache keyed by the normalized query hex. Repeated queries
/// for the same color -- the common case, since grid cells of a typical
/// image cluster heavily -- skip the linear scan entirely.
///
/// # Determinism
///
/// The scan keeps the FIRST entry at the minimum distance (strict `<`), so
/// ties break by catalog order and repeated runs are bit-identical.
///
/// # Cache growth
///
/// Unbounded by default, which is safe for the quantized hex keyspace (at
/// most 16.7M keys, realistically far fewer after cell averaging). Long
/// running services can cap it with [`with_cache_capacity()`]
/// (insertions stop at the cap; lookups keep working) or reset it with
/// [`clear_cache()`].
///
/// [`with_cache_capacity()`]: Matcher::with_cache_capacity
/// [`clear_cache()`]: Matcher::clear_cache
///
/// # Example
///
/// ```
/// use emoji_mosaic::{Catalog, Matcher};
///
/// let mut matcher = Matcher::new(Catalog::builtin());
/// let entry = matcher.find_closest("#0000FE").unwrap();
/// assert_eq!(entry.glyph, "\u{1F7E6}");
/// ```
#[derive(Debug)]
pub struct Matcher {
    catalog: Catalog,
    cache: HashMap<String, usize>,
    cache_capacity: Option<usize>,
    fallback: CatalogEntry,
}

impl Matcher {
    /// Create a matcher over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cache: HashMap::new(),
            cache_capacity: None,
            fallback: CatalogEntry::new(FALLBACK_GLYPH, FALLBACK_COLOR, None),
        }
    }

    /// Cap the cache at `capacity` memoized colors.
    ///
    /// Guards against pathological key diversity; correctness is
    /// unaffected since recomputing a dropped key yields the same entry.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// The catalog this matcher queries.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The fallback entry used when the catalog is empty.
    #[inline]
    pub fn fallback(&self) -> &CatalogEntry {
        &self.fallback
    }

    /// Number of memoized queries. Test instrumentation for cache hits.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop all memoized queries.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Find the catalog entry closest to `hex` under CIE76 Delta-E.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidColor`] when `hex` is not a valid `#RRGGBB`
    /// string. An empty catalog is not an error: the documented fallback
    /// entry ([`FALLBACK_GLYPH`], white) is returned and a warning logged,
    /// so the condition stays distinguishable from a real match.
    pub fn find_closest(&mut self, hex: &str) -> Result<&CatalogEntry, MatchError> {
        let rgb: Rgb = hex.parse()?;
        let key = rgb.to_hex();

        if let Some(&idx) = self.cache.get(&key) {
            // Cached index is always in range: the catalog never changes
            // after construction. Fall through to a rescan if it somehow
            // is not, rather than panicking.
            if let Some(entry) = self.catalog.get(idx) {
                return Ok(entry);
            }
        }

        if self.catalog.is_empty() {
            warn!(query = %key, "catalog is empty, returning fallback entry");
            return Ok(&self.fallback);
        }

        let target = rgb.to_lab();
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;
        for (idx, entry) in self.catalog.iter().enumerate() {
            let dist = target.delta_e(entry.lab());
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }

        if self
            .cache_capacity
            .is_none_or(|cap| self.cache.len() < cap)
        {
            self.cache.insert(key, best_idx);
        }
        // best_idx came from the enumeration above, so the entry exists.
        Ok(&self.catalog.entries()[best_idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::color::ParseColorError;

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("\u{2B1B}", Rgb::new(0, 0, 0), None),
            CatalogEntry::new("\u{2B1C}", Rgb::new(255, 255, 255), None),
            CatalogEntry::new("\u{1F7E5}", Rgb::new(255, 0, 0), None),
            CatalogEntry::new("\u{1F7E6}", Rgb::new(0, 0, 255), None),
        ])
    }

    #[test]
    fn test_exact_match() {
        let mut matcher = Matcher::new(small_catalog());
        assert_eq!(matcher.find_closest("#FF0000").unwrap().glyph, "\u{1F7E5}");
        assert_eq!(matcher.find_closest("#000000").unwrap().glyph, "\u{2B1B}");
    }

    #[test]
    fn test_near_match() {
        let mut matcher = Matcher::new(small_catalog());
        // Slightly-off blue still matches the blue square.
        assert_eq!(matcher.find_closest("#0101FE").unwrap().glyph, "\u{1F7E6}");
    }

    #[test]
    fn test_deterministic_and_cached() {
        let mut matcher = Matcher::new(small_catalog());
        assert_eq!(matcher.cache_len(), 0);

        let first = matcher.find_closest("#FA0005").unwrap().clone();
        assert_eq!(matcher.cache_len(), 1);

        // Second call is a cache hit (no new entry) and bit-identical.
        let second = matcher.find_closest("#FA0005").unwrap().clone();
        assert_eq!(matcher.cache_len(), 1);
        assert_eq!(first, second);

        matcher.clear_cache();
        assert_eq!(matcher.cache_len(), 0);
        assert_eq!(matcher.find_closest("#FA0005").unwrap().clone(), first);
    }

    #[test]
    fn test_cache_key_is_normalized() {
        let mut matcher = Matcher::new(small_catalog());
        matcher.find_closest("#FF0000").unwrap();
        assert_eq!(matcher.cache_len(), 1);
        // Same color, different spelling: same cache slot.
        matcher.find_closest("ff0000").unwrap();
        assert_eq!(matcher.cache_len(), 1);
    }

    #[test]
    fn test_tie_breaks_to_first_entry() {
        // Two entries with the identical color: first one wins.
        let mut matcher = Matcher::new(Catalog::new(vec![
            CatalogEntry::new("\u{1F7E5}", Rgb::new(255, 0, 0), None),
            CatalogEntry::new("\u{1F34E}", Rgb::new(255, 0, 0), None),
        ]));
        assert_eq!(matcher.find_closest("#FF0000").unwrap().glyph, "\u{1F7E5}");
    }

    #[test]
    fn test_invalid_hex_is_error() {
        let mut matcher = Matcher::new(small_catalog());
        assert_eq!(
            matcher.find_closest("#GG0000").unwrap_err(),
            MatchError::InvalidColor(ParseColorError::InvalidDigit('G'))
        );
        assert!(matcher.find_closest("").is_err());
        assert_eq!(matcher.cache_len(), 0, "errors must not be cached");
    }

    #[test]
    fn test_empty_catalog_yields_fallback() {
        let mut matcher = Matcher::new(Catalog::new(Vec::new()));
        let entry = matcher.find_closest("#123456").unwrap().clone();
        assert_eq!(entry.glyph, FALLBACK_GLYPH);
        assert_eq!(entry.hex, "#ffffff");
        // Still an error for garbage input, distinct from the fallback.
        assert!(matcher.find_closest("garbage").is_err());
    }

    #[test]
    fn test_cache_capacity_caps_insertions() {
        let mut matcher = Matcher::new(small_catalog()).with_cache_capacity(2);
        matcher.find_closest("#111111").unwrap();
        matcher.find_closest("#222222").unwrap();
        matcher.find_closest("#333333").unwrap();
        assert_eq!(matcher.cache_len(), 2);
        // Uncached queries still resolve correctly.
        assert_eq!(matcher.find_closest("#333333").unwrap().glyph, "\u{2B1B}");
    }
}
