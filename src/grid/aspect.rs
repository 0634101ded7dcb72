//! Aspect ratio parsing with the documented 1:1 leniency fallback.

use tracing::warn;

/// A validated width/height aspect ratio.
///
/// Parsed from either a `"W:H"` ratio string or a bare decimal. Parsing is
/// deliberately lenient: anything unparseable -- including ratios with a
/// zero or negative component, which are rejected before any division --
/// falls back to square (1:1) with a warning instead of failing the whole
/// request. The fallback is observable via [`is_fallback()`] so tests and
/// logs can tell it apart from an explicit `"1:1"`.
///
/// [`is_fallback()`]: AspectRatio::is_fallback
///
/// # Example
///
/// ```
/// use emoji_mosaic::AspectRatio;
///
/// let wide = AspectRatio::parse("16:9");
/// assert!((wide.ratio() - 16.0 / 9.0).abs() < 1e-9);
/// assert!(!wide.is_fallback());
///
/// let bad = AspectRatio::parse("0:9");
/// assert_eq!(bad.ratio(), 1.0);
/// assert!(bad.is_fallback());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    ratio: f64,
    fallback: bool,
}

impl AspectRatio {
    /// The square ratio, 1:1.
    pub const SQUARE: AspectRatio = AspectRatio {
        ratio: 1.0,
        fallback: false,
    };

    /// Parse an aspect ratio, falling back to 1:1 on any invalid input.
    pub fn parse(s: &str) -> Self {
        match Self::try_parse(s) {
            Some(ratio) => Self {
                ratio,
                fallback: false,
            },
            None => {
                warn!(input = s, "unparseable aspect ratio, falling back to 1:1");
                Self {
                    ratio: 1.0,
                    fallback: true,
                }
            }
        }
    }

    /// Strict parse: `Some(w/h)` only for a valid, strictly positive ratio.
    fn try_parse(s: &str) -> Option<f64> {
        let s = s.trim();
        if let Some((w, h)) = s.split_once(':') {
            let w: f64 = w.trim().parse().ok()?;
            let h: f64 = h.trim().parse().ok()?;
            // Reject zero/negative components before dividing.
            if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
                return None;
            }
            Some(w / h)
        } else {
            let ratio: f64 = s.parse().ok()?;
            (ratio.is_finite() && ratio > 0.0).then_some(ratio)
        }
    }

    /// Width divided by height; always finite and strictly positive.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// True when this ratio came from the 1:1 leniency fallback rather
    /// than a successfully parsed input.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}
