//! sRGB color type parsed from hex strings.
//!
//! All colors enter the pipeline as `#RRGGBB` hex strings. [`Rgb`] is the
//! validated 8-bit form; malformed input is an error value, never a zeroed
//! color.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::lab::Lab;
use super::xyz::Xyz;

/// Error type for parsing hex color strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has the wrong length (must be exactly 6 digits after
    /// stripping an optional leading '#').
    #[error("invalid hex color length (expected 6 digits, got {0})")]
    InvalidLength(usize),

    /// A character outside `[0-9A-Fa-f]` was encountered. Whitespace anywhere
    /// in the string lands here too.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// A color in 8-bit sRGB.
///
/// `Rgb` is the input/output color representation: catalog colors, grid cell
/// means, and matcher queries are all `Rgb`. Perceptual work happens in
/// [`Lab`]; convert with [`Rgb::to_lab()`].
///
/// # Parsing
///
/// The only way to obtain an `Rgb` from text is [`FromStr`], which accepts
/// `#RRGGBB` or `RRGGBB` case-insensitively and nothing else: no shorthand,
/// no whitespace tolerance. A failed parse yields [`ParseColorError`], so an
/// unparseable color can never silently become black.
///
/// # Example
///
/// ```
/// use emoji_mosaic::Rgb;
///
/// let teal: Rgb = "#008080".parse().unwrap();
/// assert_eq!(teal, Rgb::new(0, 128, 128));
/// assert_eq!(teal.to_hex(), "#008080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new `Rgb` color from channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as a canonical lowercase `#rrggbb` hex string.
    ///
    /// This is the normalized form used for cache keys and serialized
    /// output. For every valid 6-digit input, `s.parse::<Rgb>()` followed
    /// by `to_hex()` returns the lowercased input.
    #[inline]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to CIE L\*a\*b\* via linear-light XYZ.
    ///
    /// Shorthand for `Lab::from(Xyz::from(self))`.
    #[inline]
    pub fn to_lab(self) -> Lab {
        Lab::from(Xyz::from(self))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a `#RRGGBB` (or bare `RRGGBB`) hex string.
    ///
    /// Case-insensitive. Whitespace anywhere invalidates the string; there
    /// is deliberately no trimming so that padded CSV fields or query
    /// parameters fail loudly instead of matching by accident.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);

        // Reject non-hex characters before slicing so multi-byte input
        // cannot split a char boundary.
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }
        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.len()));
        }

        // All-ASCII at this point; byte slicing is safe and the radix parse
        // cannot fail.
        let parse = |range| {
            u8::from_str_radix(&s[range], 16).map_err(|_| ParseColorError::InvalidLength(s.len()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}
