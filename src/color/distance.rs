//! Perceptual color distance over hex strings.

use super::lab::Lab;
use super::rgb::{ParseColorError, Rgb};
use super::xyz::Xyz;

/// Compute the CIE76 Delta-E between two hex colors.
///
/// Both inputs are parsed as `#RRGGBB` and converted through XYZ to Lab;
/// the result is the Euclidean norm of (dL, da, db). If either input fails
/// to parse the error propagates -- there is no "treat it as black"
/// fallback, and the result is never silently zero for malformed input.
///
/// # Example
///
/// ```
/// use emoji_mosaic::color_distance;
///
/// let near = color_distance("#FF0000", "#FF0101").unwrap();
/// let far = color_distance("#FF0000", "#00FFFF").unwrap();
/// assert!(far > near * 10.0);
///
/// assert!(color_distance("not-a-color", "#FF0000").is_err());
/// ```
pub fn color_distance(a: &str, b: &str) -> Result<f64, ParseColorError> {
    let a: Rgb = a.parse()?;
    let b: Rgb = b.parse()?;
    Ok(Lab::from(Xyz::from(a)).delta_e(Lab::from(Xyz::from(b))))
}
