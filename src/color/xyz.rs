//! CIE XYZ tristimulus values (D65, 0-100 scale).
//!
//! XYZ is the device-independent intermediate between gamma-encoded sRGB
//! and the perceptual L\*a\*b\* space. It only exists as a stepping stone:
//! nothing in the pipeline measures distances here.

use super::rgb::Rgb;

/// sRGB gamma decode threshold (IEC 61966-2-1).
const GAMMA_THRESHOLD: f64 = 0.04045;

/// A color in CIE XYZ, relative to the D65 illuminant.
///
/// Components are on the conventional 0-100 scale (Y = 100 for the
/// reference white). Out-of-gamut values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Create a new `Xyz` value.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Decode one gamma-encoded sRGB channel (0..=1) to linear light.
///
/// Linear segment below 0.04045, power law 2.4 above, with the standard
/// 0.055 offset and 1.055 divisor.
#[inline]
fn gamma_decode(c: f64) -> f64 {
    if c > GAMMA_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

impl From<Rgb> for Xyz {
    /// Convert 8-bit sRGB to XYZ: normalize, gamma-decode each channel,
    /// then apply the sRGB-to-XYZ (D65) matrix on the 0-100 scale.
    fn from(rgb: Rgb) -> Self {
        let r = gamma_decode(rgb.r as f64 / 255.0) * 100.0;
        let g = gamma_decode(rgb.g as f64 / 255.0) * 100.0;
        let b = gamma_decode(rgb.b as f64 / 255.0) * 100.0;

        Self {
            x: r * 0.4124 + g * 0.3576 + b * 0.1805,
            y: r * 0.2126 + g * 0.7152 + b * 0.0722,
            z: r * 0.0193 + g * 0.1192 + b * 0.9505,
        }
    }
}
