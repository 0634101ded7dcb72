//! CIE L\*a\*b\* perceptual color space.
//!
//! Lab separates lightness from the two chromaticity axes, and Euclidean
//! distance in Lab (Delta-E, CIE76) tracks perceived color difference far
//! better than distance in raw RGB. Every nearest-emoji decision in this
//! crate happens here.

use super::xyz::Xyz;

/// D65 reference white in XYZ (0-100 scale).
const D65_XN: f64 = 95.047;
const D65_YN: f64 = 100.0;
const D65_ZN: f64 = 108.883;

/// CIE pivot threshold: (6/29)^3.
const PIVOT_THRESHOLD: f64 = 0.008856;

/// A color in CIE L\*a\*b\* (D65).
///
/// # Components
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white) by construction for
///   in-gamut sRGB input
/// - `a`: green-red axis (negative = green, positive = red)
/// - `b`: blue-yellow axis (negative = blue, positive = yellow)
///
/// `a` and `b` are unbounded in principle; sRGB input stays roughly within
/// -128..=127.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new `Lab` color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 Delta-E: Euclidean distance between two Lab colors.
    ///
    /// Symmetric, zero exactly when both colors are identical, and
    /// monotonic in perceived difference -- which is the whole reason the
    /// pipeline pays for the Lab conversion instead of measuring distance
    /// in RGB space.
    ///
    /// # Example
    ///
    /// ```
    /// use emoji_mosaic::Lab;
    ///
    /// let a = Lab::new(50.0, 10.0, -20.0);
    /// let b = Lab::new(60.0, 10.0, -20.0);
    /// assert!((a.delta_e(b) - 10.0).abs() < 1e-9);
    /// assert_eq!(a.delta_e(b), b.delta_e(a));
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// The CIE piecewise cube-root function: cube root above the threshold,
/// linear approximation (slope 7.787, offset 16/116) below.
#[inline]
fn pivot(t: f64) -> f64 {
    if t > PIVOT_THRESHOLD {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    /// Convert XYZ to Lab: divide by the D65 reference white, apply the
    /// CIE pivot per axis, then the standard linear combinations.
    fn from(xyz: Xyz) -> Self {
        let fx = pivot(xyz.x / D65_XN);
        let fy = pivot(xyz.y / D65_YN);
        let fz = pivot(xyz.z / D65_ZN);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
