//! Coarse human-readable color names from Lab values.
//!
//! Used by consumers that want to label a matched color ("Dark Red",
//! "Light Yellow") without shipping a full color dictionary. Deliberately
//! coarse: lightness buckets plus the dominant chromaticity axis.

use super::lab::Lab;

/// Name a Lab color with a coarse lightness + hue label.
///
/// Neutral colors (|a| and |b| below 10) become "Black", "White" or "Gray"
/// by lightness. Chromatic colors take the hue of the dominant axis (a:
/// red/green, b: yellow/blue), prefixed with "Dark" below L 35 or "Light"
/// above L 75.
pub fn name_of(lab: Lab) -> String {
    let base = if lab.l < 35.0 {
        "Dark"
    } else if lab.l > 75.0 {
        "Light"
    } else {
        ""
    };

    if lab.a.abs() < 10.0 && lab.b.abs() < 10.0 {
        return if lab.l < 20.0 {
            "Black".to_string()
        } else if lab.l > 80.0 {
            "White".to_string()
        } else {
            "Gray".to_string()
        };
    }

    let hue = if lab.a.abs() > lab.b.abs() {
        if lab.a > 0.0 {
            "Red"
        } else {
            "Green"
        }
    } else if lab.b > 0.0 {
        "Yellow"
    } else {
        "Blue"
    };

    if base.is_empty() {
        hue.to_string()
    } else {
        format!("{base} {hue}")
    }
}
