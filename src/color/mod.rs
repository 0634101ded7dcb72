//! Color types and conversion utilities.
//!
//! The pipeline uses three color representations, each for one purpose:
//!
//! - [`Rgb`]: validated 8-bit sRGB, parsed from `#RRGGBB` hex. Use for I/O.
//! - [`Xyz`]: linear-light intermediate (D65, 0-100 scale). Conversion
//!   stepping stone only.
//! - [`Lab`]: CIE L\*a\*b\*, where Euclidean distance ([`Lab::delta_e`],
//!   CIE76) tracks perceived difference. All matching happens here.
//!
//! Conversions are pure and deterministic; malformed hex propagates as
//! [`ParseColorError`] rather than a computed garbage value.

mod distance;
mod lab;
mod naming;
mod rgb;
mod xyz;

pub use distance::color_distance;
pub use lab::Lab;
pub use naming::name_of;
pub use rgb::{ParseColorError, Rgb};
pub use xyz::Xyz;
