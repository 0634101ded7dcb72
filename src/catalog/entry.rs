//! Catalog entries and glyph validation policies.

use serde::Serialize;

use crate::color::{Lab, Rgb};

/// Skin tone modifiers (Fitzpatrick scale), U+1F3FB..=U+1F3FF.
const SKIN_TONE_RANGE: std::ops::RangeInclusive<u32> = 0x1F3FB..=0x1F3FF;

/// Variation selector-16, requests emoji presentation.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Zero-width joiner, glues multi-person/compound emoji sequences.
const ZWJ: char = '\u{200D}';

/// One emoji-to-color reference entry.
///
/// The glyph is a single grapheme, possibly a multi-codepoint sequence
/// (ZWJ-joined, or followed by a variation selector or skin tone modifier).
/// The color is the entry's representative `#rrggbb`; its Lab form is
/// precomputed at construction so matching never re-converts catalog
/// colors (the per-query cost is one conversion for the query color plus
/// one subtraction per entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// The emoji character or codepoint sequence.
    pub glyph: String,
    /// Canonical lowercase `#rrggbb` color.
    pub hex: String,
    /// Optional free-text label ("Heart Red", "Kiwi", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip)]
    color: Rgb,
    #[serde(skip)]
    lab: Lab,
}

impl CatalogEntry {
    /// Create an entry, precomputing the canonical hex and Lab forms.
    pub fn new(glyph: impl Into<String>, color: Rgb, label: Option<String>) -> Self {
        Self {
            glyph: glyph.into(),
            hex: color.to_hex(),
            label,
            color,
            lab: color.to_lab(),
        }
    }

    /// The entry's representative color.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// The entry's representative color in Lab space (precomputed).
    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }
}

/// Glyph validation policy for catalog loading.
///
/// Source data has historically shipped with two mutually inconsistent
/// validation rules, so the policy is an explicit knob rather than a fixed
/// universal rule. The default is [`EmojiRanges`](GlyphPolicy::EmojiRanges):
/// it is the stricter contract and the one the strict data sets were
/// validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphPolicy {
    /// Accept any non-empty glyph containing at least one non-ASCII
    /// codepoint. Loose: rejects plain text masquerading as a glyph but
    /// admits arbitrary non-ASCII symbols (e.g. "©", "é").
    AnyNonAscii,

    /// Accept only glyphs whose base codepoint falls in a known emoji
    /// block, with ZWJ sequences and variation-selector / skin-tone
    /// modifiers handled explicitly. Strict: rejects non-emoji symbols.
    #[default]
    EmojiRanges,
}

impl GlyphPolicy {
    /// Validate a glyph under this policy.
    ///
    /// The glyph is expected pre-trimmed; both policies reject empty and
    /// all-ASCII strings.
    pub fn is_valid(self, glyph: &str) -> bool {
        if glyph.is_empty() || glyph.is_ascii() {
            return false;
        }
        match self {
            GlyphPolicy::AnyNonAscii => true,
            GlyphPolicy::EmojiRanges => {
                if glyph.contains(ZWJ) {
                    // Every non-empty ZWJ segment must itself be a valid
                    // emoji unit ("👨‍👩‍👧" -> 👨, 👩, 👧).
                    glyph
                        .split(ZWJ)
                        .filter(|part| !part.is_empty())
                        .all(is_emoji_unit)
                } else {
                    is_emoji_unit(glyph)
                }
            }
        }
    }
}

/// One base emoji codepoint plus optional trailing modifiers.
fn is_emoji_unit(part: &str) -> bool {
    let mut chars = part.chars();
    let base = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !in_emoji_block(base) {
        return false;
    }
    chars.all(|c| c == VARIATION_SELECTOR || SKIN_TONE_RANGE.contains(&(c as u32)))
}

/// Unicode blocks accepted as emoji base codepoints.
///
/// Covers Miscellaneous Symbols, Dingbats, Misc Symbols and Arrows
/// (colored squares/circles), the main emoji plane, and Symbols and
/// Pictographs Extended-A (🫐 and friends).
fn in_emoji_block(c: char) -> bool {
    matches!(c as u32,
        0x2600..=0x26FF
        | 0x2700..=0x27BF
        | 0x2B00..=0x2BFF
        | 0x1F300..=0x1F9FF
        | 0x1FA00..=0x1FAFF)
}
