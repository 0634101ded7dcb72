//! The emoji catalog and its CSV loader.
//!
//! A catalog is built once at startup from a tabular source and is
//! immutable afterwards; reloading means constructing a new catalog and
//! handing it to a new matcher. Loading is fatal on batch-level problems
//! (missing file, wrong header schema) and tolerant on row-level ones
//! (each data row validated independently, bad rows dropped and logged).

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::entry::{CatalogEntry, GlyphPolicy};
use super::error::CatalogError;
use crate::color::Rgb;

/// The exact header row a catalog source must carry, names and order.
pub const EXPECTED_HEADER: [&str; 3] = ["Emoji", "ASCII Code", "Hex Color"];

/// One raw CSV row, deserialized before validation.
///
/// Structurally absent columns fail deserialization of the whole row;
/// value-level problems are checked field by field in [`validate_row`].
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Emoji")]
    glyph: String,
    #[serde(rename = "ASCII Code")]
    code: String,
    #[serde(rename = "Hex Color")]
    color: String,
}

/// Loading options for [`Catalog`].
///
/// # Example
///
/// ```
/// use emoji_mosaic::{CatalogOptions, GlyphPolicy};
///
/// let options = CatalogOptions::new()
///     .glyph_policy(GlyphPolicy::AnyNonAscii)
///     .dedupe_colors(true);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogOptions {
    /// Glyph validation policy. Default: [`GlyphPolicy::EmojiRanges`].
    pub glyph_policy: GlyphPolicy,

    /// Keep only the first entry per unique color.
    ///
    /// Off by default: duplicate colors are legal and the matcher's
    /// first-entry tie-break already makes them deterministic. Turn on to
    /// shrink catalogs with heavy color overlap.
    pub dedupe_colors: bool,
}

impl CatalogOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph validation policy.
    #[inline]
    pub fn glyph_policy(mut self, policy: GlyphPolicy) -> Self {
        self.glyph_policy = policy;
        self
    }

    /// Set first-wins color deduplication.
    #[inline]
    pub fn dedupe_colors(mut self, dedupe: bool) -> Self {
        self.dedupe_colors = dedupe;
        self
    }
}

/// An ordered, validated, immutable set of emoji-to-color entries.
///
/// Insertion order is source row order and is preserved for deterministic
/// tie-breaking in the matcher. An empty catalog is a valid outcome of a
/// load (zero valid rows); matching against it produces the documented
/// fallback tile rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from already-validated entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in catalog: colored squares, circles, hearts and a few
    /// fruit, with hand-assigned representative colors. Lets the matcher
    /// work without any CSV source.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|&(glyph, (r, g, b), label)| {
                CatalogEntry::new(glyph, Rgb::new(r, g, b), Some(label.to_string()))
            })
            .collect();
        Self { entries }
    }

    /// Load and validate a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Fatal only for batch-level problems: [`CatalogError::Io`] when the
    /// file cannot be opened, [`CatalogError::InvalidHeader`] when the
    /// header row differs from [`EXPECTED_HEADER`], [`CatalogError::Csv`]
    /// when the source is structurally unparseable. Invalid data rows are
    /// dropped and logged, never fatal.
    pub fn load_csv(path: impl AsRef<Path>, options: CatalogOptions) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        info!(path = %path.display(), "loading emoji catalog");
        Self::from_reader(file, options)
    }

    /// Load and validate a catalog from any UTF-8 CSV reader.
    pub fn from_reader<R: Read>(reader: R, options: CatalogOptions) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        if headers.iter().ne(EXPECTED_HEADER) {
            return Err(CatalogError::InvalidHeader {
                expected: &EXPECTED_HEADER,
                got: headers.iter().map(String::from).collect(),
            });
        }

        let mut entries: Vec<CatalogEntry> = Vec::new();
        let mut seen_colors: HashSet<Rgb> = HashSet::new();
        let mut dropped = 0usize;

        // Data rows start at line 2 (line 1 is the header).
        for (record, row_number) in csv_reader.deserialize::<RawRow>().zip(2..) {
            let raw = match record {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(row = row_number, %err, "dropping structurally invalid row");
                    dropped += 1;
                    continue;
                }
            };
            let Some(entry) = validate_row(&raw, row_number, options.glyph_policy) else {
                dropped += 1;
                continue;
            };
            if options.dedupe_colors && !seen_colors.insert(entry.color()) {
                warn!(
                    row = row_number,
                    color = %entry.hex,
                    "dropping duplicate color (first occurrence wins)"
                );
                dropped += 1;
                continue;
            }
            entries.push(entry);
        }

        if entries.is_empty() {
            warn!(dropped, "catalog loaded with zero valid entries");
        } else {
            info!(loaded = entries.len(), dropped, "catalog loaded");
        }
        Ok(Self { entries })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in source order.
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&CatalogEntry> {
        self.entries.get(idx)
    }

    /// Iterate entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

/// Validate one raw row; `None` drops it (with a warning naming the field).
///
/// Field checks are independent: glyph policy, non-negative integer code,
/// strict `#RRGGBB` color (the leading '#' is required here, unlike the
/// lenient query-side parser).
fn validate_row(raw: &RawRow, row_number: usize, policy: GlyphPolicy) -> Option<CatalogEntry> {
    let glyph = raw.glyph.trim();
    if !policy.is_valid(glyph) {
        warn!(row = row_number, glyph, "dropping row: invalid glyph");
        return None;
    }

    if raw.code.trim().parse::<u64>().is_err() {
        warn!(row = row_number, code = %raw.code, "dropping row: invalid numeric code");
        return None;
    }

    let color_field = raw.color.trim();
    let Some(hex) = color_field.strip_prefix('#') else {
        warn!(row = row_number, color = %raw.color, "dropping row: color missing '#' prefix");
        return None;
    };
    let Ok(color) = hex.parse::<Rgb>() else {
        warn!(row = row_number, color = %raw.color, "dropping row: invalid hex color");
        return None;
    };

    Some(CatalogEntry::new(glyph, color, None))
}

/// Built-in entry table: glyph, representative RGB, label.
///
/// Duplicate colors are intentional (e.g. both the red square and the red
/// heart map to pure red); the matcher's first-entry tie-break keeps
/// results deterministic.
const BUILTIN_ENTRIES: &[(&str, (u8, u8, u8), &str)] = &[
    ("\u{2B1C}", (255, 255, 255), "White"),
    ("\u{2B1C}", (248, 248, 255), "Ghost White"),
    ("\u{2B1B}", (0, 0, 0), "Black"),
    ("\u{1F7E5}", (255, 0, 0), "Red"),
    ("\u{1F7E6}", (0, 0, 255), "Blue"),
    ("\u{1F7E9}", (0, 255, 0), "Green"),
    ("\u{1F7E8}", (255, 255, 0), "Yellow"),
    ("\u{1F7E7}", (255, 165, 0), "Orange"),
    ("\u{1F7EB}", (139, 69, 19), "Brown"),
    ("\u{1F7EA}", (128, 0, 128), "Purple"),
    ("\u{26AA}", (240, 240, 240), "White Smoke"),
    ("\u{26AB}", (8, 8, 8), "Almost Black"),
    ("\u{2764}\u{FE0F}", (255, 0, 0), "Heart Red"),
    ("\u{1F499}", (0, 0, 255), "Heart Blue"),
    ("\u{1F49A}", (0, 255, 0), "Heart Green"),
    ("\u{1F49B}", (255, 215, 0), "Heart Yellow"),
    ("\u{1F9E1}", (255, 165, 0), "Heart Orange"),
    ("\u{1F49C}", (128, 0, 128), "Heart Purple"),
    ("\u{1F90E}", (139, 69, 19), "Heart Brown"),
    ("\u{1F5A4}", (0, 0, 0), "Heart Black"),
    ("\u{1F90D}", (255, 255, 255), "Heart White"),
    ("\u{2600}\u{FE0F}", (255, 215, 0), "Sun"),
    ("\u{1F319}", (192, 192, 192), "Moon"),
    ("\u{2B50}", (255, 215, 0), "Star"),
    ("\u{1F33A}", (255, 105, 180), "Flower Pink"),
    ("\u{1F338}", (255, 182, 193), "Cherry Blossom"),
    ("\u{1F34E}", (255, 0, 0), "Red Apple"),
    ("\u{1F34F}", (144, 238, 144), "Green Apple"),
    ("\u{1F34A}", (255, 165, 0), "Orange"),
    ("\u{1F34B}", (255, 215, 0), "Lemon"),
    ("\u{1F347}", (128, 0, 128), "Grapes"),
    ("\u{1FAD0}", (65, 105, 225), "Blueberries"),
    ("\u{1F95D}", (144, 238, 144), "Kiwi"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Result<Catalog, CatalogError> {
        Catalog::from_reader(csv.as_bytes(), CatalogOptions::new())
    }

    #[test]
    fn test_load_valid_rows() {
        let catalog = load(
            "Emoji,ASCII Code,Hex Color\n\
             \u{1F7E9},128999,#00FF00\n\
             \u{2B1B},11035,#000000\n",
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        // Source row order preserved.
        assert_eq!(catalog.get(0).unwrap().glyph, "\u{1F7E9}");
        assert_eq!(catalog.get(0).unwrap().hex, "#00ff00");
        assert_eq!(catalog.get(1).unwrap().glyph, "\u{2B1B}");
    }

    #[test]
    fn test_invalid_rows_dropped_not_fatal() {
        // 2 valid rows among: bad glyph, bad code, bad color, missing '#'.
        let catalog = load(
            "Emoji,ASCII Code,Hex Color\n\
             \u{1F7E9},1,#00FF00\n\
             notanemoji,2,#112233\n\
             \u{2B1B},abc,#000000\n\
             \u{1F7E5},3,#GG0000\n\
             \u{1F7E6},4,0000FF\n\
             \u{1F7E8},5,#FFFF00\n",
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().glyph, "\u{1F7E9}");
        assert_eq!(catalog.get(1).unwrap().glyph, "\u{1F7E8}");
    }

    #[test]
    fn test_wrong_header_is_schema_error() {
        let err = load("wrong,headers\nx,y\n").unwrap_err();
        match err {
            CatalogError::InvalidHeader { expected, got } => {
                assert_eq!(expected, &EXPECTED_HEADER);
                assert_eq!(got, vec!["wrong".to_string(), "headers".to_string()]);
            }
            other => panic!("expected InvalidHeader, got {other:?}"),
        }
    }

    #[test]
    fn test_reordered_header_is_schema_error() {
        // Same names, wrong order: still a schema error.
        let err = load("Hex Color,ASCII Code,Emoji\n#000000,1,\u{2B1B}\n").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidHeader { .. }));
    }

    #[test]
    fn test_zero_valid_rows_is_empty_catalog() {
        let catalog = load("Emoji,ASCII Code,Hex Color\nnope,x,#zzzzzz\n").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_negative_code_rejected() {
        let catalog = load("Emoji,ASCII Code,Hex Color\n\u{1F7E9},-5,#00FF00\n").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_dedupe_colors_first_wins() {
        let csv = "Emoji,ASCII Code,Hex Color\n\
                   \u{1F7E5},1,#FF0000\n\
                   \u{1F34E},2,#FF0000\n\
                   \u{1F7E6},3,#0000FF\n";
        let deduped =
            Catalog::from_reader(csv.as_bytes(), CatalogOptions::new().dedupe_colors(true))
                .unwrap();
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped.get(0).unwrap().glyph, "\u{1F7E5}");
        assert_eq!(deduped.get(1).unwrap().glyph, "\u{1F7E6}");

        // Default keeps both red entries.
        let plain = Catalog::from_reader(csv.as_bytes(), CatalogOptions::new()).unwrap();
        assert_eq!(plain.len(), 3);
    }

    #[test]
    fn test_loose_policy_admits_symbols() {
        let csv = "Emoji,ASCII Code,Hex Color\n\u{00A9},1,#808080\n";
        let strict = Catalog::from_reader(csv.as_bytes(), CatalogOptions::new()).unwrap();
        assert!(strict.is_empty());

        let loose = Catalog::from_reader(
            csv.as_bytes(),
            CatalogOptions::new().glyph_policy(GlyphPolicy::AnyNonAscii),
        )
        .unwrap();
        assert_eq!(loose.len(), 1);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let catalog = load("Emoji,ASCII Code,Hex Color\n \u{1F7E9} , 7 , #00FF00 \n").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().glyph, "\u{1F7E9}");
    }

    #[test]
    fn test_builtin_table_contents() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 33);

        // The white square appears twice with distinct reference colors;
        // both near-white shades must survive loading.
        let whites: Vec<&str> = catalog
            .iter()
            .filter(|e| e.glyph == "\u{2B1C}")
            .map(|e| e.hex.as_str())
            .collect();
        assert_eq!(whites, vec!["#ffffff", "#f8f8ff"]);
        assert!(catalog
            .iter()
            .any(|e| e.label.as_deref() == Some("Ghost White")));
    }

    #[test]
    fn test_builtin_catalog_passes_its_own_policy() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for entry in catalog.iter() {
            assert!(
                GlyphPolicy::EmojiRanges.is_valid(&entry.glyph),
                "builtin glyph {:?} fails the default policy",
                entry.glyph
            );
            assert!(entry.label.is_some());
        }
    }
}
