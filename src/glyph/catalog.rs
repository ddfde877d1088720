//! Fixed glyph catalog: the 32 Unicode Roman numeral glyphs (U+2160–U+217F)
//! and their canonical ASCII expansions.
//!
//! The table is ordered. Inside each case block the longest or most specific
//! expansion comes first, so a substitution pass that walks the table never
//! lets "X" consume the front of "XII".

use std::sync::OnceLock;

/// Letter case of a Unicode numeral glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphCase {
    /// Number forms U+2160–U+216F.
    Upper,
    /// Small number forms U+2170–U+217F.
    Lower,
}

/// A single Unicode numeral glyph in the catalog.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// The Unicode codepoint.
    pub glyph: char,
    /// Canonical uppercase ASCII expansion (e.g. "VIII").
    pub ascii: &'static str,
    /// Numeric value of the glyph on its own.
    pub value: u32,
    /// Which case block the glyph belongs to.
    pub case: GlyphCase,
}

static CATALOG: OnceLock<Vec<Glyph>> = OnceLock::new();

/// Expansions in substitution order with their values.
const EXPANSIONS: [(&str, u32); 16] = [
    ("M", 1000),
    ("D", 500),
    ("C", 100),
    ("L", 50),
    ("XII", 12),
    ("XI", 11),
    ("IX", 9),
    ("X", 10),
    ("VIII", 8),
    ("VII", 7),
    ("VI", 6),
    ("IV", 4),
    ("V", 5),
    ("III", 3),
    ("II", 2),
    ("I", 1),
];

fn build_catalog() -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(EXPANSIONS.len() * 2);
    for (case, base) in [(GlyphCase::Upper, 0x2160u32), (GlyphCase::Lower, 0x2170u32)] {
        for &(ascii, value) in &EXPANSIONS {
            // Both blocks lay glyphs out as I..XII, L, C, D, M.
            let offset = match value {
                1..=12 => value - 1,
                50 => 12,
                100 => 13,
                500 => 14,
                _ => 15,
            };
            if let Some(glyph) = char::from_u32(base + offset) {
                glyphs.push(Glyph {
                    glyph,
                    ascii,
                    value,
                    case,
                });
            }
        }
    }
    glyphs
}

/// Get all 32 glyphs in substitution order (uppercase block first).
pub fn all_glyphs() -> &'static [Glyph] {
    CATALOG.get_or_init(build_catalog)
}

/// The uppercase block only, in substitution order.
pub fn upper_glyphs() -> impl Iterator<Item = &'static Glyph> {
    all_glyphs().iter().filter(|g| g.case == GlyphCase::Upper)
}

/// Look up the catalog entry for a Unicode numeral glyph.
pub fn lookup_glyph(c: char) -> Option<&'static Glyph> {
    all_glyphs().iter().find(|g| g.glyph == c)
}

/// Look up the uppercase glyph whose expansion is exactly `ascii`.
///
/// Matching is case-sensitive: expansions are uppercase.
pub fn lookup_ascii(ascii: &str) -> Option<&'static Glyph> {
    upper_glyphs().find(|g| g.ascii == ascii)
}

/// Whether `c` falls inside the Unicode Roman numeral number forms the
/// catalog covers.
pub fn is_numeral_glyph(c: char) -> bool {
    ('\u{2160}'..='\u{217F}').contains(&c)
}
