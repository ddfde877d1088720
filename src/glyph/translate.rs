//! Translation between the single-glyph Unicode numeral alphabet and the
//! multi-letter ASCII alphabet.

use crate::glyph::catalog;

/// Replace every Unicode numeral glyph with its ASCII expansion.
///
/// Glyphs of either case expand to uppercase ASCII. Everything else,
/// including ASCII letters, passes through unchanged.
pub fn to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match catalog::lookup_glyph(c) {
            Some(glyph) => out.push_str(glyph.ascii),
            None => out.push(c),
        }
    }
    out
}

/// Replace every uppercase ASCII expansion with its uppercase glyph.
///
/// Entries are applied in catalog order, so "XII" becomes a single glyph
/// rather than "X" followed by "II". Lowercase ASCII is not touched.
pub fn to_unicode(text: &str) -> String {
    let mut out = text.to_string();
    for glyph in catalog::upper_glyphs() {
        if out.contains(glyph.ascii) {
            out = out.replace(glyph.ascii, glyph.glyph.encode_utf8(&mut [0; 4]));
        }
    }
    out
}

/// Whether `text` contains at least one Unicode numeral glyph.
pub fn has_glyphs(text: &str) -> bool {
    text.chars().any(catalog::is_numeral_glyph)
}
