// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # numeris
//!
//! Lossless conversion between `i64` and Roman numerals, extended past the
//! classical 1–3999 range.
//!
//! ## Notation
//!
//! - **Classical letters**: I V X L C D M with subtractive pairs (IV, XC, CM)
//! - **Magnitude markers**: each `(`...`)` layer multiplies its contents by
//!   1000, so `(IV)` is 4000 and `((X)M)` is 11,000,000
//! - **Sign and zero**: a configurable negative-sign token (default `cr`) and
//!   zero word (default `Nulla`)
//! - **Unicode glyphs**: Ⅰ–Ⅿ and ⅰ–ⅿ are accepted anywhere and can be emitted
//!   instead of ASCII letters
//!
//! ## Library usage
//!
//! ```
//! use numeris::{GlyphSet, LetterCase};
//!
//! assert_eq!(numeris::format(1399, GlyphSet::Ascii, LetterCase::Upper), "MCCCXCIX");
//! assert_eq!(numeris::format(4000, GlyphSet::Ascii, LetterCase::Upper), "(IV)");
//! assert_eq!(numeris::parse("crXXX").unwrap(), -30);
//! assert_eq!(numeris::parse("ⅯⅭⅭⅭⅩⅭⅨ").unwrap(), 1399);
//! ```
//!
//! For explicit, per-instance settings build a [`Codec`] from a
//! [`NumeralConfig`]; the free functions read the process-wide
//! [`config::defaults`].

pub mod codec;
pub mod config;
pub mod error;
pub mod glyph;
pub mod numeral;

pub use codec::Codec;
pub use config::{GlyphSet, LetterCase, NumeralConfig, ZeroMatch};
pub use error::{ConfigError, NumerisError, ParseError, ParseResult};
pub use numeral::Numeral;

/// Parse a numeral with the process-wide defaults.
///
/// Accepts ASCII or Unicode numerals, the zero word, a leading negative-sign
/// token, and plain decimal integers.
pub fn parse(text: &str) -> ParseResult<i64> {
    Codec::from_defaults().parse(text)
}

/// Format `value` with the process-wide sign and zero tokens and the given
/// glyph set and case. Never fails.
pub fn format(value: i64, glyph_set: GlyphSet, case: LetterCase) -> String {
    Codec::from_defaults().format_as(value, glyph_set, case)
}
