//! Unicode numeral glyphs.
//!
//! Unicode encodes Roman numerals as single characters in the Number Forms
//! block (Ⅰ, Ⅻ, ⅿ, ...). This module maps each of them to the ASCII letters
//! it stands for and translates whole strings in either direction.
//!
//! ## Components
//!
//! - [`catalog`] — the 32 glyphs (upper and lower case) in substitution order
//! - [`translate`] — `to_ascii` / `to_unicode` string translation

pub mod catalog;
pub mod translate;

pub use catalog::{Glyph, GlyphCase, all_glyphs, lookup_ascii, lookup_glyph};
pub use translate::{has_glyphs, to_ascii, to_unicode};
