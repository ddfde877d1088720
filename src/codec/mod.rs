//! The numeral codec: integer to text and text to integer.
//!
//! - [`format`] — the formatter, infallible for every `i64`
//! - [`parse`] — the parser, returning a typed [`ParseError`] on bad input
//!
//! A [`Codec`] binds both algorithms to one [`NumeralConfig`]. The crate-level
//! [`crate::parse`] and [`crate::format`] build a codec from a snapshot of the
//! process-wide defaults on every call.

pub mod format;
pub mod parse;

pub use format::{I32_MIN_NUMERAL, I64_MIN_NUMERAL};

use crate::config::{GlyphSet, LetterCase, NumeralConfig, defaults};
use crate::error::{ParseError, ParseResult};

/// A numeral codec bound to a fixed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codec {
    config: NumeralConfig,
}

impl Codec {
    pub fn new(config: NumeralConfig) -> Self {
        Self { config }
    }

    /// A codec using the current process-wide defaults.
    ///
    /// Later changes to the defaults do not affect the returned codec.
    pub fn from_defaults() -> Self {
        Self::new(defaults::snapshot())
    }

    pub fn config(&self) -> &NumeralConfig {
        &self.config
    }

    /// Parse a numeral, a decimal integer, or the zero word.
    pub fn parse(&self, text: &str) -> ParseResult<i64> {
        parse::parse_numeral(text, &self.config).inspect_err(|e: &ParseError| {
            tracing::trace!(input = text, error = %e, "numeral rejected");
        })
    }

    /// Format with the configured glyph set and case.
    pub fn format(&self, value: i64) -> String {
        self.format_as(value, self.config.glyph_set, self.config.case)
    }

    /// Format with an explicit glyph set and case.
    pub fn format_as(&self, value: i64, glyph_set: GlyphSet, case: LetterCase) -> String {
        format::render(value, &self.config, glyph_set, case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZeroMatch;
    use crate::glyph;

    fn codec() -> Codec {
        Codec::new(NumeralConfig::default())
    }

    fn round_trip(codec: &Codec, values: impl IntoIterator<Item = i64>) {
        for n in values {
            let text = codec.format(n);
            assert_eq!(codec.parse(&text).unwrap(), n, "{n} formatted as {text}");
        }
    }

    #[test]
    fn round_trip_classical_and_negative() {
        round_trip(&codec(), -4000..=4000);
    }

    #[test]
    fn round_trip_probe_ranges() {
        round_trip(&codec(), (4001..100_097).step_by(97));
        round_trip(&codec(), (950_000..1_050_097).step_by(97));
    }

    #[test]
    fn round_trip_unicode_lowercase_custom_tokens() {
        let config = NumeralConfig::new("minus", "nihil")
            .unwrap()
            .with_case(LetterCase::Lower)
            .with_glyph_set(GlyphSet::Unicode);
        round_trip(&Codec::new(config), (-20_000..20_000).step_by(37));
    }

    #[test]
    fn round_trip_extremes() {
        round_trip(
            &codec(),
            [i64::MIN, i64::MIN + 1, i64::MAX, i64::from(i32::MIN), i64::from(i32::MAX)],
        );
    }

    #[test]
    fn format_uses_configured_defaults() {
        let config = NumeralConfig::default()
            .with_glyph_set(GlyphSet::Unicode)
            .with_case(LetterCase::Lower);
        let codec = Codec::new(config);
        assert_eq!(codec.format(1399), "ⅿⅽⅽⅽⅹⅽⅸ");
        assert_eq!(codec.format_as(1399, GlyphSet::Ascii, LetterCase::Upper), "MCCCXCIX");
    }

    #[test]
    fn unicode_output_translates_back_to_ascii_output() {
        let codec = codec();
        for n in (-5000..5000).step_by(13).chain([1_000_000, 4_000_000_000]) {
            let unicode = codec.format_as(n, GlyphSet::Unicode, LetterCase::Upper);
            let ascii = codec.format_as(n, GlyphSet::Ascii, LetterCase::Upper);
            assert_eq!(glyph::to_ascii(&unicode), ascii);
        }
    }

    #[test]
    fn every_glyph_parses_like_its_expansion() {
        let codec = codec();
        for g in glyph::all_glyphs() {
            let from_glyph = codec.parse(&g.glyph.to_string()).unwrap();
            assert_eq!(from_glyph, codec.parse(g.ascii).unwrap());
            assert_eq!(from_glyph, i64::from(g.value));
        }
    }

    #[test]
    fn zero_word_follows_configuration() {
        let strict = codec();
        assert_eq!(strict.format(0), "Nulla");
        assert_eq!(strict.parse("nulla").unwrap(), 0);
        assert!(strict.parse("N").is_err());

        let lenient = Codec::new(NumeralConfig::default().with_zero_match(ZeroMatch::Initial));
        assert_eq!(lenient.parse("N").unwrap(), 0);
        assert_eq!(lenient.parse("Nothing at all").unwrap(), 0);
    }

    #[test]
    fn codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();
    }
}
