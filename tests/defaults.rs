//! Process-wide default configuration.
//!
//! The defaults are global, so everything that mutates them lives in one
//! test function in its own test binary.

use numeris::config::{NumeralConfig, defaults};
use numeris::{Codec, ConfigError, GlyphSet, LetterCase, Numeral, ZeroMatch};

#[test]
fn defaults_drive_free_functions_and_display() {
    defaults::reset();
    assert_eq!(defaults::negative_sign(), "cr");
    assert_eq!(defaults::zero_word(), "Nulla");
    assert_eq!(defaults::case(), LetterCase::Upper);
    assert_eq!(defaults::glyph_set(), GlyphSet::Ascii);
    assert_eq!(defaults::zero_match(), ZeroMatch::Exact);

    let r = Numeral(1399);
    assert_eq!(r.to_string(), "MCCCXCIX");

    // Glyph set and case.
    defaults::set_glyph_set(GlyphSet::Unicode);
    assert_eq!(r.to_string(), "ⅯⅭⅭⅭⅩⅭⅨ");
    defaults::set_case(LetterCase::Lower);
    assert_eq!(r.to_string(), "ⅿⅽⅽⅽⅹⅽⅸ");
    defaults::set_glyph_set(GlyphSet::Ascii);
    assert_eq!(r.to_string(), "mcccxcix");
    assert_eq!(r.to_roman_unicode(), "ⅿⅽⅽⅽⅹⅽⅸ");
    defaults::set_case(LetterCase::Upper);
    assert_eq!(r.to_string(), "MCCCXCIX");

    // Tokens.
    defaults::set_negative_sign("-").unwrap();
    defaults::set_zero_word("Nihil").unwrap();
    assert_eq!(Numeral(-30).to_string(), "-XXX");
    assert_eq!(Numeral(0).to_string(), "Nihil");
    assert_eq!(numeris::parse("-XXX").unwrap(), -30);
    assert_eq!(numeris::parse("nihil").unwrap(), 0);
    assert!(numeris::parse("Nulla").is_err());

    // Empty tokens are rejected and the previous value kept.
    assert!(matches!(
        defaults::set_negative_sign(""),
        Err(ConfigError::EmptyToken { .. })
    ));
    assert!(matches!(
        defaults::set_zero_word(""),
        Err(ConfigError::EmptyToken { .. })
    ));
    assert_eq!(defaults::negative_sign(), "-");
    assert_eq!(defaults::zero_word(), "Nihil");

    // Zero-word match mode.
    assert!(numeris::parse("N").is_err());
    defaults::set_zero_match(ZeroMatch::Initial);
    assert_eq!(numeris::parse("N").unwrap(), 0);

    // A codec snapshot is unaffected by later changes.
    let snapshot = Codec::from_defaults();
    defaults::replace(
        NumeralConfig::new("minus ", "zero")
            .unwrap()
            .with_case(LetterCase::Lower),
    )
    .unwrap();
    assert_eq!(snapshot.format(-4), "-IV");
    assert_eq!(Numeral(-4).to_string(), "minus iv");
    assert_eq!(numeris::parse("minus iv").unwrap(), -4);

    defaults::reset();
    assert_eq!(Numeral(-4).to_string(), "crIV");
    assert_eq!(Numeral(0).to_string(), "Nulla");
}
