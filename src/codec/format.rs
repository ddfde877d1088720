//! Integer to numeral formatting.
//!
//! Digits are written least significant first using the classical
//! units/tens/hundreds forms. From the thousands on, each group of three
//! decimal positions adds one layer of `(`...`)` around everything more
//! significant, multiplying it by 1000. A lone 1–3 in the first position of a
//! group is written as M, MM or MMM one layer further out instead.

use crate::config::{GlyphSet, LetterCase, NumeralConfig};
use crate::glyph;

/// Numeral body for `i64::MIN`, whose magnitude does not fit in `i64`.
pub const I64_MIN_NUMERAL: &str = "((((((IX)CCXX)MMMCCCLXX)MMXXXVI)DCCCLIV)DCCLXXV)DCCCVIII";

/// Numeral body for `i32::MIN`.
pub const I32_MIN_NUMERAL: &str = "((MMCXLVII)CDLXXX)MMMDCXLVIII";

/// Forms for digits 1–9 in the units, tens and hundreds position.
const TEMPLATE: [[&str; 9]; 3] = [
    ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"],
    ["X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"],
    ["C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"],
];

const STACKED: [&str; 3] = ["M", "MM", "MMM"];

/// Uppercase ASCII numeral for a magnitude, without sign. Empty for zero.
pub fn numeral_body(magnitude: u64) -> String {
    let mut body = String::new();
    let mut open = 0usize;
    let mut rest = magnitude;
    let mut pos = 0usize;

    while rest > 0 {
        let digit = (rest % 10) as usize;
        rest /= 10;

        if digit > 0 {
            let row = pos % 3;
            let stacked = pos >= 3 && row == 0 && digit <= 3;
            let letters = if stacked {
                STACKED[digit - 1]
            } else {
                TEMPLATE[row][digit - 1]
            };

            if pos >= 3 {
                let group = pos / 3;
                let needed = if stacked { group - 1 } else { group };
                if needed > open {
                    body.insert_str(0, &")".repeat(needed - open));
                    open = needed;
                }
            }
            body.insert_str(0, letters);
        }
        pos += 1;
    }

    if open > 0 {
        body.insert_str(0, &"(".repeat(open));
    }
    body
}

/// Render `value` with the given alphabet and case, taking the sign and zero
/// tokens from `config`.
pub fn render(value: i64, config: &NumeralConfig, glyph_set: GlyphSet, case: LetterCase) -> String {
    let body = match value {
        i64::MIN => I64_MIN_NUMERAL.to_string(),
        v if v == i64::from(i32::MIN) => I32_MIN_NUMERAL.to_string(),
        v => numeral_body(v.unsigned_abs()),
    };

    let mut out = if body.is_empty() {
        config.zero_word().to_string()
    } else {
        match glyph_set {
            GlyphSet::Ascii => body,
            GlyphSet::Unicode => glyph::to_unicode(&body),
        }
    };

    if case == LetterCase::Lower {
        out = out.to_lowercase();
    }

    if value < 0 {
        out.insert_str(0, config.negative_sign());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii(value: i64) -> String {
        render(value, &NumeralConfig::default(), GlyphSet::Ascii, LetterCase::Upper)
    }

    #[test]
    fn classical_range() {
        assert_eq!(ascii(1), "I");
        assert_eq!(ascii(4), "IV");
        assert_eq!(ascii(9), "IX");
        assert_eq!(ascii(14), "XIV");
        assert_eq!(ascii(40), "XL");
        assert_eq!(ascii(90), "XC");
        assert_eq!(ascii(400), "CD");
        assert_eq!(ascii(1145), "MCXLV");
        assert_eq!(ascii(1399), "MCCCXCIX");
        assert_eq!(ascii(2018), "MMXVIII");
        assert_eq!(ascii(3999), "MMMCMXCIX");
    }

    #[test]
    fn zero_uses_zero_word() {
        assert_eq!(ascii(0), "Nulla");
        let config = NumeralConfig::new("-", "Nihil").unwrap();
        assert_eq!(render(0, &config, GlyphSet::Unicode, LetterCase::Upper), "Nihil");
        assert_eq!(render(0, &config, GlyphSet::Ascii, LetterCase::Lower), "nihil");
    }

    #[test]
    fn negative_values_take_the_sign_token() {
        assert_eq!(ascii(-30), "crXXX");
        let config = NumeralConfig::new("Minus ", "Nulla").unwrap();
        assert_eq!(render(-4, &config, GlyphSet::Ascii, LetterCase::Lower), "Minus iv");
    }

    #[test]
    fn thousands_escalate_into_parentheses() {
        assert_eq!(ascii(1000), "M");
        assert_eq!(ascii(3000), "MMM");
        assert_eq!(ascii(4000), "(IV)");
        assert_eq!(ascii(5000), "(V)");
        assert_eq!(ascii(11_000), "(X)M");
        assert_eq!(ascii(14_000), "(XIV)");
        assert_eq!(ascii(999_999), "(CMXCIX)CMXCIX");
    }

    #[test]
    fn millions_nest_layers() {
        assert_eq!(ascii(1_000_000), "(M)");
        assert_eq!(ascii(1_001_000), "(M)M");
        assert_eq!(ascii(1_050_000), "(ML)");
        assert_eq!(ascii(2_004_000), "(MMIV)");
        assert_eq!(ascii(4_000_000), "((IV))");
        assert_eq!(ascii(11_000_000), "((X)M)");
        assert_eq!(ascii(4_000_000_000), "(((IV)))");
    }

    #[test]
    fn extreme_values() {
        assert_eq!(ascii(i64::MIN), format!("cr{I64_MIN_NUMERAL}"));
        assert_eq!(ascii(i64::from(i32::MIN)), format!("cr{I32_MIN_NUMERAL}"));
        assert_eq!(
            ascii(i64::MAX),
            "((((((IX)CCXX)MMMCCCLXX)MMXXXVI)DCCCLIV)DCCLXXV)DCCCVII"
        );
    }

    #[test]
    fn extreme_literals_agree_with_general_algorithm() {
        assert_eq!(numeral_body(i64::MIN.unsigned_abs()), I64_MIN_NUMERAL);
        assert_eq!(numeral_body(i64::from(i32::MIN).unsigned_abs()), I32_MIN_NUMERAL);
    }

    #[test]
    fn unicode_and_case() {
        let config = NumeralConfig::default();
        assert_eq!(render(1399, &config, GlyphSet::Unicode, LetterCase::Upper), "ⅯⅭⅭⅭⅩⅭⅨ");
        assert_eq!(render(1399, &config, GlyphSet::Unicode, LetterCase::Lower), "ⅿⅽⅽⅽⅹⅽⅸ");
        assert_eq!(render(1399, &config, GlyphSet::Ascii, LetterCase::Lower), "mcccxcix");
        assert_eq!(render(-12, &config, GlyphSet::Unicode, LetterCase::Upper), "cr\u{216B}");
    }

    #[test]
    fn body_is_empty_only_for_zero() {
        assert!(numeral_body(0).is_empty());
        assert_eq!(numeral_body(u64::MAX).chars().filter(|c| *c == '(').count(), 6);
    }
}
