//! Numeral to integer parsing.
//!
//! A single left-to-right pass with no lookahead: each letter is added to the
//! running sum, and when a letter is worth more than the one before it the
//! earlier letter is subtracted twice, turning its addition into a
//! subtraction (IV = 1 + 5 - 2). Parentheses scale the letters inside them by
//! 1000 per level. The sum is accumulated in `i128` so that the magnitude of
//! `i64::MIN` can be reached before the sign is applied.

use crate::config::{NumeralConfig, ZeroMatch};
use crate::error::{Imbalance, ParseError, ParseResult};
use crate::glyph;

/// Value of a single ASCII numeral letter (uppercase).
pub fn letter_value(c: char) -> Option<i128> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

fn is_zero_word(text: &str, zero_word: &str, mode: ZeroMatch) -> bool {
    match mode {
        ZeroMatch::Exact => text == zero_word,
        ZeroMatch::Initial => zero_word
            .chars()
            .next()
            .is_some_and(|first| text.starts_with(first)),
    }
}

/// Running state of the left-to-right scan.
struct Scan<'a> {
    input: &'a str,
    depth: usize,
    sum: i128,
    last: i128,
    letters: usize,
}

impl<'a> Scan<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            depth: 0,
            sum: 0,
            last: 0,
            letters: 0,
        }
    }

    fn overflow(&self) -> ParseError {
        ParseError::Overflow {
            input: self.input.to_string(),
        }
    }

    fn open(&mut self) {
        self.depth += 1;
        self.last = 0;
    }

    fn close(&mut self, position: usize) -> ParseResult<()> {
        if self.depth == 0 {
            return Err(ParseError::UnbalancedParenthesis {
                input: self.input.to_string(),
                fault: Imbalance::StrayClose { position },
            });
        }
        self.depth -= 1;
        self.last = 0;
        Ok(())
    }

    fn letter(&mut self, unit: i128) -> ParseResult<()> {
        let multiplier = u32::try_from(self.depth)
            .ok()
            .and_then(|depth| 1000i128.checked_pow(depth))
            .ok_or_else(|| self.overflow())?;
        let value = unit.checked_mul(multiplier).ok_or_else(|| self.overflow())?;

        self.sum = self.sum.checked_add(value).ok_or_else(|| self.overflow())?;
        if self.last < value {
            self.sum = self
                .last
                .checked_mul(2)
                .and_then(|twice| self.sum.checked_sub(twice))
                .ok_or_else(|| self.overflow())?;
        }
        self.last = value;
        self.letters += 1;
        Ok(())
    }

    fn finish(self, negative: bool) -> ParseResult<i64> {
        if self.depth != 0 {
            return Err(ParseError::UnbalancedParenthesis {
                input: self.input.to_string(),
                fault: Imbalance::Unclosed { open: self.depth },
            });
        }
        if self.letters == 0 {
            return Err(ParseError::Empty {
                input: self.input.to_string(),
            });
        }
        let signed = if negative {
            self.sum.checked_neg().ok_or_else(|| self.overflow())?
        } else {
            self.sum
        };
        i64::try_from(signed).map_err(|_| self.overflow())
    }
}

/// Parse `text` using the tokens and zero-match mode in `config`.
///
/// Positions reported in errors are character indices into the trimmed,
/// uppercased input.
pub fn parse_numeral(text: &str, config: &NumeralConfig) -> ParseResult<i64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let upper = trimmed.to_uppercase();
    if upper.is_empty() {
        return Err(ParseError::Empty {
            input: text.to_string(),
        });
    }

    let zero_word = config.zero_word().to_uppercase();
    if is_zero_word(&upper, &zero_word, config.zero_match) {
        return Ok(0);
    }

    let sign = config.negative_sign().to_uppercase();
    let (negative, body, offset) = match upper.strip_prefix(sign.as_str()) {
        Some(rest) => (true, rest, sign.chars().count()),
        None => (false, upper.as_str(), 0),
    };
    if negative && is_zero_word(body, &zero_word, config.zero_match) {
        return Ok(0);
    }

    let mut scan = Scan::new(text);
    for (index, c) in body.chars().enumerate() {
        let position = offset + index;
        match c {
            '(' => scan.open(),
            ')' => scan.close(position)?,
            ' ' | '_' => {}
            c => {
                if let Some(unit) = letter_value(c) {
                    scan.letter(unit)?;
                } else if let Some(g) = glyph::lookup_glyph(c) {
                    for letter in g.ascii.chars() {
                        // Catalog expansions only use numeral letters.
                        if let Some(unit) = letter_value(letter) {
                            scan.letter(unit)?;
                        }
                    }
                } else {
                    return Err(ParseError::UnrecognizedSymbol {
                        input: text.to_string(),
                        symbol: c,
                        position,
                    });
                }
            }
        }
    }
    scan.finish(negative)
}
