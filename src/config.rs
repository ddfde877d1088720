//! Codec configuration: sign and zero tokens, letter case, glyph set.
//!
//! A [`NumeralConfig`] is a plain value. Hand one to [`crate::Codec`] for
//! explicit control, or adjust the process-wide defaults in [`defaults`],
//! which the free functions [`crate::parse`] and [`crate::format`] read.
//! Configuration can be persisted as TOML.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default negative-sign token.
pub const DEFAULT_NEGATIVE_SIGN: &str = "cr";
/// Default word rendered for zero.
pub const DEFAULT_ZERO_WORD: &str = "Nulla";

/// Letter case of formatted numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

/// Alphabet used for formatted numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    /// The letters I, V, X, L, C, D, M.
    #[default]
    Ascii,
    /// Single-character numeral glyphs from the Unicode Number Forms block.
    Unicode,
}

/// How the parser recognizes the zero word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroMatch {
    /// The whole input must be the zero word (case-insensitive).
    #[default]
    Exact,
    /// Any input starting with the zero word's first letter is zero.
    Initial,
}

impl fmt::Display for LetterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterCase::Upper => write!(f, "upper"),
            LetterCase::Lower => write!(f, "lower"),
        }
    }
}

impl fmt::Display for GlyphSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphSet::Ascii => write!(f, "ascii"),
            GlyphSet::Unicode => write!(f, "unicode"),
        }
    }
}

impl fmt::Display for ZeroMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroMatch::Exact => write!(f, "exact"),
            ZeroMatch::Initial => write!(f, "initial"),
        }
    }
}

impl FromStr for LetterCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" => Ok(LetterCase::Upper),
            "lower" => Ok(LetterCase::Lower),
            _ => Err(ConfigError::UnknownValue {
                setting: "letter case",
                value: s.to_string(),
                expected: "upper, lower",
            }),
        }
    }
}

impl FromStr for GlyphSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascii" => Ok(GlyphSet::Ascii),
            "unicode" => Ok(GlyphSet::Unicode),
            _ => Err(ConfigError::UnknownValue {
                setting: "glyph set",
                value: s.to_string(),
                expected: "ascii, unicode",
            }),
        }
    }
}

impl FromStr for ZeroMatch {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(ZeroMatch::Exact),
            "initial" => Ok(ZeroMatch::Initial),
            _ => Err(ConfigError::UnknownValue {
                setting: "zero match",
                value: s.to_string(),
                expected: "exact, initial",
            }),
        }
    }
}

/// Codec settings.
///
/// The two tokens are private so they can only change through validated
/// setters; an empty token is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralConfig {
    /// Prepended to negative numerals and stripped by the parser.
    #[serde(default = "default_negative_sign")]
    negative_sign: String,
    /// Rendered for zero and accepted by the parser.
    #[serde(default = "default_zero_word")]
    zero_word: String,
    /// Letter case used when the caller does not ask for one.
    #[serde(default)]
    pub case: LetterCase,
    /// Glyph set used when the caller does not ask for one.
    #[serde(default)]
    pub glyph_set: GlyphSet,
    /// Zero-word recognition mode for the parser.
    #[serde(default)]
    pub zero_match: ZeroMatch,
}

fn default_negative_sign() -> String {
    DEFAULT_NEGATIVE_SIGN.into()
}
fn default_zero_word() -> String {
    DEFAULT_ZERO_WORD.into()
}

impl Default for NumeralConfig {
    fn default() -> Self {
        Self {
            negative_sign: default_negative_sign(),
            zero_word: default_zero_word(),
            case: LetterCase::default(),
            glyph_set: GlyphSet::default(),
            zero_match: ZeroMatch::default(),
        }
    }
}

fn validate_token(setting: &'static str, value: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::EmptyToken { setting });
    }
    Ok(())
}

impl NumeralConfig {
    /// Create a config with the given tokens and default case/glyph set.
    pub fn new(negative_sign: &str, zero_word: &str) -> ConfigResult<Self> {
        let mut config = Self::default();
        config.set_negative_sign(negative_sign)?;
        config.set_zero_word(zero_word)?;
        Ok(config)
    }

    pub fn with_case(mut self, case: LetterCase) -> Self {
        self.case = case;
        self
    }

    pub fn with_glyph_set(mut self, glyph_set: GlyphSet) -> Self {
        self.glyph_set = glyph_set;
        self
    }

    pub fn with_zero_match(mut self, zero_match: ZeroMatch) -> Self {
        self.zero_match = zero_match;
        self
    }

    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    /// Replace the negative-sign token. Empty tokens are rejected and the
    /// previous token is kept.
    pub fn set_negative_sign(&mut self, token: &str) -> ConfigResult<()> {
        validate_token("negative sign", token)?;
        self.negative_sign = token.to_string();
        Ok(())
    }

    pub fn zero_word(&self) -> &str {
        &self.zero_word
    }

    /// Replace the zero word. Empty tokens are rejected and the previous
    /// word is kept.
    pub fn set_zero_word(&mut self, word: &str) -> ConfigResult<()> {
        validate_token("zero word", word)?;
        self.zero_word = word.to_string();
        Ok(())
    }

    /// Check the token invariants; used after deserialization.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_token("negative sign", &self.negative_sign)?;
        validate_token("zero word", &self.zero_word)
    }

    /// Load from a TOML file. Missing settings take their defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded numeral config");
        Ok(config)
    }

    /// Save to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "saved numeral config");
        Ok(())
    }
}

/// Process-wide defaults read by [`crate::parse`], [`crate::format`] and
/// the `Display` impl of [`crate::Numeral`].
///
/// The settings live behind an `RwLock`. Conversions take a `snapshot()`
/// before they start, so a setter running on another thread changes the
/// next conversion, never one already in flight. Callers that need several
/// settings to change together should build a [`NumeralConfig`] and
/// `replace()` the whole value.
pub mod defaults {
    use std::sync::{LazyLock, RwLock};

    use super::{GlyphSet, LetterCase, NumeralConfig, ZeroMatch};
    use crate::error::ConfigResult;

    static DEFAULTS: LazyLock<RwLock<NumeralConfig>> =
        LazyLock::new(|| RwLock::new(NumeralConfig::default()));

    /// A copy of the current defaults.
    pub fn snapshot() -> NumeralConfig {
        DEFAULTS.read().expect("defaults lock poisoned").clone()
    }

    /// Replace every default at once.
    pub fn replace(config: NumeralConfig) -> ConfigResult<()> {
        config.validate()?;
        tracing::debug!(?config, "replacing numeral defaults");
        *DEFAULTS.write().expect("defaults lock poisoned") = config;
        Ok(())
    }

    /// Restore the built-in defaults.
    pub fn reset() {
        *DEFAULTS.write().expect("defaults lock poisoned") = NumeralConfig::default();
    }

    pub fn negative_sign() -> String {
        DEFAULTS
            .read()
            .expect("defaults lock poisoned")
            .negative_sign()
            .to_string()
    }

    pub fn set_negative_sign(token: &str) -> ConfigResult<()> {
        DEFAULTS
            .write()
            .expect("defaults lock poisoned")
            .set_negative_sign(token)?;
        tracing::debug!(token, "default negative sign changed");
        Ok(())
    }

    pub fn zero_word() -> String {
        DEFAULTS
            .read()
            .expect("defaults lock poisoned")
            .zero_word()
            .to_string()
    }

    pub fn set_zero_word(word: &str) -> ConfigResult<()> {
        DEFAULTS
            .write()
            .expect("defaults lock poisoned")
            .set_zero_word(word)?;
        tracing::debug!(word, "default zero word changed");
        Ok(())
    }

    pub fn case() -> LetterCase {
        DEFAULTS.read().expect("defaults lock poisoned").case
    }

    pub fn set_case(case: LetterCase) {
        DEFAULTS.write().expect("defaults lock poisoned").case = case;
        tracing::debug!(%case, "default letter case changed");
    }

    pub fn glyph_set() -> GlyphSet {
        DEFAULTS.read().expect("defaults lock poisoned").glyph_set
    }

    pub fn set_glyph_set(glyph_set: GlyphSet) {
        DEFAULTS.write().expect("defaults lock poisoned").glyph_set = glyph_set;
        tracing::debug!(%glyph_set, "default glyph set changed");
    }

    pub fn zero_match() -> ZeroMatch {
        DEFAULTS.read().expect("defaults lock poisoned").zero_match
    }

    pub fn set_zero_match(zero_match: ZeroMatch) {
        DEFAULTS.write().expect("defaults lock poisoned").zero_match = zero_match;
        tracing::debug!(%zero_match, "default zero match changed");
    }
}
