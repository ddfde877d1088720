//! Rich diagnostic error types for the numeris codec.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly which part of
//! the input or configuration was rejected.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for numeris.
///
/// Each variant wraps a subsystem-specific error, preserving the diagnostic
/// codes and help text through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum NumerisError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// How a numeral's magnitude markers failed to balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imbalance {
    /// A `)` appeared with no open marker; `position` is its character index
    /// in the normalized numeral body.
    StrayClose { position: usize },
    /// The input ended with this many markers still open.
    Unclosed { open: usize },
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Imbalance::StrayClose { position } => {
                write!(f, "unmatched ')' at position {position}")
            }
            Imbalance::Unclosed { open } => write!(f, "{open} '(' left open"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("unbalanced parenthesis in \"{input}\": {fault}")]
    #[diagnostic(
        code(numeris::parse::unbalanced_parenthesis),
        help(
            "Each '(' multiplies the numerals after it by 1000 until the matching ')'. \
             Every '(' needs exactly one ')' and a ')' may never come first."
        )
    )]
    UnbalancedParenthesis { input: String, fault: Imbalance },

    #[error("unrecognized symbol '{symbol}' at position {position} in \"{input}\"")]
    #[diagnostic(
        code(numeris::parse::unrecognized_symbol),
        help(
            "Numerals may contain I, V, X, L, C, D, M (or their Unicode glyphs), \
             '(' and ')' as magnitude markers, and spaces or underscores as separators. \
             A leading negative-sign token and the zero word are also accepted."
        )
    )]
    UnrecognizedSymbol {
        input: String,
        symbol: char,
        position: usize,
    },

    #[error("no numeral found in \"{input}\"")]
    #[diagnostic(
        code(numeris::parse::empty),
        help("Provide at least one numeral letter, the zero word, or a decimal integer.")
    )]
    Empty { input: String },

    #[error("numeral \"{input}\" is outside the signed 64-bit range")]
    #[diagnostic(
        code(numeris::parse::overflow),
        help(
            "The largest magnitudes are ((((((IX)CCXX)MMMCCCLXX)MMXXXVI)DCCCLIV)DCCLXXV)DCCCVII \
             and, negated, the same numeral ending in VIII. Remove a magnitude marker or digit."
        )
    )]
    Overflow { input: String },
}

/// Result type for parse operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("{setting} cannot be empty")]
    #[diagnostic(
        code(numeris::config::empty_token),
        help("The negative sign and the zero word must each be at least one character long.")
    )]
    EmptyToken { setting: &'static str },

    #[error("unknown {setting} \"{value}\"; expected one of: {expected}")]
    #[diagnostic(code(numeris::config::unknown_value))]
    UnknownValue {
        setting: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to read config file: {path}")]
    #[diagnostic(
        code(numeris::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {path}: {message}")]
    #[diagnostic(
        code(numeris::config::parse),
        help("Check the TOML syntax and the setting names in the config file.")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config file: {path}")]
    #[diagnostic(
        code(numeris::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Convenience alias for operations that may fail in either subsystem.
pub type NumerisResult<T> = std::result::Result<T, NumerisError>;
