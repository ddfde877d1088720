//! numeris CLI: convert between integers and Roman numerals.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use numeris::config::NumeralConfig;
use numeris::glyph::{self, GlyphCase};
use numeris::{Codec, GlyphSet, LetterCase, ZeroMatch};

#[derive(Parser)]
#[command(name = "numeris", version, about = "Roman numeral codec for the full i64 range")]
struct Cli {
    /// TOML file with codec settings (negative_sign, zero_word, case, glyph_set, zero_match).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the negative-sign token.
    #[arg(long, global = true)]
    negative_sign: Option<String>,

    /// Override the word used for zero.
    #[arg(long, global = true)]
    zero_word: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format decimal integers as numerals.
    Format {
        /// Values to format (any signed 64-bit integer).
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<i64>,

        /// Emit single-glyph Unicode numerals.
        #[arg(long)]
        unicode: bool,

        /// Emit lowercase numerals.
        #[arg(long)]
        lower: bool,
    },

    /// Parse numerals (ASCII, Unicode, or decimal) into integers.
    Parse {
        /// Numerals to parse.
        #[arg(required = true, allow_hyphen_values = true)]
        numerals: Vec<String>,

        /// Treat any input starting with the zero word's first letter as zero.
        #[arg(long)]
        lenient_zero: bool,
    },

    /// Translate text between ASCII letters and Unicode numeral glyphs.
    Translate {
        /// Text to translate.
        text: String,

        /// Target alphabet.
        #[arg(long, value_enum)]
        to: Alphabet,
    },

    /// List the Unicode numeral glyph table.
    Glyphs {
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Alphabet {
    Ascii,
    Unicode,
}

#[derive(Serialize)]
struct GlyphRow {
    glyph: char,
    codepoint: String,
    ascii: &'static str,
    value: u32,
    lowercase: bool,
}

fn load_config(cli: &Cli) -> Result<NumeralConfig> {
    let mut config = match &cli.config {
        Some(path) => NumeralConfig::load(path)?,
        None => NumeralConfig::default(),
    };
    if let Some(sign) = &cli.negative_sign {
        config.set_negative_sign(sign)?;
    }
    if let Some(word) = &cli.zero_word {
        config.set_zero_word(word)?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Format {
            values,
            unicode,
            lower,
        } => {
            let glyph_set = if unicode {
                GlyphSet::Unicode
            } else {
                config.glyph_set
            };
            let case = if lower { LetterCase::Lower } else { config.case };
            let codec = Codec::new(config);
            for value in values {
                println!("{}", codec.format_as(value, glyph_set, case));
            }
        }

        Commands::Parse {
            numerals,
            lenient_zero,
        } => {
            let config = if lenient_zero {
                config.with_zero_match(ZeroMatch::Initial)
            } else {
                config
            };
            let codec = Codec::new(config);
            for numeral in &numerals {
                println!("{}", codec.parse(numeral)?);
            }
        }

        Commands::Translate { text, to } => {
            let translated = match to {
                Alphabet::Ascii => glyph::to_ascii(&text),
                Alphabet::Unicode => glyph::to_unicode(&text),
            };
            println!("{translated}");
        }

        Commands::Glyphs { json } => {
            let rows: Vec<GlyphRow> = glyph::all_glyphs()
                .iter()
                .map(|g| GlyphRow {
                    glyph: g.glyph,
                    codepoint: format!("U+{:04X}", g.glyph as u32),
                    ascii: g.ascii,
                    value: g.value,
                    lowercase: g.case == GlyphCase::Lower,
                })
                .collect();

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&rows).into_diagnostic()?
                );
            } else {
                println!("{:<6} {:<8} {:<6} {:>5}", "GLYPH", "CODE", "ASCII", "VALUE");
                for row in &rows {
                    println!(
                        "{:<6} {:<8} {:<6} {:>5}",
                        row.glyph, row.codepoint, row.ascii, row.value
                    );
                }
            }
        }
    }

    Ok(())
}
