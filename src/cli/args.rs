//! Command line argument parsing for the kelime CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// kelime - rule-based Turkish text utilities
#[derive(Parser, Debug, Clone)]
#[command(name = "kelime")]
#[command(about = "Rule-based Turkish orthography and morphology utilities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KelimeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        env = "KELIME_FORMAT",
        default_value = "human"
    )]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KelimeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check front/back vowel harmony of each word
    Harmony(InputArgs),

    /// Pluralize each noun
    Plural(InputArgs),

    /// Tokenize each text, keeping apostrophe suffixes attached
    Tokenize(InputArgs),

    /// Strip diacritics from each text
    Strip(InputArgs),

    /// Remove one known suffix from each word
    Stem(InputArgs),

    /// Restore Turkish letters in ASCII-typed words
    Spell(InputArgs),

    /// Run the full token pipeline over each text
    Analyze(AnalyzeArgs),

    /// Run every operation over the bundled sample inputs
    Demo,
}

/// Positional inputs shared by the per-operation commands.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Words or texts to process; read from stdin (one per line) when omitted
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

/// Arguments for the analyze command
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Strip diacritics before tokenizing (reported offsets still index the input)
    #[arg(long)]
    pub strip_accents: bool,

    /// Stem every token
    #[arg(long)]
    pub stem: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
