//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{KelimeArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::CorrectionResult;

/// Vowel harmony verdict for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyResult {
    pub word: String,
    pub harmonic: bool,
}

/// Plural form of one noun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralResult {
    pub singular: String,
    pub plural: String,
}

/// Tokens of one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub text: String,
    pub tokens: Vec<String>,
}

/// Accent-stripped form of one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripResult {
    pub original: String,
    pub stripped: String,
}

/// Stem of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
}

/// Analyzed tokens of one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Every operation run over the sample inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    pub harmony: Vec<HarmonyResult>,
    pub plurals: Vec<PluralResult>,
    pub tokenization: Vec<TokenizeResult>,
    pub accent_removal: Vec<StripResult>,
    pub stemming: Vec<StemResult>,
    pub spelling: Vec<CorrectionResult>,
}

/// Records that know how to print themselves for humans.
pub trait HumanOutput {
    /// Write the human-readable form of this record.
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for HarmonyResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Is '{}' vowel harmonic? {}", self.word, self.harmonic)
    }
}

impl HumanOutput for PluralResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Plural of '{}': {}", self.singular, self.plural)
    }
}

impl HumanOutput for TokenizeResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Original: '{}'", self.text)?;
        writeln!(out, "  Tokens: {}", quoted_list(self.tokens.iter()))
    }
}

impl HumanOutput for StripResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Original: '{}'", self.original)?;
        writeln!(out, "  Without accents: '{}'", self.stripped)
    }
}

impl HumanOutput for StemResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Original: '{}'", self.word)?;
        writeln!(out, "  Stemmed: '{}'", self.stem)
    }
}

impl HumanOutput for CorrectionResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.was_corrected {
            writeln!(out, "  '{}' corrected to '{}'", self.original, self.corrected)
        } else {
            writeln!(out, "  '{}' is correctly spelled", self.original)
        }
    }
}

impl HumanOutput for AnalyzeResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  Original: '{}'", self.text)?;
        for token in &self.tokens {
            writeln!(
                out,
                "    {:<11} [{:>4}..{:>4}] {}",
                format!("{:?}", token.token_type),
                token.start_offset,
                token.end_offset,
                token.text
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for DemoReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        write_section(out, "Vowel Harmony Check:", &self.harmony)?;
        write_section(out, "Pluralization:", &self.plurals)?;
        write_section(out, "Tokenization:", &self.tokenization)?;
        write_section(out, "Accent Removal:", &self.accent_removal)?;
        write_section(out, "Stemming:", &self.stemming)?;
        write_section(out, "Spell Checking:", &self.spelling)
    }
}

fn write_section<T: HumanOutput>(out: &mut dyn Write, title: &str, items: &[T]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for item in items {
        item.write_human(out)?;
    }
    writeln!(out)
}

/// Render tokens as `['a', 'b']`.
fn quoted_list<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let quoted: Vec<String> = items.map(|s| format!("'{s}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Output a list of records in the specified format.
pub fn output_results<T>(
    message: &str,
    results: &[T],
    args: &KelimeArgs,
    out: &mut dyn Write,
) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "{message}")?;
            }
            for result in results {
                result.write_human(out)?;
            }
        }
        OutputFormat::Json => output_json(&results, args, out)?,
    }
    Ok(())
}

/// Output a single record in the specified format.
pub fn output_result<T>(
    message: &str,
    result: &T,
    args: &KelimeArgs,
    out: &mut dyn Write,
) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => output_json(result, args, out)?,
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize + ?Sized>(
    result: &T,
    args: &KelimeArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn render<T: HumanOutput>(record: &T) -> String {
        let mut buf = Vec::new();
        record.write_human(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_records() {
        let harmony = HarmonyResult {
            word: "kitap".to_string(),
            harmonic: true,
        };
        assert_eq!(render(&harmony), "  Is 'kitap' vowel harmonic? true\n");

        let tokens = TokenizeResult {
            text: "Ali'nin kitabı".to_string(),
            tokens: vec!["Ali'nin".to_string(), "kitabı".to_string()],
        };
        assert_eq!(
            render(&tokens),
            "  Original: 'Ali'nin kitabı'\n  Tokens: ['Ali'nin', 'kitabı']\n"
        );
    }

    #[test]
    fn test_human_correction() {
        let corrected = CorrectionResult {
            original: "cok".to_string(),
            corrected: "çök".to_string(),
            was_corrected: true,
        };
        assert_eq!(render(&corrected), "  'cok' corrected to 'çök'\n");

        let unchanged = CorrectionResult {
            original: "çay".to_string(),
            corrected: "çay".to_string(),
            was_corrected: false,
        };
        assert_eq!(render(&unchanged), "  'çay' is correctly spelled\n");
    }

    #[test]
    fn test_json_output() {
        let args = KelimeArgs::try_parse_from(["kelime", "-f", "json", "demo"]).unwrap();
        let results = vec![PluralResult {
            singular: "su".to_string(),
            plural: "sular".to_string(),
        }];

        let mut buf = Vec::new();
        output_results("Pluralization:", &results, &args, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[{\"singular\":\"su\",\"plural\":\"sular\"}]\n"
        );
    }

    #[test]
    fn test_quiet_human_output_skips_title() {
        let args = KelimeArgs::try_parse_from(["kelime", "-q", "demo"]).unwrap();
        let results = vec![StemResult {
            word: "evden".to_string(),
            stem: "ev".to_string(),
        }];

        let mut buf = Vec::new();
        output_results("Stemming:", &results, &args, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "  Original: 'evden'\n  Stemmed: 'ev'\n"
        );
    }
}
