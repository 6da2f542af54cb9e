//! Command implementations for the kelime CLI.

use std::io::{self, Read, Write};

use anyhow::Context;
use log::{debug, info};

use crate::TurkishTextRules;
use crate::analysis::analyzer::{Analyzer, TurkishAnalyzer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{KelimeError, Result};

/// Sample words for the vowel harmony check.
pub const SAMPLE_HARMONY_WORDS: &[&str] =
    &["kitap", "gelmek", "otobüs", "kalem", "bilgisayar", "çiçek"];

/// Sample singular nouns.
pub const SAMPLE_SINGULARS: &[&str] = &["elma", "kalem", "ağaç", "gül", "köpek", "su", "kitap"];

/// Sample sentences for tokenization.
pub const SAMPLE_SENTENCES: &[&str] = &[
    "Merhaba, nasılsınız?",
    "Türkçe doğal dil işleme harika!",
    "Bu toolkit çok kullanışlı.",
    "Ali'nin kitabı masada.",
    "İstanbul'da güzel bir gün.",
];

/// Sample texts for accent removal.
pub const SAMPLE_ACCENTED_TEXTS: &[&str] = &["şeker çörek", "öğrenci", "ılık su", "güneş ışığı"];

/// Sample words for stemming.
pub const SAMPLE_STEM_WORDS: &[&str] = &[
    "kitaplar",
    "geleceğim",
    "arkadaşlarımla",
    "evden",
    "okulda",
    "güzellik",
];

/// Sample ASCII-typed words for diacritic restoration.
pub const SAMPLE_MISSPELLED_WORDS: &[&str] = &["cok", "guzel", "turkce", "ogretmen", "ogrenci"];

/// Execute a CLI command, writing to stdout.
pub fn execute_command(args: KelimeArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    execute_command_to(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing to `out`.
pub fn execute_command_to(args: &KelimeArgs, out: &mut dyn Write) -> Result<()> {
    let rules = TurkishTextRules::new();

    match &args.command {
        Command::Harmony(input) => {
            let results = harmony_results(&rules, &read_inputs(input)?);
            output_results("Vowel Harmony Check:", &results, args, out)
        }
        Command::Plural(input) => {
            let results = plural_results(&rules, &read_inputs(input)?);
            output_results("Pluralization:", &results, args, out)
        }
        Command::Tokenize(input) => {
            let results = tokenize_results(&rules, &read_inputs(input)?);
            output_results("Tokenization:", &results, args, out)
        }
        Command::Strip(input) => {
            let results = strip_results(&rules, &read_inputs(input)?);
            output_results("Accent Removal:", &results, args, out)
        }
        Command::Stem(input) => {
            let results = stem_results(&rules, &read_inputs(input)?);
            output_results("Stemming:", &results, args, out)
        }
        Command::Spell(input) => {
            let results: Vec<_> = read_inputs(input)?
                .iter()
                .map(|word| rules.correct(word))
                .collect();
            output_results("Spell Checking:", &results, args, out)
        }
        Command::Analyze(analyze_args) => {
            let results = analyze(analyze_args)?;
            output_results("Analysis:", &results, args, out)
        }
        Command::Demo => {
            info!("running demo over bundled samples");
            let report = demo_report(&rules);
            output_result(
                "Turkish Text Rules Example Usage",
                &report,
                args,
                out,
            )
        }
    }
}

/// Inputs from the command line, or from stdin (one per non-empty line)
/// when none were given.
pub fn read_inputs(input: &InputArgs) -> Result<Vec<String>> {
    if !input.inputs.is_empty() {
        return Ok(input.inputs.clone());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read input from stdin")?;

    let inputs = lines_to_inputs(&buffer);
    if inputs.is_empty() {
        return Err(KelimeError::invalid_argument(
            "no input given on the command line or stdin",
        ));
    }
    debug!("read {} input(s) from stdin", inputs.len());
    Ok(inputs)
}

/// Split text into trimmed, non-empty lines.
pub fn lines_to_inputs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn harmony_results<S: AsRef<str>>(rules: &TurkishTextRules, words: &[S]) -> Vec<HarmonyResult> {
    words
        .iter()
        .map(|word| HarmonyResult {
            word: word.as_ref().to_string(),
            harmonic: rules.check_vowel_harmony(word.as_ref()),
        })
        .collect()
}

fn plural_results<S: AsRef<str>>(rules: &TurkishTextRules, words: &[S]) -> Vec<PluralResult> {
    words
        .iter()
        .map(|word| PluralResult {
            singular: word.as_ref().to_string(),
            plural: rules.pluralize(word.as_ref()),
        })
        .collect()
}

fn tokenize_results<S: AsRef<str>>(rules: &TurkishTextRules, texts: &[S]) -> Vec<TokenizeResult> {
    texts
        .iter()
        .map(|text| TokenizeResult {
            text: text.as_ref().to_string(),
            tokens: rules.tokenize(text.as_ref()),
        })
        .collect()
}

fn strip_results<S: AsRef<str>>(rules: &TurkishTextRules, texts: &[S]) -> Vec<StripResult> {
    texts
        .iter()
        .map(|text| StripResult {
            original: text.as_ref().to_string(),
            stripped: rules.remove_accents(text.as_ref()),
        })
        .collect()
}

fn stem_results<S: AsRef<str>>(rules: &TurkishTextRules, words: &[S]) -> Vec<StemResult> {
    words
        .iter()
        .map(|word| StemResult {
            word: word.as_ref().to_string(),
            stem: rules.stem(word.as_ref()),
        })
        .collect()
}

fn analyze(args: &AnalyzeArgs) -> Result<Vec<AnalyzeResult>> {
    let analyzer = TurkishAnalyzer::with_options(args.strip_accents, args.stem)?;

    read_inputs(&args.input)?
        .into_iter()
        .map(|text| {
            let tokens = analyzer.analyze(&text)?.collect();
            Ok(AnalyzeResult { text, tokens })
        })
        .collect()
}

/// Run all six operations over the bundled sample inputs.
pub fn demo_report(rules: &TurkishTextRules) -> DemoReport {
    DemoReport {
        harmony: harmony_results(rules, SAMPLE_HARMONY_WORDS),
        plurals: plural_results(rules, SAMPLE_SINGULARS),
        tokenization: tokenize_results(rules, SAMPLE_SENTENCES),
        accent_removal: strip_results(rules, SAMPLE_ACCENTED_TEXTS),
        stemming: stem_results(rules, SAMPLE_STEM_WORDS),
        spelling: SAMPLE_MISSPELLED_WORDS
            .iter()
            .map(|word| rules.correct(word))
            .collect(),
    }
}
