//! Integration tests for the CLI command layer

use clap::Parser;
use kelime::cli::args::KelimeArgs;
use kelime::cli::commands::execute_command_to;
use kelime::cli::output::{DemoReport, StripResult};
use kelime::error::Result;

fn run(argv: &[&str]) -> Result<String> {
    let args = KelimeArgs::try_parse_from(argv).unwrap();
    let mut buf = Vec::new();
    execute_command_to(&args, &mut buf)?;
    Ok(String::from_utf8(buf).unwrap())
}

#[test]
fn test_strip_command_json_roundtrips() -> Result<()> {
    let output = run(&["kelime", "--format", "json", "strip", "şeker çörek", "ılık su"])?;
    let results: Vec<StripResult> = serde_json::from_str(output.trim())?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].stripped, "seker corek");
    assert_eq!(results[1].stripped, "ılık su");
    Ok(())
}

#[test]
fn test_spell_command_human() -> Result<()> {
    let output = run(&["kelime", "spell", "turkce", "çay"])?;

    assert_eq!(
        output,
        "Spell Checking:\n  'turkce' corrected to 'türkçe'\n  'çay' is correctly spelled\n"
    );
    Ok(())
}

#[test]
fn test_tokenize_command_quiet() -> Result<()> {
    let output = run(&["kelime", "-q", "tokenize", "Ali'nin kitabı var."])?;

    assert_eq!(
        output,
        "  Original: 'Ali'nin kitabı var.'\n  Tokens: ['Ali'nin', 'kitabı', 'var', '.']\n"
    );
    Ok(())
}

#[test]
fn test_demo_json_report() -> Result<()> {
    let output = run(&["kelime", "-f", "json", "--pretty", "demo"])?;
    let report: DemoReport = serde_json::from_str(&output)?;

    assert_eq!(report.plurals.len(), 7);
    assert_eq!(report.plurals[6].plural, "kitaplar");
    assert_eq!(report.stemming[3].stem, "ev");
    assert_eq!(report.spelling[0].corrected, "çök");
    assert!(output.contains("\n  \"harmony\": ["));
    Ok(())
}
