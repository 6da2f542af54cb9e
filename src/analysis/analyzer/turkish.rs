use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use super::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::AccentStripCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{ApostropheMergeFilter, StemFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// Turkish analysis chain: regex tokenization and apostrophe merging, with
/// optional accent stripping before and stemming after.
pub struct TurkishAnalyzer {
    inner: PipelineAnalyzer,
}

impl TurkishAnalyzer {
    /// Tokenize and merge apostrophe suffixes only.
    pub fn new() -> Result<Self> {
        Self::with_options(false, false)
    }

    /// Build the chain with accent stripping and/or stemming enabled.
    pub fn with_options(strip_accents: bool, stem: bool) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let mut analyzer = PipelineAnalyzer::new(tokenizer).with_name("turkish");

        if strip_accents {
            analyzer = analyzer.add_char_filter(Arc::new(AccentStripCharFilter::new()));
        }
        analyzer = analyzer.add_filter(Arc::new(ApostropheMergeFilter::new()));
        if stem {
            analyzer = analyzer.add_filter(Arc::new(StemFilter::new()));
        }

        Ok(Self { inner: analyzer })
    }
}

impl Default for TurkishAnalyzer {
    fn default() -> Self {
        Self::new().expect("Turkish analyzer should be creatable with default settings")
    }
}

impl Analyzer for TurkishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}

impl Debug for TurkishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurkishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
