//! Analyzer implementations that combine tokenizers and filters.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that turn raw text into a token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This runs the complete pipeline: char filters, tokenization and all
    /// configured token filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

mod pipeline;
mod turkish;

pub use pipeline::PipelineAnalyzer;
pub use turkish::TurkishAnalyzer;
