//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: Normalizes raw text
//! 2. Tokenizer: Splits text into tokens
//! 3. Token Filters: Applied sequentially in the order they were added
//!
//! Token offsets always refer to the text passed to `analyze`: spans
//! rewritten by char filters are mapped back through the filters in
//! reverse order.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kelime::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use kelime::analysis::token_filter::{ApostropheMergeFilter, StemFilter};
//! use kelime::analysis::tokenizer::RegexTokenizer;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(ApostropheMergeFilter::new()))
//!     .add_filter(Arc::new(StemFilter::new()))
//!     .with_name("stemming");
//!
//! let tokens: Vec<_> = analyzer.analyze("kitaplar evden").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "kitap");
//! assert_eq!(tokens[1].text, "ev");
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use super::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name of this pipeline.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text);
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        debug!(
            "{}: {} char filter(s), {} token filter(s)",
            self.name,
            self.char_filters.len(),
            self.filters.len()
        );

        if filter_transformations.iter().all(|t| t.is_empty()) {
            return Ok(tokens);
        }

        let corrected: Vec<_> = tokens
            .map(|mut token| {
                for transformations in filter_transformations.iter().rev() {
                    token.start_offset = Self::correct_offset(token.start_offset, transformations);
                    token.end_offset = Self::correct_offset(token.end_offset, transformations);
                }
                token
            })
            .collect();

        Ok(Box::new(corrected.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl PipelineAnalyzer {
    /// Map an offset in a filter's output back to its input.
    ///
    /// An offset inside a rewritten span is interpolated linearly; the
    /// result is clamped to the span.
    fn correct_offset(offset: usize, transformations: &[Transformation]) -> usize {
        let mut corrected = offset as isize;

        for t in transformations {
            let original_len = (t.original_end - t.original_start) as isize;
            let new_len = (t.new_end - t.new_start) as isize;

            if offset >= t.new_end {
                corrected += original_len - new_len;
            } else if offset >= t.new_start {
                let offset_in_new = (offset - t.new_start) as isize;
                let offset_in_original = (offset_in_new * original_len / new_len).min(original_len);
                return t.original_start + offset_in_original as usize;
            } else {
                break;
            }
        }

        corrected.max(0) as usize
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
