//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the text string before it reaches a tokenizer.
//!
//! # Available Filters
//!
//! - [`accent::AccentStripCharFilter`] - NFKD decomposition with combining marks removed

/// A rewritten span: `original_start..original_end` in the input became
/// `new_start..new_end` in the output. All offsets are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and the spans that changed, ordered by
    /// position. Spans not listed are copied through unchanged.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod accent;

pub use accent::AccentStripCharFilter;
