//! Regex-based tokenizer implementation.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{KelimeError, Result};

/// Default pattern: a run of word characters, or one character that is
/// neither a word character nor whitespace.
///
/// Word characters are letters, numerics of any kind (`²` and `½` included)
/// and `_`. Combining marks are not word characters, so a decomposed letter
/// such as `s\u{0327}` splits around its mark.
pub const DEFAULT_PATTERN: &str = r"[\p{L}\p{N}_]+|[^\p{L}\p{N}_\s]";

/// Shared tokenizer with the default pattern.
pub static DEFAULT_TOKENIZER: LazyLock<RegexTokenizer> = LazyLock::new(RegexTokenizer::default);

/// A regex-based tokenizer that extracts every match of its pattern,
/// left to right.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| KelimeError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Split `text` into tokens. Never fails once the tokenizer exists.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokens(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
