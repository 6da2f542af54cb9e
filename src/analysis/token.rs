//! Token types and utilities for text analysis.
//!
//! A [`Token`] is a slice of the input text with its position in the token
//! stream and its byte offsets in the original string. Tokens flow from a
//! [`Tokenizer`](crate::analysis::tokenizer::Tokenizer) through
//! [`Filter`](crate::analysis::token_filter::Filter)s as a [`TokenStream`].
//!
//! # Examples
//!
//! ```
//! use kelime::analysis::token::Token;
//!
//! let token = Token::with_offsets("kitabı", 1, 9, 16);
//! assert_eq!(token.text, "kitabı");
//! assert_eq!(token.start_offset, 9);
//! assert_eq!(token.end_offset, 16);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Content classification
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// A run of word characters containing at least one letter
    Word,
    /// A run of digits only
    Num,
    /// A single symbol or punctuation character
    Punctuation,
    /// A word with an apostrophe-attached suffix, e.g. `Ali'nin`
    Clitic,
}

impl TokenType {
    /// Classify a raw token produced by a tokenizer.
    pub fn detect(text: &str) -> TokenType {
        if !text.is_empty() && text.chars().all(|c| c.is_numeric()) {
            TokenType::Num
        } else if text.chars().any(|c| c.is_alphanumeric() || c == '_') {
            TokenType::Word
        } else {
            TokenType::Punctuation
        }
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        Token {
            text,
            position,
            start_offset: 0,
            end_offset: 0,
            token_type,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("merhaba", 0);
        assert_eq!(token.text, "merhaba");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.token_type, TokenType::Word);
    }

    #[test]
    fn test_token_type_detection() {
        assert_eq!(TokenType::detect("ağaç"), TokenType::Word);
        assert_eq!(TokenType::detect("2024"), TokenType::Num);
        assert_eq!(TokenType::detect("a1"), TokenType::Word);
        assert_eq!(TokenType::detect("."), TokenType::Punctuation);
        assert_eq!(TokenType::detect("'"), TokenType::Punctuation);
    }

    #[test]
    fn test_token_methods() {
        let token = Token::with_offsets("Ali", 0, 0, 3);
        let merged = token
            .with_text("Ali'nin")
            .with_token_type(TokenType::Clitic);
        assert_eq!(merged.text, "Ali'nin");
        assert_eq!(merged.token_type, TokenType::Clitic);
        assert_eq!(merged.start_offset, 0);
        assert_eq!(merged.len(), 7);
        assert!(!merged.is_empty());
        assert_eq!(merged.with_position(4).position, 4);
        assert_eq!(merged.to_string(), "Ali'nin");
    }

    #[test]
    fn test_into_token_stream() {
        let tokens = vec![Token::new("bir", 0), Token::new("iki", 1)];
        let collected: Vec<Token> = tokens.into_token_stream().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[1].text, "iki");
    }
}
