//! Text analysis module for kelime.
//!
//! The Turkish rule engines (vowel harmony, pluralization) live here next to
//! the tokenizer/filter pipeline used for tokenization, accent stripping and
//! stemming.

pub mod analyzer;
pub mod char_filter;
pub mod harmony;
pub mod plural;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use char_filter::*;
pub use harmony::*;
pub use plural::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
