//! Apostrophe merge filter.
//!
//! Turkish attaches case and possessive suffixes to proper nouns with an
//! apostrophe (`Ali'nin`, `İstanbul'da`). A regex tokenizer splits those into
//! three tokens; this filter glues them back together.
//!
//! # Examples
//!
//! ```
//! use kelime::analysis::token::Token;
//! use kelime::analysis::token_filter::Filter;
//! use kelime::analysis::token_filter::apostrophe::ApostropheMergeFilter;
//!
//! let filter = ApostropheMergeFilter::new();
//! let tokens = vec![Token::new("Ali", 0), Token::new("'", 1), Token::new("nin", 2)];
//! let merged: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].text, "Ali'nin");
//! ```

use log::trace;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// The apostrophe that joins a suffix to its stem.
pub const APOSTROPHE: &str = "'";

/// A filter that merges `previous`, `'`, `next` into a single token.
///
/// A lone apostrophe that is the first or last token is left standalone.
/// Output positions are renumbered from zero; a merged token spans from the
/// start of the previous token to the end of the next one.
#[derive(Clone, Debug, Default)]
pub struct ApostropheMergeFilter;

impl ApostropheMergeFilter {
    /// Create a new apostrophe merge filter.
    pub fn new() -> Self {
        ApostropheMergeFilter
    }

    /// Merge apostrophe-attached suffixes in a single forward pass.
    pub fn merge(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            let interior = i > 0 && i + 1 < tokens.len();

            if token.text == APOSTROPHE && interior {
                if let Some(previous) = merged.last_mut() {
                    let next = &tokens[i + 1];
                    trace!("merging clitic: {}{}{}", previous.text, token.text, next.text);

                    previous.text.push_str(&token.text);
                    previous.text.push_str(&next.text);
                    previous.end_offset = next.end_offset;
                    previous.token_type = TokenType::Clitic;

                    // The following token is consumed by the merge.
                    i += 2;
                    continue;
                }
            }

            merged.push(token.with_position(merged.len()));
            i += 1;
        }

        merged
    }
}

impl Filter for ApostropheMergeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let merged = self.merge(tokens.collect());
        Ok(Box::new(merged.into_iter()))
    }

    fn name(&self) -> &'static str {
        "apostrophe_merge"
    }
}
