//! The `TurkishTextRules` façade.
//!
//! One entry point for the six rule operations. Every method is a pure
//! function of its argument; the struct only bundles the rule objects, all
//! of which read from process-wide immutable tables.
//!
//! # Examples
//!
//! ```
//! use kelime::TurkishTextRules;
//!
//! let rules = TurkishTextRules::new();
//!
//! assert!(rules.check_vowel_harmony("kitap"));
//! assert_eq!(rules.pluralize("kitap"), "kitaplar");
//! assert_eq!(rules.tokenize("Ali'nin kitabı var."), vec!["Ali'nin", "kitabı", "var", "."]);
//! assert_eq!(rules.remove_accents("şeker çörek"), "seker corek");
//! assert_eq!(rules.stem("kitaplar"), "kitap");
//! assert_eq!(rules.spell_check("kus"), ("küş".to_string(), true));
//! ```

use crate::analysis::char_filter::accent;
use crate::analysis::harmony;
use crate::analysis::plural::Pluralizer;
use crate::analysis::token::Token;
use crate::analysis::token_filter::{ApostropheMergeFilter, Stemmer, SuffixStemmer};
use crate::analysis::tokenizer::regex::DEFAULT_TOKENIZER;
use crate::spelling::{CorrectionResult, DiacriticRestorer};

/// Rule-based Turkish text utilities.
#[derive(Debug, Clone, Default)]
pub struct TurkishTextRules {
    pluralizer: Pluralizer,
    apostrophes: ApostropheMergeFilter,
    stemmer: SuffixStemmer,
    restorer: DiacriticRestorer,
}

impl TurkishTextRules {
    /// Create the rules with the built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pluralizer (e.g. one with custom exceptions).
    pub fn with_pluralizer(mut self, pluralizer: Pluralizer) -> Self {
        self.pluralizer = pluralizer;
        self
    }

    /// Replace the stemmer (e.g. one with a custom suffix list).
    pub fn with_stemmer(mut self, stemmer: SuffixStemmer) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// True when all vowels of `word` share the class of its first vowel.
    pub fn check_vowel_harmony(&self, word: &str) -> bool {
        harmony::check_vowel_harmony(word)
    }

    /// Plural form of a singular noun.
    pub fn pluralize(&self, word: &str) -> String {
        self.pluralizer.pluralize(word)
    }

    /// Tokens of `text`, with apostrophe suffixes attached to their stem.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).into_iter().map(|t| t.text).collect()
    }

    /// Like [`tokenize`](Self::tokenize), keeping positions, offsets and
    /// token types.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.apostrophes.merge(DEFAULT_TOKENIZER.tokens(text))
    }

    /// `text` with diacritics removed.
    pub fn remove_accents(&self, text: &str) -> String {
        accent::remove_accents(text)
    }

    /// `word` with at most one known suffix removed.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Diacritic restoration as a `(word, was_corrected)` pair.
    pub fn spell_check(&self, word: &str) -> (String, bool) {
        self.restorer.spell_check(word)
    }

    /// Diacritic restoration with the original word kept alongside.
    pub fn correct(&self, word: &str) -> CorrectionResult {
        self.restorer.correct(word)
    }
}
