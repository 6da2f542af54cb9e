//! Turkish suffix-stripping stemmer.

use log::trace;

use super::Stemmer;

/// Known Turkish suffixes in priority order.
///
/// Shorter suffixes sometimes precede longer ones that end the same way
/// (`a` before `da`, `dan` before `ndan`), and a few entries repeat. The
/// order is significant: the first matching entry wins.
pub const DEFAULT_TURKISH_SUFFIXES: &[&str] = &[
    "lar", "ler", "lık", "lik", "luk", "lük",
    "cı", "ci", "cu", "cü", "çı", "çi", "çu", "çü",
    "un", "ün", "ın", "in",
    "dan", "den", "tan", "ten",
    "a", "e", "ı", "i",
    "da", "de", "ta", "te",
    "nda", "nde",
    "dan", "den", "tan", "ten",
    "ndan", "nden",
    "la", "le",
    "ca", "ce",
    "im", "ım", "um", "üm",
    "sin", "sın", "sun", "sün",
    "iz", "ız", "uz", "üz",
    "siniz", "sınız", "sunuz", "sünüz",
    "lar", "ler",
    "dır", "dir", "dur", "dür", "tır", "tir", "tur", "tür",
];

/// Stemmer that removes at most one suffix from the end of a word.
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    suffixes: Vec<String>,
}

impl SuffixStemmer {
    /// Create a stemmer with the built-in Turkish suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(
            DEFAULT_TURKISH_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    /// Create a stemmer with custom suffixes, tried in the given order.
    pub fn with_suffixes(suffixes: Vec<String>) -> Self {
        SuffixStemmer { suffixes }
    }

    /// The suffixes this stemmer tries, in order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for SuffixStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let word_len = word.chars().count();

        for suffix in &self.suffixes {
            // Lengths are compared in characters; the suffix must leave
            // something behind.
            if word.ends_with(suffix.as_str()) && word_len > suffix.chars().count() {
                trace!("stem: {word} -{suffix}");
                return word[..word.len() - suffix.len()].to_string();
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "turkish_suffix"
    }
}
