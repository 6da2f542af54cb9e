//! Noun pluralization.
//!
//! Chooses between the `-lar` and `-ler` plural suffixes from the last vowel
//! of the word, softens a final `k` to `ğ`, and consults a table of
//! irregular plurals first.
//!
//! # Examples
//!
//! ```
//! use kelime::analysis::plural::Pluralizer;
//!
//! let pluralizer = Pluralizer::new();
//! assert_eq!(pluralizer.pluralize("kitap"), "kitaplar");
//! assert_eq!(pluralizer.pluralize("su"), "sular");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use log::trace;

use crate::alphabet::is_vowel;

/// Irregular singular → plural pairs.
const DEFAULT_PLURAL_EXCEPTIONS: &[(&str, &str)] = &[("su", "sular"), ("ne", "neler")];

/// Default irregular plurals as a HashMap.
pub static DEFAULT_PLURAL_EXCEPTIONS_MAP: LazyLock<HashMap<String, String>> =
    LazyLock::new(|| {
        DEFAULT_PLURAL_EXCEPTIONS
            .iter()
            .map(|&(singular, plural)| (singular.to_string(), plural.to_string()))
            .collect()
    });

/// Back-class plural suffix.
pub const BACK_PLURAL_SUFFIX: &str = "lar";

/// Front-class plural suffix, also used when the word has no vowel.
pub const FRONT_PLURAL_SUFFIX: &str = "ler";

/// Vowels that select `-lar`. Only these lowercase letters count; an
/// uppercase back vowel still selects `-ler`.
const LAR_TRIGGER_VOWELS: &[char] = &['a', 'ı', 'o', 'u'];

#[derive(Debug, Clone)]
enum Exceptions {
    Default,
    Custom(HashMap<String, String>),
}

/// Rule-based pluralizer for Turkish nouns.
#[derive(Debug, Clone)]
pub struct Pluralizer {
    exceptions: Exceptions,
}

impl Pluralizer {
    /// Create a pluralizer backed by the built-in exception table.
    pub fn new() -> Self {
        Pluralizer {
            exceptions: Exceptions::Default,
        }
    }

    /// Create a pluralizer with a custom exception table.
    pub fn with_exceptions(exceptions: HashMap<String, String>) -> Self {
        Pluralizer {
            exceptions: Exceptions::Custom(exceptions),
        }
    }

    fn exceptions(&self) -> &HashMap<String, String> {
        match &self.exceptions {
            Exceptions::Default => &*DEFAULT_PLURAL_EXCEPTIONS_MAP,
            Exceptions::Custom(map) => map,
        }
    }

    /// Return the plural form of `word`.
    pub fn pluralize(&self, word: &str) -> String {
        if let Some(plural) = self.exceptions().get(word) {
            trace!("plural exception: {word} -> {plural}");
            return plural.clone();
        }

        let last_vowel = match word.chars().rev().find(|&c| is_vowel(c)) {
            Some(c) => c,
            None => return format!("{word}{FRONT_PLURAL_SUFFIX}"),
        };

        let suffix = if LAR_TRIGGER_VOWELS.contains(&last_vowel) {
            BACK_PLURAL_SUFFIX
        } else {
            FRONT_PLURAL_SUFFIX
        };

        // A non-empty word is guaranteed here: it contains a vowel.
        match word.chars().last() {
            Some(c) if is_vowel(c) => format!("{word}{suffix}"),
            Some('k') => {
                let stem = &word[..word.len() - 'k'.len_utf8()];
                format!("{stem}ğ{suffix}")
            }
            _ => format!("{word}{suffix}"),
        }
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceptions() {
        let pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("su"), "sular");
        assert_eq!(pluralizer.pluralize("ne"), "neler");
    }

    #[test]
    fn test_back_and_front_suffix() {
        let pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("kitap"), "kitaplar");
        assert_eq!(pluralizer.pluralize("ağaç"), "ağaçlar");
        assert_eq!(pluralizer.pluralize("kalem"), "kalemler");
        assert_eq!(pluralizer.pluralize("gül"), "güller");
    }

    #[test]
    fn test_vowel_final_words() {
        let pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("elma"), "elmalar");
        assert_eq!(pluralizer.pluralize("kedi"), "kediler");
    }

    #[test]
    fn test_final_k_softening() {
        let pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("köpek"), "köpeğler");
        assert_eq!(pluralizer.pluralize("çocuk"), "çocuğlar");
        // Only a literal lowercase final k is softened
        assert_eq!(pluralizer.pluralize("ÇOCUK"), "ÇOCUKler");
        assert_eq!(pluralizer.pluralize("renk"), "renğler");
    }

    #[test]
    fn test_no_vowel_defaults_to_ler() {
        let pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize(""), "ler");
        assert_eq!(pluralizer.pluralize("krk"), "krkler");
    }

    #[test]
    fn test_uppercase_back_vowel_selects_ler() {
        let pluralizer = Pluralizer::new();
        assert_eq!(pluralizer.pluralize("KİTAP"), "KİTAPler");
        assert_eq!(pluralizer.pluralize("Ankara"), "Ankaralar");
    }

    #[test]
    fn test_custom_exceptions() {
        let mut exceptions = HashMap::new();
        exceptions.insert("köpek".to_string(), "köpekler".to_string());
        let pluralizer = Pluralizer::with_exceptions(exceptions);

        assert_eq!(pluralizer.pluralize("köpek"), "köpekler");
        assert_eq!(pluralizer.pluralize("çocuk"), "çocuğlar");
    }
}
