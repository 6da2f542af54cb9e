//! Diacritic restoration for words typed without Turkish letters.
//!
//! This is a blind character substitution, not a dictionary lookup: every
//! ASCII stand-in (`g`, `c`, `s`, `i`, `o`, `u` and their capitals) is
//! rewritten to its Turkish counterpart. Words that legitimately contain
//! those letters, and English text, are rewritten too.

use log::debug;
use serde::{Deserialize, Serialize};

/// `(correct, mistake)` pairs in application order.
pub const COMMON_MISTAKES: &[(char, char)] = &[
    ('ğ', 'g'),
    ('Ğ', 'G'),
    ('ç', 'c'),
    ('Ç', 'C'),
    ('ş', 's'),
    ('Ş', 'S'),
    ('ı', 'i'),
    ('İ', 'I'),
    ('ö', 'o'),
    ('Ö', 'O'),
    ('ü', 'u'),
    ('Ü', 'U'),
];

/// Result of a diacritic restoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Word as given.
    pub original: String,
    /// Word after substitution; equal to `original` when nothing changed.
    pub corrected: String,
    /// Whether any substitution took place.
    pub was_corrected: bool,
}

impl CorrectionResult {
    /// The `(word, was_corrected)` pair form of this result.
    pub fn into_pair(self) -> (String, bool) {
        (self.corrected, self.was_corrected)
    }
}

/// Restores Turkish diacritics by fixed character substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiacriticRestorer;

impl DiacriticRestorer {
    /// Create a new restorer.
    pub fn new() -> Self {
        DiacriticRestorer
    }

    /// Replace every mistake character with its correct form, entry by
    /// entry, and report whether the word changed.
    pub fn correct(&self, word: &str) -> CorrectionResult {
        let mut corrected = word.to_string();
        let mut buf = [0u8; 4];

        for &(correct, mistake) in COMMON_MISTAKES {
            if corrected.contains(mistake) {
                corrected = corrected.replace(mistake, correct.encode_utf8(&mut buf));
            }
        }

        let was_corrected = corrected != word;
        if was_corrected {
            debug!("restored diacritics: {word} -> {corrected}");
        }

        CorrectionResult {
            original: word.to_string(),
            corrected,
            was_corrected,
        }
    }

    /// `(corrected, true)` if the word changed, `(word, false)` otherwise.
    pub fn spell_check(&self, word: &str) -> (String, bool) {
        self.correct(word).into_pair()
    }
}
