//! Turkish alphabet classification.
//!
//! The shared, read-only character tables every rule in this crate consults:
//! vowels, their front/back split, and consonants. Both cases are included,
//! and the dotted/dotless I pair is kept apart (`İ`/`i` are front vowels,
//! `I`/`ı` are back vowels).
//!
//! # Examples
//!
//! ```
//! use kelime::alphabet::{is_back_vowel, is_front_vowel, is_vowel};
//!
//! assert!(is_vowel('ı'));
//! assert!(is_back_vowel('I'));
//! assert!(is_front_vowel('İ'));
//! assert!(!is_vowel('k'));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

/// Turkish vowels, lowercase then uppercase.
pub const VOWELS: &[char] = &[
    'a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü', 'A', 'E', 'I', 'İ', 'O', 'Ö', 'U', 'Ü',
];

/// Front (palatal) vowels: e i ö ü.
pub const FRONT_VOWELS: &[char] = &['e', 'i', 'ö', 'ü', 'E', 'İ', 'Ö', 'Ü'];

/// Back (velar) vowels: a ı o u.
pub const BACK_VOWELS: &[char] = &['a', 'ı', 'o', 'u', 'A', 'I', 'O', 'U'];

/// Turkish consonants.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'ç', 'd', 'f', 'g', 'ğ', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 'ş', 't', 'v',
    'y', 'z', 'B', 'C', 'Ç', 'D', 'F', 'G', 'Ğ', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'Ş',
    'T', 'V', 'Y', 'Z',
];

/// The alphabet classification as hash sets, built once on first use.
#[derive(Debug, Clone)]
pub struct TurkishAlphabet {
    pub vowels: HashSet<char>,
    pub front_vowels: HashSet<char>,
    pub back_vowels: HashSet<char>,
    pub consonants: HashSet<char>,
}

impl TurkishAlphabet {
    fn build() -> Self {
        TurkishAlphabet {
            vowels: VOWELS.iter().copied().collect(),
            front_vowels: FRONT_VOWELS.iter().copied().collect(),
            back_vowels: BACK_VOWELS.iter().copied().collect(),
            consonants: CONSONANTS.iter().copied().collect(),
        }
    }

    /// Every letter of the alphabet, vowels and consonants together.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.vowels.iter().chain(self.consonants.iter()).copied()
    }
}

/// The process-wide alphabet tables.
pub static ALPHABET: LazyLock<TurkishAlphabet> = LazyLock::new(TurkishAlphabet::build);

/// Check whether a character is a Turkish vowel (either case).
pub fn is_vowel(c: char) -> bool {
    ALPHABET.vowels.contains(&c)
}

/// Check whether a character is a front vowel.
pub fn is_front_vowel(c: char) -> bool {
    ALPHABET.front_vowels.contains(&c)
}

/// Check whether a character is a back vowel.
pub fn is_back_vowel(c: char) -> bool {
    ALPHABET.back_vowels.contains(&c)
}

/// Check whether a character is a Turkish consonant (either case).
pub fn is_consonant(c: char) -> bool {
    ALPHABET.consonants.contains(&c)
}

/// Check whether a character belongs to the Turkish alphabet at all.
pub fn is_turkish_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_and_back_partition_vowels() {
        let alphabet = &*ALPHABET;
        assert!(alphabet.front_vowels.is_disjoint(&alphabet.back_vowels));

        let union: HashSet<char> = alphabet
            .front_vowels
            .union(&alphabet.back_vowels)
            .copied()
            .collect();
        assert_eq!(union, alphabet.vowels);
    }

    #[test]
    fn test_vowels_and_consonants_disjoint() {
        assert!(ALPHABET.vowels.is_disjoint(&ALPHABET.consonants));
    }

    #[test]
    fn test_dotted_and_dotless_i() {
        assert!(is_front_vowel('i'));
        assert!(is_front_vowel('İ'));
        assert!(is_back_vowel('ı'));
        assert!(is_back_vowel('I'));
        assert!(!is_front_vowel('I'));
        assert!(!is_back_vowel('i'));
    }

    #[test]
    fn test_consonants() {
        assert!(is_consonant('ğ'));
        assert!(is_consonant('Ş'));
        assert!(is_consonant('k'));
        assert!(!is_consonant('q'));
        assert!(!is_consonant('a'));
    }

    #[test]
    fn test_turkish_letters() {
        assert!(is_turkish_letter('ç'));
        assert!(is_turkish_letter('Ü'));
        assert!(!is_turkish_letter('w'));
        assert!(!is_turkish_letter('1'));
        assert_eq!(ALPHABET.letters().count(), VOWELS.len() + CONSONANTS.len());
    }
}
