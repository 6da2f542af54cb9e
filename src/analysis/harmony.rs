//! Vowel harmony checking.
//!
//! A word is harmonic when all of its vowels share the front/back class of
//! the first vowel. Words with fewer than two vowels are trivially harmonic.

use serde::{Deserialize, Serialize};

use crate::alphabet::{is_back_vowel, is_front_vowel};

/// Front/back articulation class of a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyClass {
    Front,
    Back,
}

/// Classify a character as a front or back vowel, or `None` for non-vowels.
pub fn vowel_class(c: char) -> Option<HarmonyClass> {
    if is_front_vowel(c) {
        Some(HarmonyClass::Front)
    } else if is_back_vowel(c) {
        Some(HarmonyClass::Back)
    } else {
        None
    }
}

/// Check whether a word obeys front/back vowel harmony.
///
/// Accepts any string, including the empty one.
///
/// # Examples
///
/// ```
/// use kelime::analysis::harmony::check_vowel_harmony;
///
/// assert!(check_vowel_harmony("kitap"));
/// assert!(!check_vowel_harmony("otobüs"));
/// ```
pub fn check_vowel_harmony(word: &str) -> bool {
    let mut classes = word.chars().filter_map(vowel_class);

    match classes.next() {
        Some(first) => classes.all(|class| class == first),
        None => true,
    }
}
