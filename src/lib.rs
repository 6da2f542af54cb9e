//! # kelime
//!
//! Rule-based Turkish orthography and morphology utilities.
//!
//! ## Features
//!
//! - Front/back vowel harmony checking
//! - Noun pluralization with `-lar`/`-ler` selection and `k` → `ğ` softening
//! - Tokenization that keeps apostrophe suffixes (`Ali'nin`) attached
//! - Diacritic stripping through NFKD decomposition
//! - Single-suffix stemming from an ordered suffix list
//! - Diacritic restoration for ASCII-typed words
//!
//! All operations are pure and read only immutable, process-wide tables.

pub mod alphabet;
pub mod analysis;
pub mod cli;
pub mod error;
pub mod rules;
pub mod spelling;

pub use rules::TurkishTextRules;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
