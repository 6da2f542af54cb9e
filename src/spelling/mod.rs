//! Spelling correction for kelime.
//!
//! Only diacritic restoration is provided: ASCII stand-ins are mapped back
//! to Turkish letters by a fixed table.

pub mod corrector;

pub use corrector::*;
