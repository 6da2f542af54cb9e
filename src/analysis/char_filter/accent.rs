use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{canonical_combining_class, decompose_compatible};

use super::{CharFilter, Transformation};

/// Remove diacritics: NFKD-decompose, then drop every character with a
/// non-zero canonical combining class.
///
/// Works for any decomposable character, not only Turkish letters, and
/// applies compatibility decompositions (`ﬁ` becomes `fi`). Letters without
/// a decomposition are kept as they are, so dotless `ı` survives while
/// dotted `İ` becomes `I`.
///
/// # Examples
///
/// ```
/// use kelime::analysis::char_filter::accent::remove_accents;
///
/// assert_eq!(remove_accents("şeker çörek"), "seker corek");
/// ```
pub fn remove_accents(text: &str) -> String {
    text.nfkd()
        .filter(|&c| canonical_combining_class(c) == 0)
        .collect()
}

/// A char filter that strips diacritics like [`remove_accents`] and records
/// every input character whose bytes changed.
///
/// Decomposing one character at a time yields the same text as decomposing
/// the whole string: canonical reordering only moves combining marks, and
/// those are dropped.
#[derive(Clone, Debug, Default)]
pub struct AccentStripCharFilter;

impl AccentStripCharFilter {
    pub fn new() -> Self {
        AccentStripCharFilter
    }
}

impl CharFilter for AccentStripCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();

        for (start, c) in input.char_indices() {
            let end = start + c.len_utf8();
            let new_start = output.len();
            decompose_compatible(c, |d| {
                if canonical_combining_class(d) == 0 {
                    output.push(d);
                }
            });

            if output[new_start..] != input[start..end] {
                transformations.push(Transformation::new(start, end, new_start, output.len()));
            }
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "accent_strip"
    }
}
