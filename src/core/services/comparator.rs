//! Comparison of marked up errors with checker errors
//!
//! Each expected error `c` is paired with each found error `d` that covers
//! the same text. The pairs and leftovers are sorted into the categories of
//! [`Category`].

use crate::core::models::{Category, Counts, ErrorData};

/// Checker errors about doubled spaces report a different span than the
/// markup, so only their start offset is compared.
const DOUBLE_SPACE_BEFORE: &str = "double-space-before";

/// Outcome of comparing one test sentence
#[derive(Debug, Clone, Default)]
pub struct Comparison<'a> {
    /// Found with a matching correction
    pub true_positives: Vec<(&'a ErrorData, &'a ErrorData)>,
    /// Nothing marked up, nothing found
    pub true_negative: bool,
    /// Found, but no suggestion matches the markup
    pub false_positives_1: Vec<(&'a ErrorData, &'a ErrorData)>,
    /// Found, but not marked up
    pub false_positives_2: Vec<&'a ErrorData>,
    /// Found, but without suggestions
    pub false_negatives_1: Vec<(&'a ErrorData, &'a ErrorData)>,
    /// Marked up, but not found
    pub false_negatives_2: Vec<&'a ErrorData>,
}

impl Comparison<'_> {
    /// Whether the sentence passed as a whole
    #[must_use]
    pub fn passed(&self) -> bool {
        self.false_positives_1.is_empty()
            && self.false_positives_2.is_empty()
            && self.false_negatives_1.is_empty()
            && self.false_negatives_2.is_empty()
    }

    /// Number of results per category
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts {
            tp: self.true_positives.len(),
            tn: usize::from(self.true_negative),
            fp1: self.false_positives_1.len(),
            fp2: self.false_positives_2.len(),
            fn1: self.false_negatives_1.len(),
            fn2: self.false_negatives_2.len(),
        }
    }
}

/// Compare expected errors with the errors the checker found
#[must_use]
pub fn compare<'a>(expected: &'a [ErrorData], found: &'a [ErrorData]) -> Comparison<'a> {
    let pairs = |predicate: fn(&ErrorData, &ErrorData) -> bool| {
        expected
            .iter()
            .flat_map(|c| found.iter().map(move |d| (c, d)))
            .filter(|(c, d)| predicate(c, d))
            .collect::<Vec<_>>()
    };

    Comparison {
        true_positives: pairs(has_suggestions_with_hit),
        true_negative: expected.is_empty() && found.is_empty(),
        false_positives_1: pairs(has_suggestions_without_hit),
        false_positives_2: found
            .iter()
            .filter(|d| !expected.iter().any(|c| has_same_range_and_error(c, d)))
            .collect(),
        false_negatives_1: pairs(has_no_suggestions),
        false_negatives_2: expected
            .iter()
            .filter(|c| !found.iter().any(|d| has_same_range_and_error(c, d)))
            .collect(),
    }
}

/// Whether `c` (expected) and `d` (found) cover the same text
#[must_use]
pub fn has_same_range_and_error(c: &ErrorData, d: &ErrorData) -> bool {
    if d.is_type(DOUBLE_SPACE_BEFORE) {
        c.start == d.start
    } else {
        c.span_key() == d.span_key()
    }
}

/// Whether one of the marked up corrections is among the checker's suggestions
#[must_use]
pub fn has_suggestions_with_hit(c: &ErrorData, d: &ErrorData) -> bool {
    !d.suggestions.is_empty() && has_same_range_and_error(c, d) && has_hit(c, d)
}

/// Whether the checker suggests something, but not the marked up correction
#[must_use]
pub fn has_suggestions_without_hit(c: &ErrorData, d: &ErrorData) -> bool {
    has_same_range_and_error(c, d) && !d.suggestions.is_empty() && !has_hit(c, d)
}

/// Whether the checker found the error but has nothing to suggest
#[must_use]
pub fn has_no_suggestions(c: &ErrorData, d: &ErrorData) -> bool {
    has_same_range_and_error(c, d) && d.suggestions.is_empty()
}

fn has_hit(c: &ErrorData, d: &ErrorData) -> bool {
    c.suggestions.iter().any(|correct| d.suggestions.contains(correct))
}

/// Category of every reported result in `comparison`, in report order
#[must_use]
pub fn categories(comparison: &Comparison<'_>) -> Vec<Category> {
    let mut result = Vec::new();
    result.extend(std::iter::repeat_n(Category::Tp, comparison.true_positives.len()));
    if comparison.true_negative {
        result.push(Category::Tn);
    }
    result.extend(std::iter::repeat_n(Category::Fp1, comparison.false_positives_1.len()));
    result.extend(std::iter::repeat_n(Category::Fp2, comparison.false_positives_2.len()));
    result.extend(std::iter::repeat_n(Category::Fn1, comparison.false_negatives_1.len()));
    result.extend(std::iter::repeat_n(Category::Fn2, comparison.false_negatives_2.len()));
    result
}
