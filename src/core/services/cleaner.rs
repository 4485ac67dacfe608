//! Removal of errors that should not be compared

use crate::core::models::{ErrorData, ErrorType, TestData};

/// Checker id for spelling errors
pub const TYPO: &str = "typo";

/// Drop foreign-language markup and anything the checker found inside it
///
/// The checker has no business judging text in another language, so both
/// sides forget about it.
#[must_use]
pub fn remove_foreign(
    expected: Vec<ErrorData>,
    found: Vec<ErrorData>,
) -> (Vec<ErrorData>, Vec<ErrorData>) {
    let foreign = ErrorType::ErrorLang.name();
    let foreign_ranges: Vec<(usize, usize)> = expected
        .iter()
        .filter(|e| e.is_type(foreign))
        .map(ErrorData::range)
        .collect();

    let expected = expected.into_iter().filter(|e| !e.is_type(foreign)).collect();
    let found = found
        .into_iter()
        .filter(|d| {
            !foreign_ranges
                .iter()
                .any(|&(start, end)| start <= d.start && d.start < end && d.end <= end)
        })
        .collect();

    (expected, found)
}

/// Drop spelling errors from both sides
#[must_use]
pub fn remove_typo(expected: Vec<ErrorData>, found: Vec<ErrorData>) -> (Vec<ErrorData>, Vec<ErrorData>) {
    let ort = ErrorType::ErrorOrt.name();
    (
        expected.into_iter().filter(|e| !e.is_type(ort)).collect(),
        found.into_iter().filter(|d| !d.is_type(TYPO)).collect(),
    )
}

/// Build the [`TestData`] for one sentence
#[must_use]
pub fn clean_data(
    sentence: String,
    expected: Vec<ErrorData>,
    found: Vec<ErrorData>,
    filename: &str,
    ignore_typos: bool,
) -> TestData {
    let (mut expected_errors, mut gramcheck_errors) = remove_foreign(expected, found);
    if ignore_typos {
        (expected_errors, gramcheck_errors) = remove_typo(expected_errors, gramcheck_errors);
    }

    TestData {
        uncorrected: sentence,
        filename: filename.to_string(),
        expected_errors,
        gramcheck_errors,
    }
}
