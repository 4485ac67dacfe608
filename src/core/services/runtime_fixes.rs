//! Fixes specific to `divvun-runtime` output
//!
//! The runtime reports wrong quote marks as `quotation-marks`; the rest of
//! the tooling expects the `punct-aistton-*` ids used by `divvun-checker`.

use thiserror::Error;

use super::checker_fixes::{AISTTON_BOTH, AISTTON_LEFT, AISTTON_RIGHT};
use crate::core::models::ErrorData;

/// Runtime id for wrong quote marks
pub const QUOTATION_MARKS: &str = "quotation-marks";

const RIGHT_QUOTE: char = '”';

/// A `quotation-marks` error whose suggestion shows no corrected quote
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cannot convert error with suggestions {suggestions:?} to aistton error.")]
pub struct AisttonConversionError {
    /// The suggestions of the offending error
    pub suggestions: Vec<String>,
}

/// Convert a runtime `quotation-marks` error to an aistton error
///
/// The side is read off the first suggestion: a corrected quote at the
/// start, at the end, or both.
pub fn divvun_runtime_to_aistton(error: &ErrorData) -> Result<ErrorData, AisttonConversionError> {
    let first = error.suggestions.first().map_or("", String::as_str);
    let error_type = match (first.starts_with(RIGHT_QUOTE), first.ends_with(RIGHT_QUOTE)) {
        (true, true) => AISTTON_BOTH,
        (true, false) => AISTTON_LEFT,
        (false, true) => AISTTON_RIGHT,
        (false, false) => {
            return Err(AisttonConversionError {
                suggestions: error.suggestions.clone(),
            });
        },
    };

    Ok(ErrorData {
        error_type: error_type.to_string(),
        native_error_type: None,
        ..error.clone()
    })
}

/// Convert every `quotation-marks` error, leaving others as they are
pub fn fix_runtime_errors(errors: Vec<ErrorData>) -> Result<Vec<ErrorData>, AisttonConversionError> {
    errors
        .into_iter()
        .map(|error| {
            if error.is_type(QUOTATION_MARKS) {
                divvun_runtime_to_aistton(&error)
            } else {
                Ok(error)
            }
        })
        .collect()
}
