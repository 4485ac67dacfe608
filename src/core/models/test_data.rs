//! A test case ready for comparison

use super::ErrorData;

/// One test sentence with expected and found errors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestData {
    /// The sentence as fed to the checker
    pub uncorrected: String,
    /// File the test came from
    pub filename: String,
    /// Errors marked up by hand
    pub expected_errors: Vec<ErrorData>,
    /// Errors reported by the checker
    pub gramcheck_errors: Vec<ErrorData>,
}
