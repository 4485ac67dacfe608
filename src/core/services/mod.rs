//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! The only outside contact goes through the port traits.
//!
//! - [`checker_fixes`] - Reshape checker errors to match the markup
//! - [`runtime_fixes`] - Translate `divvun-runtime` error ids
//! - [`cleaner`] - Drop errors that should not be compared
//! - [`comparator`] - Classify expected vs. found errors
//! - [`runner`] - Drive a test run
//! - [`engine_comparison`] - Diff the errors of two engines

pub mod checker_fixes;
pub mod cleaner;
pub mod comparator;
pub mod engine_comparison;
pub mod runner;
pub mod runtime_fixes;

pub use comparator::{Comparison, compare};
pub use engine_comparison::{EngineDifference, KnownIssue, engine_differences};
pub use runner::{MarkedSentence, RunSummary, make_test_results, run_tests};
