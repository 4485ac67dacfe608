//! Grammar checker port
//!
//! Defines the interface to the external grammar-checking engine.

use thiserror::Error;

use crate::core::models::ErrorData;
use crate::core::services::runtime_fixes::AisttonConversionError;

/// Errors running a grammar checker engine
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The engine could not be started
    #[error("cannot run {command}: {source}")]
    Spawn {
        /// The command line
        command: String,
        /// The underlying error
        source: std::io::Error,
    },

    /// The engine exited with an error
    #[error("{command} failed with {status}:\n{stderr}")]
    Status {
        /// The command line
        command: String,
        /// How it exited
        status: std::process::ExitStatus,
        /// What it printed on stderr
        stderr: String,
    },

    /// The engine printed something that is not a result
    #[error("cannot decode grammar checker output {line:?}: {source}")]
    Json {
        /// The offending output line
        line: String,
        /// What the JSON parser said
        source: serde_json::Error,
    },

    /// The engine returned more or fewer paragraphs than it was given
    #[error("grammar checker returned {actual} result(s) for {expected} paragraph(s)")]
    ResultCount {
        /// Paragraphs sent
        expected: usize,
        /// Results received
        actual: usize,
    },

    /// A runtime quote mark error could not be converted
    #[error(transparent)]
    Aistton(#[from] AisttonConversionError),

    /// An output cleaning pattern did not compile
    #[error("invalid output pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A worker thread panicked
    #[error("grammar checker worker thread panicked")]
    WorkerPanicked,

    /// Talking to the engine failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A paragraph as returned by the checker
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckedParagraph {
    /// The text the checker saw
    pub text: String,
    /// Errors found, offsets relative to `text`
    pub errors: Vec<ErrorData>,
}

/// Grammar checking engine abstraction
///
/// Implementations run `divvun-checker`, `divvun-runtime` or a test double.
pub trait GrammarChecker: Send + Sync {
    /// Human readable name, used in logs
    fn name(&self) -> &str;

    /// Check each paragraph separately
    ///
    /// Returns one [`CheckedParagraph`] per input paragraph, in input order.
    /// The errors are raw checker output; normalisation happens in
    /// [`crate::core::services::checker_fixes`].
    fn check(&self, paragraphs: &[String]) -> Result<Vec<CheckedParagraph>, CheckerError>;
}
