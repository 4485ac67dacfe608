//! Crate-level error type
//!
//! Each adapter has its own error enum; this one wraps them so the CLI can
//! map failures onto exit codes.

use thiserror::Error;

use crate::adapters::corpus::CorpusError;
use crate::adapters::markup::MarkupError;
use crate::adapters::pipespec::PipespecError;
use crate::adapters::yaml::YamlTestFileError;
use crate::core::ports::CheckerError;

/// Exit code used when the requested variant is not in the pipespec
pub const EXIT_UNKNOWN_VARIANT: u8 = 5;

/// Exit code telling Make that duplicate tests were removed from a file
pub const EXIT_DUPLICATES_REMOVED: u8 = 99;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while running a grammar test
#[derive(Debug, Error)]
pub enum Error {
    /// A YAML test file could not be used
    #[error(transparent)]
    YamlTestFile(#[from] YamlTestFileError),

    /// An XML corpus file could not be used
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// A test sentence has broken error markup
    #[error(transparent)]
    Markup(#[from] MarkupError),

    /// The pipeline specification could not be read or written
    #[error(transparent)]
    Pipespec(#[from] PipespecError),

    /// The external grammar checker failed
    #[error(transparent)]
    Checker(#[from] CheckerError),

    /// Duplicate tests were found and removed from a test file
    #[error(
        "ERROR: Removed the following dupes in {}\n{}",
        .path.display(),
        .duplicates.iter().map(|test| format!("\t{test}")).collect::<Vec<_>>().join("\n")
    )]
    DuplicatesRemoved {
        /// The rewritten test file
        path: std::path::PathBuf,
        /// The tests that occurred more than once
        duplicates: Vec<String>,
    },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The process exit code this error should produce
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Pipespec(PipespecError::VariantNotFound { .. }) => EXIT_UNKNOWN_VARIANT,
            Self::DuplicatesRemoved { .. } => EXIT_DUPLICATES_REMOVED,
            _ => 1,
        }
    }
}
