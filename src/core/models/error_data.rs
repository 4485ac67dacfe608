//! A single grammar error
//!
//! Used both for errors marked up by hand in the test corpus and for
//! errors reported by the grammar checker, so the two can be compared.

use serde::{Deserialize, Serialize};

/// One grammar error within a sentence
///
/// Offsets count Unicode scalar values, not bytes, matching the offsets
/// reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ErrorData {
    /// The erroneous text as it appears in the sentence
    pub error_string: String,
    /// Offset of the first character
    pub start: usize,
    /// Offset one past the last character
    pub end: usize,
    /// Markup element name (`errorort`) or checker error id (`typo`)
    pub error_type: String,
    /// Markup error info or checker message
    pub explanation: String,
    /// Suggested corrections
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Checker title, or the markup element the error came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_error_type: Option<String>,
}

impl ErrorData {
    /// Create an error without a native type
    #[must_use]
    pub fn new(
        error_string: impl Into<String>,
        start: usize,
        end: usize,
        error_type: impl Into<String>,
        explanation: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            error_string: error_string.into(),
            start,
            end,
            error_type: error_type.into(),
            explanation: explanation.into(),
            suggestions,
            native_error_type: None,
        }
    }

    /// Set the native error type
    #[must_use]
    pub fn with_native_error_type(mut self, native: impl Into<String>) -> Self {
        self.native_error_type = Some(native.into());
        self
    }

    /// The `(start, end)` range of the error
    #[must_use]
    pub const fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Whether the error has the given type
    #[must_use]
    pub fn is_type(&self, error_type: &str) -> bool {
        self.error_type == error_type
    }

    /// The `(error_string, start, end)` triple two errors must share to cover
    /// the same text
    #[must_use]
    pub const fn span_key(&self) -> (&String, usize, usize) {
        (&self.error_string, self.start, self.end)
    }
}

/// Sort errors by their `(start, end)` range
#[must_use]
pub fn sort_by_range(mut errors: Vec<ErrorData>) -> Vec<ErrorData> {
    errors.sort_by_key(ErrorData::range);
    errors
}
