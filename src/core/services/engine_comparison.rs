//! Compare the errors two engines find in the same sentence
//!
//! Used to track how far `divvun-runtime` is from `divvun-checker`. Some
//! differences are known and expected; the rest need a closer look.

use serde::Serialize;

use super::cleaner::TYPO;
use crate::core::models::ErrorData;

/// Differences that are expected between the engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KnownIssue {
    /// Both report a typo, with different suggestions
    TypoSuggestions,
    /// Different suggestions, neither a typo
    Suggestions,
    /// One reports a typo where the other reports something else
    TypoVersusOther,
}

/// One error the engines disagree on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineDifference {
    /// What `divvun-checker` reported at this spot
    pub checker: Option<ErrorData>,
    /// What `divvun-runtime` reported at this spot
    pub runtime: Option<ErrorData>,
    /// Set when the difference is expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_issue: Option<KnownIssue>,
}

impl EngineDifference {
    /// Whether the difference needs a closer look
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        self.known_issue.is_none()
    }
}

fn same_span(a: &ErrorData, b: &ErrorData) -> bool {
    a.span_key() == b.span_key()
}

fn classify(checker: &ErrorData, runtime: &ErrorData) -> Option<KnownIssue> {
    let checker_typo = checker.is_type(TYPO);
    let runtime_typo = runtime.is_type(TYPO);

    if checker_typo && runtime_typo {
        Some(KnownIssue::TypoSuggestions)
    } else if checker_typo || runtime_typo {
        Some(KnownIssue::TypoVersusOther)
    } else if checker.suggestions != runtime.suggestions {
        Some(KnownIssue::Suggestions)
    } else {
        None
    }
}

/// Pair up the errors of both engines and list where they differ
///
/// Errors covering the same text with the same type and suggestions agree.
#[must_use]
pub fn engine_differences(checker: &[ErrorData], runtime: &[ErrorData]) -> Vec<EngineDifference> {
    let mut differences = Vec::new();

    for c in checker {
        match runtime.iter().find(|r| same_span(c, r)) {
            Some(r) if r.error_type == c.error_type && r.suggestions == c.suggestions => {},
            Some(r) => differences.push(EngineDifference {
                checker: Some(c.clone()),
                runtime: Some(r.clone()),
                known_issue: classify(c, r),
            }),
            None => differences.push(EngineDifference {
                checker: Some(c.clone()),
                runtime: None,
                known_issue: None,
            }),
        }
    }

    for r in runtime.iter().filter(|r| !checker.iter().any(|c| same_span(c, r))) {
        differences.push(EngineDifference {
            checker: None,
            runtime: Some(r.clone()),
            known_issue: None,
        });
    }

    differences
}
