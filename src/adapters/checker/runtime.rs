//! `divvun-runtime` engine
//!
//! The runtime checks the whole input as one text and pretty prints a
//! single JSON object, possibly with ANSI colours:
//!
//! ```text
//! {"text": "Mun leam\nDonn", "errors": [{"form": "leam", "start": 4, "end": 8, "error_id": "err-typo", ...}], "encoding": "utf-8"}
//! ```
//!
//! Errors are split back into the input lines and converted to the
//! `divvun-checker` conventions.

use std::path::Path;

use log::warn;
use regex::Regex;
use serde::Deserialize;

use super::{CheckerError, EngineCommand, check_in_chunks};
use crate::core::models::ErrorData;
use crate::core::ports::{CheckedParagraph, GrammarChecker};
use crate::core::services::runtime_fixes::fix_runtime_errors;

/// Executable name
pub const DIVVUN_RUNTIME: &str = "divvun-runtime";

/// Extension of runtime bundles
pub const DRB_EXTENSION: &str = "drb";

const ANSI_ESCAPE: &str = r"\x1b\[[0-9;]*[a-zA-Z]";
const ERROR_ID_PREFIX: &str = "err-";

/// The JSON object printed by the runtime
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeResponse {
    /// The checked text
    #[serde(default)]
    pub text: String,
    /// Errors, offsets relative to `text`
    #[serde(default)]
    pub errors: Vec<RuntimeError>,
    /// Text encoding, always utf-8 in practice
    #[serde(default)]
    pub encoding: String,
}

/// One error reported by the runtime
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeError {
    /// The erroneous text
    pub form: String,
    /// Start offset
    pub start: usize,
    /// End offset
    pub end: usize,
    /// Error id, e.g. `err-typo`
    pub error_id: String,
    /// Short name of the error
    #[serde(default)]
    pub title: String,
    /// Explanation shown to the user
    #[serde(default)]
    pub description: String,
    /// Suggested corrections
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Remove ANSI colour codes
pub fn strip_ansi_codes(text: &str) -> Result<String, CheckerError> {
    let pattern = Regex::new(ANSI_ESCAPE)?;
    Ok(pattern.replace_all(text, "").into_owned())
}

/// The first balanced `{...}` in `text`
#[must_use]
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;

    for (offset, c) in text[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            },
            _ => {},
        }
    }

    None
}

/// Parse raw runtime output
///
/// Output without a decodable JSON object gives an empty response.
pub fn parse_runtime_response(output: &str) -> Result<RuntimeResponse, CheckerError> {
    let clean = strip_ansi_codes(output)?;
    let Some(json) = extract_json(&clean) else {
        warn!("no JSON object in divvun-runtime output");
        return Ok(RuntimeResponse::default());
    };

    Ok(serde_json::from_str(json).unwrap_or_else(|e| {
        warn!("cannot decode divvun-runtime output: {e}");
        RuntimeResponse::default()
    }))
}

/// Split a response into one response per line of its text
///
/// Each error goes to the line it starts in, with line relative offsets.
#[must_use]
pub fn split_runtime_output_by_lines(response: &RuntimeResponse) -> Vec<RuntimeResponse> {
    let mut lines = Vec::new();
    let mut line_start = 0;

    for line in response.text.split('\n') {
        let line_end = line_start + line.chars().count();
        let is_last = line_end >= response.text.chars().count();
        let errors = response
            .errors
            .iter()
            .filter(|e| e.start >= line_start && (e.start < line_end || (is_last && e.start == line_end)))
            .map(|e| RuntimeError {
                start: e.start - line_start,
                end: e.end.saturating_sub(line_start),
                ..e.clone()
            })
            .collect();

        lines.push(RuntimeResponse {
            text: line.to_string(),
            errors,
            encoding: response.encoding.clone(),
        });
        line_start = line_end + 1;
    }

    lines
}

/// Convert a runtime error to `divvun-checker` form
#[must_use]
pub fn convert_runtime_error(error: &RuntimeError) -> ErrorData {
    let error_id = error.error_id.strip_prefix(ERROR_ID_PREFIX).unwrap_or(&error.error_id);
    ErrorData::new(
        error.form.clone(),
        error.start,
        error.end,
        error_id,
        error.description.clone(),
        error.suggestions.clone(),
    )
    .with_native_error_type(error.title.clone())
}

/// Convert raw runtime output to checked paragraphs
pub fn runtime_output_to_paragraphs(output: &str) -> Result<Vec<CheckedParagraph>, CheckerError> {
    let response = parse_runtime_response(output)?;
    split_runtime_output_by_lines(&response)
        .into_iter()
        .map(|line| {
            let errors = line.errors.iter().map(convert_runtime_error).collect();
            Ok(CheckedParagraph {
                text: line.text,
                errors: fix_runtime_errors(errors)?,
            })
        })
        .collect()
}

/// Runs `divvun-runtime` on a `.drb` bundle
#[derive(Debug, Clone)]
pub struct DivvunRuntime {
    command: EngineCommand,
}

impl DivvunRuntime {
    /// Runtime for the bundle at `bundle`
    #[must_use]
    pub fn new(bundle: &Path) -> Self {
        Self {
            command: EngineCommand {
                program: DIVVUN_RUNTIME.to_string(),
                args: vec!["run".into(), "--path".into(), bundle.into()],
            },
        }
    }

    /// The command line this checker runs
    #[must_use]
    pub const fn command(&self) -> &EngineCommand {
        &self.command
    }

    fn check_chunk(&self, chunk: &[String]) -> Result<Vec<CheckedParagraph>, CheckerError> {
        let output = self.command.run(&chunk.join("\n"))?;
        let checked = runtime_output_to_paragraphs(&output)?;
        if checked.len() == chunk.len() {
            Ok(checked)
        } else {
            Err(CheckerError::ResultCount {
                expected: chunk.len(),
                actual: checked.len(),
            })
        }
    }
}

impl GrammarChecker for DivvunRuntime {
    fn name(&self) -> &str {
        DIVVUN_RUNTIME
    }

    fn check(&self, paragraphs: &[String]) -> Result<Vec<CheckedParagraph>, CheckerError> {
        check_in_chunks(paragraphs, |chunk| self.check_chunk(chunk))
    }
}
