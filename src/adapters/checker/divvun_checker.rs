//! `divvun-checker` engine
//!
//! Reads newline separated paragraphs on stdin and prints one JSON object
//! per paragraph:
//!
//! ```text
//! {"errs":[["leam",4,8,"typo","Not in dictionary",["lean"],"Spelling error"]],"text":"Mun leam"}
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{CheckerError, EngineCommand, check_in_chunks};
use crate::adapters::pipespec::is_archive;
use crate::core::models::ErrorData;
use crate::core::ports::{CheckedParagraph, GrammarChecker};

/// Executable name
pub const DIVVUN_CHECKER: &str = "divvun-checker";

/// `[form, start, end, type, message, suggestions, title]`
type RawError = (String, usize, usize, String, String, Vec<String>, String);

#[derive(Debug, Deserialize)]
struct RawParagraph {
    #[serde(default)]
    errs: Vec<RawError>,
    #[serde(default)]
    text: String,
}

/// Runs `divvun-checker` on a pipespec or archive
#[derive(Debug, Clone)]
pub struct DivvunChecker {
    command: EngineCommand,
}

impl DivvunChecker {
    /// Checker for `variant` of the pipespec or `.zcheck` archive `spec`
    #[must_use]
    pub fn new(spec: &Path, variant: &str) -> Self {
        let spec_flag = if is_archive(spec) { "--archive" } else { "--spec" };
        Self {
            command: EngineCommand {
                program: DIVVUN_CHECKER.to_string(),
                args: vec![spec_flag.into(), spec.into(), "--variant".into(), variant.into()],
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
        let checked = parse_output(&output)?;
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

impl GrammarChecker for DivvunChecker {
    fn name(&self) -> &str {
        DIVVUN_CHECKER
    }

    fn check(&self, paragraphs: &[String]) -> Result<Vec<CheckedParagraph>, CheckerError> {
        check_in_chunks(paragraphs, |chunk| self.check_chunk(chunk))
    }
}

/// Parse `divvun-checker` output, one paragraph per non-empty line
pub fn parse_output(output: &str) -> Result<Vec<CheckedParagraph>, CheckerError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Result<CheckedParagraph, CheckerError> {
    let raw: RawParagraph = serde_json::from_str(line).map_err(|source| CheckerError::Json {
        line: line.to_string(),
        source,
    })?;

    Ok(CheckedParagraph {
        text: raw.text,
        errors: raw
            .errs
            .into_iter()
            .map(|(form, start, end, error_type, message, suggestions, title)| {
                ErrorData::new(form, start, end, error_type, message, suggestions).with_native_error_type(title)
            })
            .collect(),
    })
}
