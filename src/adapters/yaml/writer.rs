//! Rewrite YAML test files
//!
//! Line based so that comments and layout survive.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use regex::Regex;

use super::parser::{YamlTestFileError, duplicate_tests};

/// A list item holding a test sentence
const TEST_LINE: &str =
    r#"^\s*-\s+(?:"(?P<double>[^"]+)"|'(?P<single>[^']+)'|(?P<plain>[^"'\s#].*?))\s*(?:#.*)?$"#;

const FAIL: &str = "FAIL";
const PASS: &str = "PASS";

/// The unquoted test sentence on `line`, if the line is a list item
fn test_on_line<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    let captures = pattern.captures(line.trim_end())?;
    ["double", "single", "plain"]
        .iter()
        .find_map(|name| captures.name(name))
        .map(|m| m.as_str())
}

/// Remove duplicated tests from the file, keeping the last occurrence
///
/// Returns the tests that were duplicated; the file is left untouched when
/// there are none.
pub fn remove_duplicates(path: &Path, tests: &[String]) -> Result<Vec<String>, YamlTestFileError> {
    let duplicates = duplicate_tests(tests);
    if duplicates.is_empty() {
        return Ok(Vec::new());
    }

    // Occurrences still to be skipped before the one that is kept
    let mut to_skip: HashMap<String, usize> = duplicates
        .iter()
        .map(|(test, count)| (test.clone(), count - 1))
        .collect();

    let pattern = Regex::new(TEST_LINE)?;
    let content = fs::read_to_string(path).map_err(|e| YamlTestFileError::io(path, e))?;
    let mut output = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        let skip = test_on_line(&pattern, line)
            .and_then(|test| to_skip.get_mut(test))
            .is_some_and(|remaining| {
                if *remaining > 0 {
                    *remaining -= 1;
                    true
                } else {
                    false
                }
            });
        if !skip {
            output.push_str(line);
        }
    }

    fs::write(path, output).map_err(|e| YamlTestFileError::io(path, e))?;
    info!("Removed {} duplicated test(s) from {}", duplicates.len(), path.display());

    Ok(duplicates.into_iter().map(|(test, _)| test).collect())
}

/// Move tests to the file matching their outcome
///
/// Passing tests leave a file whose name contains `FAIL` for its `PASS`
/// sibling, failing tests leave a `PASS` file for its `FAIL` sibling.
/// `outcomes[i]` tells whether `tests[i]` passed. Returns the files that
/// received tests.
pub fn move_tests(path: &Path, tests: &[String], outcomes: &[bool]) -> Result<Vec<PathBuf>, YamlTestFileError> {
    let mut written = Vec::new();
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

    if name.contains(FAIL) {
        let passing = select(tests, outcomes, true);
        if let Some(target) = move_to_sibling(path, &passing, FAIL, PASS)? {
            written.push(target);
        }
    }
    if name.contains(PASS) {
        let failing = select(tests, outcomes, false);
        if let Some(target) = move_to_sibling(path, &failing, PASS, FAIL)? {
            written.push(target);
        }
    }

    Ok(written)
}

fn select<'a>(tests: &'a [String], outcomes: &[bool], passed: bool) -> Vec<&'a str> {
    tests
        .iter()
        .zip(outcomes)
        .filter(|(_, outcome)| **outcome == passed)
        .map(|(test, _)| test.as_str())
        .collect()
}

fn sibling(path: &Path, from: &str, to: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().replace(from, to))
        .unwrap_or_default();
    path.with_file_name(name)
}

fn move_to_sibling(
    path: &Path,
    tests: &[&str],
    from: &str,
    to: &str,
) -> Result<Option<PathBuf>, YamlTestFileError> {
    if tests.is_empty() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| YamlTestFileError::io(path, e))?;
    let target = sibling(path, from, to);

    let mut target_content = if target.exists() {
        fs::read_to_string(&target).map_err(|e| YamlTestFileError::io(&target, e))?
    } else {
        header_without_tests(path, &content)?
    };
    if !target_content.is_empty() && !target_content.ends_with('\n') {
        target_content.push('\n');
    }
    for test in tests {
        target_content.push_str(&test_entry(test));
    }
    fs::write(&target, target_content).map_err(|e| YamlTestFileError::io(&target, e))?;

    let pattern = Regex::new(TEST_LINE)?;
    let moved: HashSet<&str> = tests.iter().copied().collect();
    let remaining: String = content
        .split_inclusive('\n')
        .filter(|line| !test_on_line(&pattern, line).is_some_and(|test| moved.contains(test)))
        .collect();
    fs::write(path, remaining).map_err(|e| YamlTestFileError::io(path, e))?;

    info!("Moved {} test(s) from {} to {}", tests.len(), path.display(), target.display());
    Ok(Some(target))
}

/// The document at `path` without its `Tests`, followed by an empty `Tests:`
fn header_without_tests(path: &Path, content: &str) -> Result<String, YamlTestFileError> {
    let syntax = |source: serde_yaml::Error| YamlTestFileError::Syntax {
        path: path.to_path_buf(),
        source,
    };

    let mut document: serde_yaml::Mapping = serde_yaml::from_str(content).map_err(syntax)?;
    document.remove("Tests");
    let header = serde_yaml::to_string(&document).map_err(syntax)?;

    Ok(format!("{header}\nTests:\n"))
}

/// A `Tests` list item, quoted with whichever quote the test does not use
fn test_entry(test: &str) -> String {
    let quote = if test.contains('"') { '\'' } else { '"' };
    format!("  - {quote}{test}{quote}\n")
}
