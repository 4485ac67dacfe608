//! YAML parser for grammar test files
//!
//! Reads the `Config` block and the `Tests` list.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors in a YAML test file
#[derive(Debug, Error)]
pub enum YamlTestFileError {
    /// The file is not valid YAML, or not shaped like a test file
    #[error("ERROR: yaml syntax error in {}:\n{source}", .path.display())]
    Syntax {
        /// The test file
        path: PathBuf,
        /// What the YAML parser said
        source: serde_yaml::Error,
    },

    /// `Config.Spec` is missing
    #[error("ERROR: No spec in {}", .0.display())]
    NoSpec(PathBuf),

    /// `Config.Variants` is missing or empty
    #[error("ERROR: No variants in {}", .0.display())]
    NoVariants(PathBuf),

    /// `Tests` is missing or empty
    #[error("ERROR: No tests in {}", .0.display())]
    NoTests(PathBuf),

    /// The test line pattern did not compile
    #[error("invalid test line pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The file could not be read or written
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The file
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },
}

impl YamlTestFileError {
    pub(super) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A loaded YAML test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlTestFile {
    /// The pipespec or `.zcheck` archive, resolved against the file's directory
    pub spec: PathBuf,
    /// First entry of `Config.Variants`
    pub variant: String,
    /// The marked up test sentences
    pub tests: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTestFile {
    #[serde(default, rename = "Config")]
    config: RawConfig,

    #[serde(default, rename = "Tests")]
    tests: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "Spec")]
    spec: Option<PathBuf>,

    #[serde(rename = "Variants")]
    variants: Option<Vec<String>>,
}

/// Load a YAML test file
pub fn load(path: &Path) -> Result<YamlTestFile, YamlTestFileError> {
    let content = fs::read_to_string(path).map_err(|e| YamlTestFileError::io(path, e))?;
    parse(path, &content)
}

/// Parse the content of the YAML test file at `path`
pub fn parse(path: &Path, content: &str) -> Result<YamlTestFile, YamlTestFileError> {
    let raw: RawTestFile = serde_yaml::from_str(content).map_err(|source| YamlTestFileError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;

    let spec = raw
        .config
        .spec
        .ok_or_else(|| YamlTestFileError::NoSpec(path.to_path_buf()))?;
    let variant = raw
        .config
        .variants
        .and_then(|variants| variants.into_iter().next())
        .ok_or_else(|| YamlTestFileError::NoVariants(path.to_path_buf()))?;
    let tests = raw
        .tests
        .filter(|tests| !tests.is_empty())
        .ok_or_else(|| YamlTestFileError::NoTests(path.to_path_buf()))?;

    let directory = path.parent().unwrap_or_else(|| Path::new(""));

    Ok(YamlTestFile {
        spec: directory.join(spec),
        variant,
        tests,
    })
}

/// Tests occurring more than once, with their number of occurrences
///
/// Sorted by first occurrence.
#[must_use]
pub fn duplicate_tests(tests: &[String]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for test in tests {
        *counts.entry(test).or_default() += 1;
    }

    let mut duplicates = Vec::new();
    for test in tests {
        if let Some(count) = counts.remove(test.as_str()) {
            if count > 1 {
                duplicates.push((test.clone(), count));
            }
        }
    }
    duplicates
}
