//! Test YAML files

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::report;
use gtgramtools::Error;
use gtgramtools::adapters::{markup, yaml};
use gtgramtools::config::{TestConfig, TestOptions};
use gtgramtools::core::services::make_test_results;
use gtgramtools::paths::{YAML_EXTENSIONS, find_files};

/// Run every YAML test file found among `targets`
///
/// Files are tested one at a time; the worst exit code wins.
pub fn test_yaml(options: &TestOptions, targets: &[PathBuf]) -> anyhow::Result<u8> {
    let files = find_files(targets, YAML_EXTENSIONS);
    if files.is_empty() {
        anyhow::bail!("No YAML test files found");
    }

    let mut exit_code = 0;
    for file in &files {
        exit_code = exit_code.max(test_file(options, file)?);
    }
    Ok(exit_code)
}

fn test_file(options: &TestOptions, path: &Path) -> gtgramtools::Result<u8> {
    info!("Testing {}", path.display());
    let yaml = yaml::load(path)?;

    if options.remove_dupes {
        let duplicates = yaml::remove_duplicates(path, &yaml.tests)?;
        if !duplicates.is_empty() {
            return Err(Error::DuplicatesRemoved {
                path: path.to_path_buf(),
                duplicates,
            });
        }
    }

    let config = TestConfig::from_yaml(options, path, yaml);
    let checker = config.engine.checker()?;

    // Blank entries are left out, both of the run and of moving tests
    let mut tests = Vec::with_capacity(config.tests.len());
    let mut sentences = Vec::with_capacity(config.tests.len());
    for test in &config.tests {
        if test.trim().is_empty() {
            warn!("skipping empty test in {}", path.display());
            continue;
        }
        sentences.push(markup::marked_sentence(test)?);
        tests.push(test.clone());
    }

    let filename = path.display().to_string();
    let results = make_test_results(sentences, checker.as_ref(), &filename, false)?;
    let summary = report(&results, config.style, config.hide_passes);

    if config.move_tests {
        for target in yaml::move_tests(path, &tests, &summary.outcomes)? {
            info!("Moved tests to {}", target.display());
        }
    }

    Ok(summary.exit_code())
}
