//! Compare `divvun-checker` and `divvun-runtime`
//!
//! Prints one JSON object per unexpected difference.

use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use serde::Serialize;

use gtgramtools::Error;
use gtgramtools::adapters::checker::runtime::DRB_EXTENSION;
use gtgramtools::adapters::checker::{DivvunChecker, DivvunRuntime};
use gtgramtools::adapters::pipespec::{ZCHECK_EXTENSION, resolve_variant};
use gtgramtools::adapters::{markup, yaml};
use gtgramtools::core::ports::GrammarChecker;
use gtgramtools::core::services::checker_fixes::fix_all_errors;
use gtgramtools::core::services::{EngineDifference, engine_differences};
use gtgramtools::paths::{YAML_EXTENSIONS, files_in_directory, first_with_extension};

#[derive(Debug, Serialize)]
struct Mismatch<'a> {
    file: String,
    sentence: &'a str,
    #[serde(flatten)]
    difference: &'a EngineDifference,
}

#[derive(Debug, Default)]
struct Tally {
    unexpected: usize,
    known: usize,
}

/// Run the YAML tests directly in `directory` through both engines
///
/// Exits with 1 when there are unexpected differences.
pub fn compare_engines(directory: &Path) -> anyhow::Result<u8> {
    let engines = directory
        .parent()
        .context("The test directory has no parent directory")?;
    let archive = first_with_extension(engines, ZCHECK_EXTENSION)
        .with_context(|| format!("No .{ZCHECK_EXTENSION} file in {}", engines.display()))?;
    let bundle = first_with_extension(engines, DRB_EXTENSION)
        .with_context(|| format!("No .{DRB_EXTENSION} file in {}", engines.display()))?;
    info!("Comparing {} with {}", archive.display(), bundle.display());

    let runtime = DivvunRuntime::new(&bundle);
    let mut tally = Tally::default();

    for file in files_in_directory(directory, YAML_EXTENSIONS) {
        let test_file = yaml::load(&file).map_err(Error::from)?;
        let variant = resolve_variant(&archive, Some(&test_file.variant)).map_err(Error::from)?;
        let checker = DivvunChecker::new(&archive, &variant);
        compare_file(&file, &test_file.tests, &checker, &runtime, &mut tally)?;
    }

    info!("{} unexpected and {} known difference(s)", tally.unexpected, tally.known);
    Ok(u8::from(tally.unexpected > 0))
}

fn compare_file(
    file: &Path,
    tests: &[String],
    checker: &dyn GrammarChecker,
    runtime: &dyn GrammarChecker,
    tally: &mut Tally,
) -> anyhow::Result<()> {
    let mut sentences = Vec::with_capacity(tests.len());
    for test in tests.iter().filter(|t| !t.trim().is_empty()) {
        sentences.push(markup::marked_sentence(test).map_err(Error::from)?.sentence);
    }
    if sentences.is_empty() {
        warn!("no tests in {}", file.display());
        return Ok(());
    }

    let from_checker = checker.check(&sentences).map_err(Error::from)?;
    let from_runtime = runtime.check(&sentences).map_err(Error::from)?;
    if from_checker.len() != from_runtime.len() {
        anyhow::bail!(
            "{}: divvun-checker returned {} paragraph(s), divvun-runtime {}",
            file.display(),
            from_checker.len(),
            from_runtime.len()
        );
    }

    for ((sentence, checked), run) in sentences.iter().zip(from_checker).zip(from_runtime) {
        let checker_errors = fix_all_errors(checked.errors, checker).map_err(Error::from)?;
        let runtime_errors = fix_all_errors(run.errors, runtime).map_err(Error::from)?;

        for difference in engine_differences(&checker_errors, &runtime_errors) {
            if !difference.is_unexpected() {
                tally.known += 1;
                continue;
            }
            tally.unexpected += 1;
            let mismatch = Mismatch {
                file: file.display().to_string(),
                sentence,
                difference: &difference,
            };
            println!("{}", serde_json::to_string(&mismatch)?);
        }
    }

    Ok(())
}
