//! Test XML goldstandard corpus files

use std::path::PathBuf;

use anyhow::Context;
use log::info;

use super::report;
use gtgramtools::Error;
use gtgramtools::adapters::corpus;
use gtgramtools::config::{Engine, TestOptions};
use gtgramtools::core::services::make_test_results;
use gtgramtools::paths::{XML_EXTENSIONS, find_files};

/// Run the paragraphs of every corpus file found among `targets` as one test
pub fn test_xml(options: &TestOptions, ignore_typos: bool, targets: &[PathBuf]) -> anyhow::Result<u8> {
    let spec = options
        .spec
        .as_deref()
        .context("Testing XML files needs a grammar checker: use --spec")?;
    let engine = Engine::new(spec, options.variant.clone(), options.use_runtime);
    let checker = engine.checker().map_err(Error::from)?;

    let files = find_files(targets, XML_EXTENSIONS);
    if files.is_empty() {
        anyhow::bail!("No XML files found");
    }

    let mut results = Vec::new();
    for file in &files {
        info!("Checking {}", file.display());
        let sentences = corpus::load(file).map_err(Error::from)?;
        let filename = file.display().to_string();
        results.extend(
            make_test_results(sentences, checker.as_ref(), &filename, ignore_typos).map_err(Error::from)?,
        );
    }

    let summary = report(&results, options.style(), options.hide_passes);
    Ok(summary.exit_code())
}
