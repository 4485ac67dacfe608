//! Integration tests for the gtgramtool CLI
//!
//! These tests run the binary against a temporary grammar checker
//! directory. Where an engine is needed, stub `divvun-checker` and
//! `divvun-runtime` scripts are put first on `PATH`.

#[cfg(unix)]
mod stubs;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a gtgramtool command
fn gtgramtool() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("gtgramtool"))
}

const PIPESPEC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE pipespec PUBLIC "-//DIVVUN//DTD Pipespec V1//EN" "http://divvun.no/dtds/pipespec.dtd">
<pipespec language="se" developer="Divvun" default-pipe="smegram">
  <pipeline name="smegram" language="se">
    <tokenize><tokenizer n="tokeniser-gramcheck-gt-desc.pmhfst"/></tokenize>
    <cg><grammar n="grammarchecker.bin"/></cg>
  </pipeline>
  <pipeline name="smegram-dev" language="se">
    <tokenize><tokenizer n="./tokeniser-gramcheck-gt-desc.pmhfst"/></tokenize>
    <cg><grammar n="./grammarchecker.bin"/></cg>
  </pipeline>
</pipespec>
"#;

/// Helper to create a language directory with a pipespec and a `tests/` dir
fn setup_language() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pipespec.xml"), PIPESPEC).unwrap();
    fs::write(dir.path().join("tokeniser-gramcheck-gt-desc.pmhfst"), b"tokeniser").unwrap();
    fs::write(dir.path().join("grammarchecker.bin"), b"grammar").unwrap();
    fs::create_dir(dir.path().join("tests")).unwrap();
    dir
}

/// Helper to write a YAML test file into `tests/`
fn write_yaml(language: &Path, name: &str, variant: &str, tests: &[&str]) -> PathBuf {
    let mut content = format!("Config:\n  Spec: ../pipespec.xml\n  Variants: [{variant}]\n\nTests:\n");
    for test in tests {
        content.push_str(&format!("  - \"{test}\"\n"));
    }
    let path = language.join("tests").join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn test_help() {
    gtgramtool()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("build-archive"))
        .stdout(predicate::str::contains("compare-engines"));
}

#[test]
fn test_version() {
    gtgramtool()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gtgramtool"));
}

#[test]
fn test_unknown_output_style_is_rejected() {
    let language = setup_language();
    let yaml = write_yaml(language.path(), "grammar.yaml", "smegram", &["Dát lea buorre."]);

    gtgramtool()
        .args(["test", "--output", "verbose", "yaml"])
        .arg(&yaml)
        .assert()
        .failure()
        .stderr(predicate::str::contains("verbose"));
}

// =============================================================================
// Build Archive
// =============================================================================

#[test]
fn test_build_archive() {
    let language = setup_language();
    let archive = language.path().join("se.zcheck");

    gtgramtool()
        .arg("build-archive")
        .arg(language.path().join("pipespec.xml"))
        .arg(&archive)
        .assert()
        .success();

    assert!(archive.exists());
}

#[test]
fn test_build_archive_missing_file() {
    let language = setup_language();
    fs::remove_file(language.path().join("grammarchecker.bin")).unwrap();

    gtgramtool()
        .arg("build-archive")
        .arg(language.path().join("pipespec.xml"))
        .arg(language.path().join("se.zcheck"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("grammarchecker.bin"));
}

// =============================================================================
// Errors Before Checking
// =============================================================================

#[test]
fn test_unknown_variant_exits_5() {
    let language = setup_language();
    let yaml = write_yaml(language.path(), "grammar.yaml", "smegram-x", &["Dát lea buorre."]);

    gtgramtool()
        .args(["test", "yaml"])
        .arg(&yaml)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("There is no pipeline named smegram-x"))
        .stderr(predicate::str::contains("Available pipelines are\nsmegram\nsmegram-dev"));
}

#[test]
fn test_remove_dupes_exits_99() {
    let language = setup_language();
    let yaml = write_yaml(
        language.path(),
        "grammar.yaml",
        "smegram",
        &["Dát lea buorre.", "Dát lea buorre."],
    );

    gtgramtool()
        .args(["test", "--remove-dupes", "yaml"])
        .arg(&yaml)
        .assert()
        .code(99)
        .stderr(predicate::str::contains("ERROR: Removed the following dupes in"))
        .stderr(predicate::str::contains("\tDát lea buorre."));

    let content = fs::read_to_string(&yaml).unwrap();
    assert_eq!(content.matches("Dát lea buorre.").count(), 1);
}

#[test]
fn test_yaml_syntax_error() {
    let language = setup_language();
    let yaml = language.path().join("tests/broken.yaml");
    fs::write(&yaml, "Config: [\n").unwrap();

    gtgramtool()
        .args(["test", "yaml"])
        .arg(&yaml)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: yaml syntax error in"));
}

#[test]
fn test_xml_needs_spec() {
    let language = setup_language();
    let corpus = language.path().join("corpus.xml");
    fs::write(&corpus, "<document><body><p>Dát lea buorre.</p></body></document>").unwrap();

    gtgramtool()
        .args(["test", "xml"])
        .arg(&corpus)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--spec"));
}

#[test]
fn test_no_yaml_files_found() {
    let language = setup_language();

    gtgramtool()
        .args(["test", "yaml"])
        .arg(language.path().join("tests"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No YAML test files found"));
}
