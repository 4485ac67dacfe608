//! Tests for loading and rewriting YAML test files

use std::fs;

use gtgramtools::adapters::yaml::{self, YamlTestFileError};
use gtgramtools::config::{Engine, TestConfig, TestOptions};
use gtgramtools::output::OutputStyle;

use crate::common::TestLanguage;

#[test]
fn spec_is_resolved_against_the_test_directory() {
    let language = TestLanguage::new();
    let path = language.yaml_test("grammar.yaml", "smegram-dev", &["Mun {leam}${lean} boahtán."]);

    let file = yaml::load(&path).unwrap();
    assert_eq!(file.spec, language.path().join("tests").join("../pipespec.xml"));
    assert_eq!(file.variant, "smegram-dev");
    assert_eq!(file.tests, vec!["Mun {leam}${lean} boahtán."]);
}

#[test]
fn missing_tests_are_an_error() {
    let language = TestLanguage::new();
    let path = language.path().join("tests/empty.yaml");
    fs::write(&path, "Config:\n  Spec: ../pipespec.xml\n  Variants: [smegram]\n").unwrap();

    let err = yaml::load(&path).unwrap_err();
    assert!(matches!(err, YamlTestFileError::NoTests(_)));
}

#[test]
fn command_line_overrides_the_file() {
    let language = TestLanguage::new();
    let path = language.yaml_test("grammar.yaml", "smegram-dev", &["Dát lea buorre."]);
    let file = yaml::load(&path).unwrap();

    let options = TestOptions {
        spec: Some(language.path().join("se.zcheck")),
        variant: Some("smegram".to_string()),
        silent: true,
        output: OutputStyle::Compact,
        ..TestOptions::default()
    };
    let config = TestConfig::from_yaml(&options, &path, file);

    assert_eq!(config.style, OutputStyle::Silent);
    assert_eq!(
        config.engine,
        Engine::DivvunChecker {
            spec: language.path().join("se.zcheck"),
            variant: Some("smegram".to_string()),
        }
    );
}

#[test]
fn duplicates_are_reported_and_removed() {
    let language = TestLanguage::new();
    let path = language.yaml_test(
        "grammar.yaml",
        "smegram",
        &["Dát lea buorre.", "Mun {leam}${lean} boahtán.", "Dát lea buorre."],
    );
    let file = yaml::load(&path).unwrap();

    let removed = yaml::remove_duplicates(&path, &file.tests).unwrap();
    assert_eq!(removed, vec!["Dát lea buorre."]);

    let file = yaml::load(&path).unwrap();
    assert_eq!(file.tests, vec!["Mun {leam}${lean} boahtán.", "Dát lea buorre."]);
}

#[test]
fn file_without_duplicates_is_untouched() {
    let language = TestLanguage::new();
    let path = language.yaml_test("grammar.yaml", "smegram", &["Dát lea buorre."]);
    let before = language.read("tests/grammar.yaml");

    let removed = yaml::remove_duplicates(&path, &["Dát lea buorre.".to_string()]).unwrap();
    assert!(removed.is_empty());
    assert_eq!(language.read("tests/grammar.yaml"), before);
}

#[test]
fn passing_tests_move_from_fail_to_pass() {
    let language = TestLanguage::new();
    let tests = ["Mun {leam}${lean} boahtán.", "Don {leat}${lea} boahtán."];
    let path = language.yaml_test("grammar-FAIL.yaml", "smegram", &tests);
    let tests: Vec<String> = tests.iter().map(ToString::to_string).collect();

    let written = yaml::move_tests(&path, &tests, &[true, false]).unwrap();
    assert_eq!(written, vec![language.path().join("tests/grammar-PASS.yaml")]);

    let pass = yaml::load(&written[0]).unwrap();
    assert_eq!(pass.variant, "smegram");
    assert_eq!(pass.tests, vec!["Mun {leam}${lean} boahtán."]);

    let fail = yaml::load(&path).unwrap();
    assert_eq!(fail.tests, vec!["Don {leat}${lea} boahtán."]);
}

#[test]
fn nothing_moves_when_everything_stays() {
    let language = TestLanguage::new();
    let path = language.yaml_test("grammar-PASS.yaml", "smegram", &["Dát lea buorre."]);

    let written = yaml::move_tests(&path, &["Dát lea buorre.".to_string()], &[true]).unwrap();
    assert!(written.is_empty());
    assert!(!language.path().join("tests/grammar-FAIL.yaml").exists());
}
