//! Tests for the report styles
//!
//! Colours are switched off so the text can be compared verbatim.

use gtgramtools::core::models::{Counts, TestData};
use gtgramtools::core::ports::Reporter;
use gtgramtools::core::services::run_tests;
use gtgramtools::output::{OutputStyle, TextReporter};

use crate::common::{expected, typo};

fn tests() -> Vec<TestData> {
    vec![
        TestData {
            uncorrected: "Mun leam boahtán.".to_string(),
            filename: "grammar.yaml".to_string(),
            expected_errors: vec![expected("leam", 4, 8, "errorort", &["lean"])],
            gramcheck_errors: vec![typo("leam", 4, 8, &["lean"])],
        },
        TestData {
            uncorrected: "Don leat boahtán.".to_string(),
            filename: "grammar.yaml".to_string(),
            expected_errors: vec![expected("leat", 4, 8, "errorort", &["leat"])],
            gramcheck_errors: vec![],
        },
    ]
}

fn report(style: OutputStyle, hide_passes: bool) -> String {
    colored::control::set_override(false);
    let mut reporter = TextReporter::new(style);
    run_tests(&tests(), &mut reporter, hide_passes);
    reporter.into_output()
}

// =============================================================================
// Style Tests
// =============================================================================

#[test]
fn output_style_default() {
    assert_eq!(OutputStyle::default(), OutputStyle::Normal);
}

#[test]
fn normal_report_lists_every_result() {
    let output = report(OutputStyle::Normal, false);

    assert!(output.contains("Test 1/2: Mun leam boahtán."));
    assert!(output.contains("grammar.yaml\n[1/2][PASS tp] leam:lean (errorort, ()) => leam:[lean] (typo)\n"));
    assert!(output.contains("[2/2][FAIL fn2] leat:leat (errorort, ()) => :[] ()\n"));
    assert!(output.contains("Test 2 - Passes: 0, Fails: 1, Total: 1\n"));
    assert!(output.contains("Total passes: 1, Total fails: 1, Total: 2\n"));
    assert!(output.contains("Precision: 100.0%\n"));
    assert!(output.contains("Recall: 50.0%\n"));
    assert!(output.contains("F₁ score: 66.7%\n"));
}

#[test]
fn hidden_passes_leave_only_failures() {
    let output = report(OutputStyle::Normal, true);

    assert!(!output.contains("Test 1/2"));
    assert!(!output.contains("PASS tp"));
    assert!(output.contains("Test 2/2: Don leat boahtán."));
    assert!(output.contains("FAIL fn2"));
}

#[test]
fn compact_report_has_one_line_per_sentence() {
    let output = report(OutputStyle::Compact, false);
    assert_eq!(
        output,
        "[PASS] Mun leam boahtán. 1/0/1\n\
         [FAIL] Don leat boahtán. 0/1/1\n\
         Total passes: 1, Total fails: 1, Total: 2\n"
    );
}

#[test]
fn terse_report_has_one_mark_per_result() {
    assert_eq!(report(OutputStyle::Terse, false), ".\n!\nFAIL\n");
}

#[test]
fn final_report_is_the_totals() {
    assert_eq!(report(OutputStyle::Final, false), "1/1/2");
}

#[test]
fn silent_report_is_empty() {
    assert_eq!(report(OutputStyle::Silent, false), "");
}

#[test]
fn scores_are_omitted_without_true_positives() {
    colored::control::set_override(false);
    let mut reporter = TextReporter::new(OutputStyle::Normal);
    reporter.final_result(&Counts {
        fn2: 1,
        ..Counts::default()
    });
    assert_eq!(reporter.output(), "Total passes: 0, Total fails: 1, Total: 1\n");
}
