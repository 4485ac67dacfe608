//! Tests for the test runner
//!
//! The checker is replaced with [`MockChecker`], so these run without
//! `divvun-checker` installed.

use gtgramtools::Error;
use gtgramtools::adapters::markup;
use gtgramtools::core::models::ErrorData;
use gtgramtools::core::ports::{CheckedParagraph, CheckerError, GrammarChecker};
use gtgramtools::core::services::{MarkedSentence, make_test_results, run_tests};
use gtgramtools::output::{OutputStyle, TextReporter};

use crate::common::{MockChecker, typo};

fn marked(tests: &[&str]) -> Vec<MarkedSentence> {
    tests.iter().map(|t| markup::marked_sentence(t).unwrap()).collect()
}

#[test]
fn found_errors_are_paired_with_the_markup() {
    let checker = MockChecker::new().with("Mun leam boahtán.", vec![typo("leam", 4, 8, &["lean"])]);

    let results = make_test_results(
        marked(&["Mun {leam}${lean} boahtán.", "Dát lea buorre."]),
        &checker,
        "grammar.yaml",
        false,
    )
    .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].uncorrected, "Mun leam boahtán.");
    assert_eq!(results[0].filename, "grammar.yaml");
    assert_eq!(results[0].expected_errors.len(), 1);
    assert_eq!(results[0].gramcheck_errors, vec![typo("leam", 4, 8, &["lean"])]);
    assert!(results[1].expected_errors.is_empty());
    assert!(results[1].gramcheck_errors.is_empty());
}

#[test]
fn foreign_text_is_left_out() {
    let checker = MockChecker::new().with(
        "Son logai molekylærbiologimi.",
        vec![typo("molekylærbiologimi", 10, 28, &[])],
    );

    let results = make_test_results(
        marked(&["Son logai {molekylærbiologimi}∞{kal,bio|}."]),
        &checker,
        "lang.yaml",
        false,
    )
    .unwrap();

    assert!(results[0].expected_errors.is_empty());
    assert!(results[0].gramcheck_errors.is_empty());
}

#[test]
fn typos_are_left_out_on_request() {
    let checker = MockChecker::new().with("Mun leam boahtán.", vec![typo("leam", 4, 8, &["lean"])]);

    let results = make_test_results(marked(&["Mun {leam}${lean} boahtán."]), &checker, "corpus.xml", true).unwrap();

    assert!(results[0].expected_errors.is_empty());
    assert!(results[0].gramcheck_errors.is_empty());
}

#[test]
fn summary_records_each_outcome() {
    let checker = MockChecker::new()
        .with("Mun leam boahtán.", vec![typo("leam", 4, 8, &["lean"])])
        .with("Don leat boahtán.", vec![typo("leat", 4, 8, &["lea"])]);

    let results = make_test_results(
        marked(&[
            "Mun {leam}${lean} boahtán.",
            "Don {leat}${leat} boahtán.",
            "Dát lea buorre.",
        ]),
        &checker,
        "grammar.yaml",
        false,
    )
    .unwrap();

    let mut reporter = TextReporter::new(OutputStyle::Final);
    let summary = run_tests(&results, &mut reporter, false);

    assert_eq!(summary.outcomes, vec![true, false, true]);
    assert!(!summary.all_passed());
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(summary.counts.tp, 1);
    assert_eq!(summary.counts.tn, 1);
    assert_eq!(summary.counts.fp1, 1);
    assert_eq!(reporter.output(), "2/1/3");
}

#[test]
fn all_passing_run_exits_zero() {
    let results = make_test_results(marked(&["Dát lea buorre."]), &MockChecker::new(), "ok.yaml", false).unwrap();

    let mut reporter = TextReporter::new(OutputStyle::Silent);
    let summary = run_tests(&results, &mut reporter, false);

    assert!(summary.all_passed());
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(reporter.output(), "");
}

#[test]
fn quote_errors_are_reshaped_before_comparison() {
    let sentence = "Son lea \"buorre\".";
    let found = ErrorData::new(
        "\"buorre\"",
        8,
        16,
        "punct-aistton-both",
        "Leat boasttuaisttonmearkkat.",
        vec!["”buorre”".to_string()],
    );
    let checker = MockChecker::new().with(sentence, vec![found]);

    let results = make_test_results(
        marked(&["Son lea {\"}‰{”}buorre{\"}‰{”}."]),
        &checker,
        "aistton.yaml",
        false,
    )
    .unwrap();

    let spans: Vec<_> = results[0].gramcheck_errors.iter().map(|e| (e.start, e.end)).collect();
    assert_eq!(spans, vec![(8, 9), (15, 16)]);

    let mut reporter = TextReporter::new(OutputStyle::Silent);
    assert!(run_tests(&results, &mut reporter, false).all_passed());
}

/// A checker that always gives back one paragraph too few
struct ShortChecker;

impl GrammarChecker for ShortChecker {
    fn name(&self) -> &str {
        "short"
    }

    fn check(&self, paragraphs: &[String]) -> Result<Vec<CheckedParagraph>, CheckerError> {
        Err(CheckerError::ResultCount {
            expected: paragraphs.len(),
            actual: paragraphs.len() - 1,
        })
    }
}

#[test]
fn checker_failure_stops_the_run() {
    let err = make_test_results(marked(&["Dát lea buorre."]), &ShortChecker, "grammar.yaml", false).unwrap_err();
    assert!(matches!(err, CheckerError::ResultCount { expected: 1, actual: 0 }));
    assert_eq!(Error::from(err).exit_code(), 1);
}
