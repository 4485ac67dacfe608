//! Test runner
//!
//! Sends test sentences through the checker, compares the results with the
//! markup and streams the outcome to a [`Reporter`].

use log::debug;

use super::checker_fixes::fix_all_errors;
use super::cleaner::clean_data;
use super::comparator::{Comparison, compare};
use crate::core::models::{Category, Counts, ErrorData, TestData};
use crate::core::ports::{CheckerError, GrammarChecker, Reporter, ResultLine};

/// A sentence with its marked up errors, before checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedSentence {
    /// The uncorrected sentence
    pub sentence: String,
    /// Top-level marked up errors
    pub errors: Vec<ErrorData>,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Whether each test sentence passed, in order
    pub outcomes: Vec<bool>,
    /// Tallies over all sentences
    pub counts: Counts,
}

impl RunSummary {
    /// Whether every sentence passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|passed| *passed)
    }

    /// Process exit code for the run: 0 when everything passed
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.all_passed())
    }
}

/// Check every sentence and pair the results with the markup
pub fn make_test_results(
    sentences: Vec<MarkedSentence>,
    checker: &dyn GrammarChecker,
    filename: &str,
    ignore_typos: bool,
) -> Result<Vec<TestData>, CheckerError> {
    let paragraphs: Vec<String> = sentences.iter().map(|s| s.sentence.clone()).collect();
    debug!("checking {} paragraph(s) from {filename} with {}", paragraphs.len(), checker.name());

    let checked = checker.check(&paragraphs)?;
    if checked.len() != sentences.len() {
        return Err(CheckerError::ResultCount {
            expected: sentences.len(),
            actual: checked.len(),
        });
    }

    sentences
        .into_iter()
        .zip(checked)
        .map(|(marked, paragraph)| {
            let found = fix_all_errors(paragraph.errors, checker)?;
            Ok(clean_data(marked.sentence, marked.errors, found, filename, ignore_typos))
        })
        .collect()
}

/// Compare every test and report the results
pub fn run_tests(tests: &[TestData], reporter: &mut dyn Reporter, hide_passes: bool) -> RunSummary {
    let total = tests.len();
    let mut summary = RunSummary::default();

    for (number, test) in tests.iter().enumerate() {
        let index = number + 1;
        let comparison = compare(&test.expected_errors, &test.gramcheck_errors);
        let passed = comparison.passed();
        let counts = comparison.counts();

        if !(hide_passes && passed) {
            reporter.title(index, total, &test.uncorrected);
        }
        report_lines(&comparison, index, total, &test.filename, reporter, hide_passes);
        if !(hide_passes && passed) {
            reporter.result(index, &counts, &test.uncorrected);
        }

        summary.counts += counts;
        summary.outcomes.push(passed);
    }

    reporter.final_result(&summary.counts);
    summary
}

fn report_lines(
    comparison: &Comparison<'_>,
    index: usize,
    total: usize,
    filename: &str,
    reporter: &mut dyn Reporter,
    hide_passes: bool,
) {
    let base = ResultLine {
        index,
        total,
        category: Category::Tn,
        expected: None,
        found: None,
        filename,
    };

    if !hide_passes {
        for &(c, d) in &comparison.true_positives {
            reporter.success(&ResultLine { category: Category::Tp, expected: Some(c), found: Some(d), ..base });
        }
        if comparison.true_negative {
            reporter.success(&base);
        }
    }

    for &(c, d) in &comparison.false_positives_1 {
        reporter.failure(&ResultLine { category: Category::Fp1, expected: Some(c), found: Some(d), ..base });
    }
    for &d in &comparison.false_positives_2 {
        reporter.failure(&ResultLine { category: Category::Fp2, found: Some(d), ..base });
    }
    for &(c, d) in &comparison.false_negatives_1 {
        reporter.failure(&ResultLine { category: Category::Fn1, expected: Some(c), found: Some(d), ..base });
    }
    for &c in &comparison.false_negatives_2 {
        reporter.failure(&ResultLine { category: Category::Fn2, expected: Some(c), ..base });
    }
}
