//! Tests for the comparator
//!
//! Expected errors come from the markup, found errors from the checker.

use gtgramtools::core::models::{Category, Counts, ErrorData};
use gtgramtools::core::services::comparator::categories;
use gtgramtools::core::services::compare;

use crate::common::{expected, typo};

// =============================================================================
// Single Error Tests
// =============================================================================

#[test]
fn matching_suggestion_is_true_positive() {
    let marked = vec![expected("leam", 4, 8, "errorort", &["lean"])];
    let found = vec![typo("leam", 4, 8, &["lean", "leat"])];

    let comparison = compare(&marked, &found);
    assert!(comparison.passed());
    assert_eq!(comparison.true_positives.len(), 1);
    assert_eq!(categories(&comparison), vec![Category::Tp]);
}

#[test]
fn wrong_suggestion_is_false_positive_1() {
    let marked = vec![expected("leam", 4, 8, "errorort", &["lean"])];
    let found = vec![typo("leam", 4, 8, &["leat"])];

    let comparison = compare(&marked, &found);
    assert!(!comparison.passed());
    assert_eq!(categories(&comparison), vec![Category::Fp1]);
}

#[test]
fn found_without_suggestions_is_false_negative_1() {
    let marked = vec![expected("leam", 4, 8, "errorort", &["lean"])];
    let found = vec![typo("leam", 4, 8, &[])];

    let comparison = compare(&marked, &found);
    assert_eq!(categories(&comparison), vec![Category::Fn1]);
}

#[test]
fn unmarked_error_is_false_positive_2() {
    let found = vec![typo("leam", 4, 8, &["lean"])];

    let comparison = compare(&[], &found);
    assert!(!comparison.true_negative);
    assert_eq!(categories(&comparison), vec![Category::Fp2]);
}

#[test]
fn missed_error_is_false_negative_2() {
    let marked = vec![expected("leam", 4, 8, "errorort", &["lean"])];

    let comparison = compare(&marked, &[]);
    assert_eq!(categories(&comparison), vec![Category::Fn2]);
}

#[test]
fn nothing_marked_nothing_found_is_true_negative() {
    let comparison = compare(&[], &[]);
    assert!(comparison.passed());
    assert_eq!(categories(&comparison), vec![Category::Tn]);
}

// =============================================================================
// Span Tests
// =============================================================================

#[test]
fn shifted_span_counts_as_both_miss_and_extra() {
    let marked = vec![expected("leam", 4, 8, "errorort", &["lean"])];
    let found = vec![typo("eam", 5, 8, &["ean"])];

    let comparison = compare(&marked, &found);
    assert_eq!(categories(&comparison), vec![Category::Fp2, Category::Fn2]);
}

#[test]
fn double_space_compares_start_only() {
    let marked = vec![expected("  ", 3, 5, "errorformat", &[" "])];
    let found = vec![ErrorData::new(" ", 3, 4, "double-space-before", "", vec![" ".to_string()])];

    let comparison = compare(&marked, &found);
    assert_eq!(categories(&comparison), vec![Category::Tp]);
}

#[test]
fn counts_cover_every_category() {
    let marked = vec![
        expected("leam", 4, 8, "errorort", &["lean"]),
        expected("boahtan", 9, 16, "errorort", &["boahtán"]),
    ];
    let found = vec![typo("leam", 4, 8, &["lean"]), typo("dál", 17, 20, &["dál"])];

    let counts = compare(&marked, &found).counts();
    assert_eq!(
        counts,
        Counts {
            tp: 1,
            fp2: 1,
            fn2: 1,
            ..Counts::default()
        }
    );
    assert_eq!(counts.passes(), 1);
    assert_eq!(counts.fails(), 2);
}

#[test]
fn scores_need_a_true_positive() {
    let counts = Counts {
        fp2: 2,
        ..Counts::default()
    };
    assert_eq!(counts.scores(), None);

    let counts = Counts {
        tp: 3,
        fp1: 1,
        fn2: 1,
        ..Counts::default()
    };
    let (precision, recall, f1) = counts.scores().unwrap();
    assert!((precision - 0.75).abs() < 1e-9);
    assert!((recall - 0.75).abs() < 1e-9);
    assert!((f1 - 0.75).abs() < 1e-9);
}
