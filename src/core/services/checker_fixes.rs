//! Normalisation of checker output
//!
//! The checker and the manual markup disagree on where some errors start
//! and end. These fixes reshape the checker's errors so the comparator can
//! match them against the markup.

use std::collections::HashSet;

use log::debug;

use crate::core::models::{ErrorData, sort_by_range};
use crate::core::ports::{CheckerError, GrammarChecker};

/// Wrong quote marks, emitted together with the directional variants
pub const AISTTON: &str = "punct-aistton";
/// Wrong quote marks on both sides of a word
pub const AISTTON_BOTH: &str = "punct-aistton-both";
/// Wrong opening quote mark
pub const AISTTON_LEFT: &str = "punct-aistton-left";
/// Wrong closing quote mark
pub const AISTTON_RIGHT: &str = "punct-aistton-right";
/// Missing space before an opening parenthesis
pub const NO_SPACE_BEFORE_PARENT_START: &str = "no-space-before-parent-start";

fn first_char(s: &str) -> String {
    s.chars().next().map(String::from).unwrap_or_default()
}

fn last_char(s: &str) -> String {
    s.chars().next_back().map(String::from).unwrap_or_default()
}

fn without_first(s: &str) -> String {
    s.chars().skip(1).collect()
}

fn without_last(s: &str) -> String {
    let mut chars = s.chars();
    chars.next_back();
    chars.collect()
}

fn is_directional_aistton(error_type: &str) -> bool {
    matches!(error_type, AISTTON_BOTH | AISTTON_LEFT | AISTTON_RIGHT)
}

/// Split a `punct-aistton-both` error into one error per quote mark
///
/// The checker marks the quoted word together with its quotes; the markup
/// only marks the quotes.
#[must_use]
pub fn fix_aistton_both(aistton_both: &ErrorData) -> [ErrorData; 2] {
    let first_suggestion = aistton_both.suggestions.first().map_or("", String::as_str);
    let last_suggestion = aistton_both.suggestions.last().map_or("", String::as_str);

    [
        ErrorData {
            error_string: first_char(&aistton_both.error_string),
            end: aistton_both.start + 1,
            suggestions: vec![first_char(first_suggestion)],
            ..aistton_both.clone()
        },
        ErrorData {
            error_string: last_char(&aistton_both.error_string),
            start: aistton_both.end.saturating_sub(1),
            suggestions: vec![last_char(last_suggestion)],
            ..aistton_both.clone()
        },
    ]
}

/// Reduce a `punct-aistton-left` error to the opening quote mark
#[must_use]
pub fn fix_aistton_left(aistton_left: &ErrorData) -> ErrorData {
    let suggestion = aistton_left.suggestions.first().map_or("", String::as_str);
    ErrorData {
        error_string: first_char(&aistton_left.error_string),
        end: aistton_left.start + 1,
        suggestions: vec![first_char(suggestion)],
        ..aistton_left.clone()
    }
}

/// Reduce a `punct-aistton-right` error to the closing quote mark
#[must_use]
pub fn fix_aistton_right(aistton_right: &ErrorData) -> ErrorData {
    let suggestion = aistton_right.suggestions.first().map_or("", String::as_str);
    ErrorData {
        error_string: last_char(&aistton_right.error_string),
        start: aistton_right.end.saturating_sub(1),
        suggestions: vec![last_char(suggestion)],
        ..aistton_right.clone()
    }
}

/// Reveal errors hidden inside quote mark errors
///
/// An error inside quotes is reported with the range of the enclosing
/// aistton error, quotes included. Narrow it to the text between the quotes.
#[must_use]
pub fn fix_hidden_by_aistton(errors: Vec<ErrorData>) -> Vec<ErrorData> {
    let aistton_ranges: Vec<((usize, usize), String)> = errors
        .iter()
        .filter(|e| is_directional_aistton(&e.error_type))
        .map(|e| (e.range(), e.error_type.clone()))
        .collect();

    errors
        .into_iter()
        .map(|error| {
            if is_directional_aistton(&error.error_type) {
                return error;
            }
            let Some((_, kind)) = aistton_ranges.iter().find(|(range, _)| *range == error.range())
            else {
                return error;
            };

            let trim_left = kind != AISTTON_RIGHT;
            let trim_right = kind != AISTTON_LEFT;
            let trim = |s: &str| {
                let s = if trim_left { without_first(s) } else { s.to_string() };
                if trim_right { without_last(&s) } else { s }
            };

            ErrorData {
                error_string: trim(&error.error_string),
                start: error.start + usize::from(trim_left),
                end: error.end.saturating_sub(usize::from(trim_right)),
                suggestions: error.suggestions.iter().map(|s| trim(s)).collect(),
                ..error
            }
        })
        .collect()
}

/// Rearrange aistton errors to match the Giella markup
#[must_use]
pub fn fix_aistton(errors: Vec<ErrorData>) -> Vec<ErrorData> {
    let mut fixed = Vec::new();
    for error in fix_hidden_by_aistton(errors) {
        match error.error_type.as_str() {
            AISTTON => {},
            AISTTON_BOTH => fixed.extend(fix_aistton_both(&error)),
            AISTTON_LEFT => fixed.push(fix_aistton_left(&error)),
            AISTTON_RIGHT => fixed.push(fix_aistton_right(&error)),
            _ => fixed.push(error),
        }
    }
    fixed
}

/// Check `part` on its own and add its errors, moved to `start`
fn add_part(
    checker: &dyn GrammarChecker,
    part: &str,
    start: usize,
    errors: &mut Vec<ErrorData>,
) -> Result<(), CheckerError> {
    let checked = checker.check(&[part.to_string()])?;
    for paragraph in checked {
        for error in paragraph.errors {
            let candidate = ErrorData {
                start: start + error.start,
                end: start + error.end,
                ..error
            };
            if !errors.contains(&candidate) {
                errors.push(candidate);
            }
        }
    }
    Ok(())
}

/// Split `no-space-before-parent-start` errors at the parenthesis
///
/// The checker reports the whole `word(word` stretch; the markup only marks
/// the parenthesis. The words on either side are checked again on their own
/// so errors inside them are not lost.
pub fn fix_no_space_before_parent_start(
    errors: &mut Vec<ErrorData>,
    checker: &dyn GrammarChecker,
) -> Result<(), CheckerError> {
    let space_errors: Vec<ErrorData> = errors
        .iter()
        .filter(|e| e.is_type(NO_SPACE_BEFORE_PARENT_START))
        .cloned()
        .collect();

    for space_error in space_errors {
        let Some(parenthesis) = space_error.error_string.chars().position(|c| c == '(') else {
            continue;
        };
        debug!("splitting {NO_SPACE_BEFORE_PARENT_START} at {}", space_error.start + parenthesis);

        errors.retain(|e| e.range() != space_error.range());

        let before: String = space_error.error_string.chars().take(parenthesis).collect();
        let after: String = space_error.error_string.chars().skip(parenthesis + 1).collect();

        errors.push(ErrorData {
            error_string: space_error.error_string.chars().skip(parenthesis).collect(),
            start: space_error.start + parenthesis,
            suggestions: vec![" (".to_string()],
            ..space_error.clone()
        });

        if !before.is_empty() {
            add_part(checker, &before, space_error.start, errors)?;
        }
        if !after.is_empty() {
            add_part(checker, &after, space_error.start + parenthesis + 1, errors)?;
        }
    }

    errors.sort_by_key(ErrorData::range);
    Ok(())
}

/// Remove errors that cover the same text as another, different error
///
/// The checker reports e.g. both a typo and a syntax error for the same
/// word. Errors are paired up per span, and the first of each pair goes.
pub fn remove_duplicate_errors(errors: &mut Vec<ErrorData>) {
    let mut paired: HashSet<ErrorData> = HashSet::new();
    let mut remove: Vec<usize> = Vec::new();

    for first in errors.iter() {
        for second in errors.iter() {
            if first.span_key() == second.span_key()
                && first != second
                && !paired.contains(first)
                && !paired.contains(second)
            {
                paired.insert(first.clone());
                paired.insert(second.clone());
                if let Some(index) = errors.iter().position(|e| e == first) {
                    remove.push(index);
                }
            }
        }
    }

    remove.sort_unstable();
    remove.dedup();
    for index in remove.into_iter().rev() {
        errors.remove(index);
    }
}

/// Apply every fix to the errors of one paragraph
pub fn fix_all_errors(
    errors: Vec<ErrorData>,
    checker: &dyn GrammarChecker,
) -> Result<Vec<ErrorData>, CheckerError> {
    let mut errors = fix_aistton(errors);
    fix_no_space_before_parent_start(&mut errors, checker)?;
    remove_duplicate_errors(&mut errors);
    Ok(sort_by_range(errors))
}
