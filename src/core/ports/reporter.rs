//! Report sink port
//!
//! The test runner emits events; the output styles decide what to print.

use crate::core::models::{Category, Counts, ErrorData};

/// One compared error, passed to [`Reporter::success`] and [`Reporter::failure`]
#[derive(Debug, Clone, Copy)]
pub struct ResultLine<'a> {
    /// 1-based number of the test sentence
    pub index: usize,
    /// Number of test sentences in the run
    pub total: usize,
    /// Outcome category
    pub category: Category,
    /// The marked up error, if the category has one
    pub expected: Option<&'a ErrorData>,
    /// The checker's error, if the category has one
    pub found: Option<&'a ErrorData>,
    /// File the test came from
    pub filename: &'a str,
}

/// Receiver of test runner events
pub trait Reporter {
    /// A test sentence is about to be reported
    fn title(&mut self, index: usize, total: usize, sentence: &str);

    /// A passing result
    fn success(&mut self, line: &ResultLine<'_>);

    /// A failing result
    fn failure(&mut self, line: &ResultLine<'_>);

    /// Tallies for one test sentence
    fn result(&mut self, index: usize, counts: &Counts, sentence: &str);

    /// Tallies for the whole run
    fn final_result(&mut self, counts: &Counts);
}
