//! Result tallies

use std::ops::AddAssign;

use serde::Serialize;

/// Comparison outcome categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Marked up error found, with the expected correction
    Tp,
    /// No marked up errors and none found
    Tn,
    /// Marked up error found, but corrected wrongly
    Fp1,
    /// Error found that is not marked up
    Fp2,
    /// Marked up error found, but without corrections
    Fn1,
    /// Marked up error not found
    Fn2,
}

impl Category {
    /// Short label, e.g. `fp1`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tp => "tp",
            Self::Tn => "tn",
            Self::Fp1 => "fp1",
            Self::Fp2 => "fp2",
            Self::Fn1 => "fn1",
            Self::Fn2 => "fn2",
        }
    }

    /// Whether this category counts as a pass
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Tp | Self::Tn)
    }

    /// What the category means
    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Tp => "GramDivvun found marked up error and has the suggested correction",
            Self::Tn => "No errors marked up and GramDivvun found none",
            Self::Fp1 => "GramDivvun found manually marked up error, but corrected wrongly",
            Self::Fp2 => "GramDivvun found error which is not manually marked up",
            Self::Fn1 => "GramDivvun found manually marked up error, but has no correction",
            Self::Fn2 => "GramDivvun did not find manually marked up error",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of results per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    /// True positives
    pub tp: usize,
    /// True negatives
    pub tn: usize,
    /// False positives, wrong correction
    pub fp1: usize,
    /// False positives, not marked up
    pub fp2: usize,
    /// False negatives, no correction
    pub fn1: usize,
    /// False negatives, not found
    pub fn2: usize,
}

impl Counts {
    /// Count for one category
    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Tp => self.tp,
            Category::Tn => self.tn,
            Category::Fp1 => self.fp1,
            Category::Fp2 => self.fp2,
            Category::Fn1 => self.fn1,
            Category::Fn2 => self.fn2,
        }
    }

    /// Total of the passing categories
    #[must_use]
    pub const fn passes(&self) -> usize {
        self.tp + self.tn
    }

    /// Total of the failing categories
    #[must_use]
    pub const fn fails(&self) -> usize {
        self.fp1 + self.fp2 + self.fn1 + self.fn2
    }

    /// Passes plus fails
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passes() + self.fails()
    }

    /// Precision, recall and F₁ as fractions
    ///
    /// `None` when any of them would divide by zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scores(&self) -> Option<(f64, f64, f64)> {
        let false_positives = self.fp1 + self.fp2;
        let false_negatives = self.fn1 + self.fn2;
        if self.tp == 0 || self.tp + false_positives == 0 || self.tp + false_negatives == 0 {
            return None;
        }

        let tp = self.tp as f64;
        let precision = tp / (tp + false_positives as f64);
        let recall = tp / (tp + false_negatives as f64);
        let f1 = 2.0 * precision * recall / (precision + recall);
        Some((precision, recall, f1))
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        self.tp += rhs.tp;
        self.tn += rhs.tn;
        self.fp1 += rhs.fp1;
        self.fp2 += rhs.fp2;
        self.fn1 += rhs.fn1;
        self.fn2 += rhs.fn2;
    }
}
