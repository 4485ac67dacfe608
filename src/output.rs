//! Report formatting
//!
//! Test runs are reported in one of several styles. The report is collected
//! in memory and printed once the run is over, so that the exit code logic
//! never interleaves with half written output.

use std::str::FromStr;

use colored::Colorize;

use crate::core::models::{Category, Counts, ErrorData};
use crate::core::ports::{Reporter, ResultLine};

/// How much of a test run to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Every result with its errors, then totals and scores (default)
    #[default]
    Normal,
    /// One line per test sentence
    Compact,
    /// One character per result
    Terse,
    /// Only `passes/fails/total`
    Final,
    /// Nothing; the exit code tells
    Silent,
}

impl OutputStyle {
    /// Names accepted on the command line
    pub const NAMES: [&'static str; 4] = ["normal", "compact", "terse", "final"];
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Compact => write!(f, "compact"),
            Self::Terse => write!(f, "terse"),
            Self::Final => write!(f, "final"),
            Self::Silent => write!(f, "silent"),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "compact" => Ok(Self::Compact),
            "terse" => Ok(Self::Terse),
            "final" => Ok(Self::Final),
            "silent" => Ok(Self::Silent),
            _ => Err(format!(
                "Invalid output style: {s}. Use: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Collects a report in the chosen style
#[derive(Debug, Clone, Default)]
pub struct TextReporter {
    style: OutputStyle,
    out: String,
}

impl TextReporter {
    /// An empty report
    #[must_use]
    pub const fn new(style: OutputStyle) -> Self {
        Self {
            style,
            out: String::new(),
        }
    }

    /// The report so far
    #[must_use]
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Consume the reporter, returning the report
    #[must_use]
    pub fn into_output(self) -> String {
        self.out
    }

    fn result_line(&mut self, line: &ResultLine<'_>, passed: bool) {
        let width = line.total.to_string().len();
        let verdict = if passed {
            format!("PASS {}", line.category).green()
        } else {
            format!("FAIL {}", line.category).red()
        };

        self.out.push_str(line.filename);
        self.out.push('\n');
        self.out.push_str(&format!(
            "[{}/{}][{verdict}] {} {} {}\n",
            format!("{:>width$}", line.index).cyan(),
            line.total,
            describe_expected(line.expected),
            "=>".blue(),
            describe_found(line.found),
        ));
    }

    fn totals(&mut self, counts: &Counts) {
        self.out.push_str(&format!(
            "Total passes: {}, Total fails: {}, Total: {}\n",
            counts.passes().to_string().green(),
            counts.fails().to_string().red(),
            counts.total().to_string().cyan(),
        ));
    }

    fn scores(&mut self, counts: &Counts) {
        let Some((precision, recall, f1)) = counts.scores() else {
            return;
        };

        for category in [Category::Tp, Category::Tn] {
            self.out.push_str(&format!(
                "{}: {}\n",
                category_name(category),
                counts.get(category).to_string().green()
            ));
        }
        for category in [Category::Fp1, Category::Fp2, Category::Fn1, Category::Fn2] {
            self.out.push_str(&format!(
                "{}: {}\n",
                category_name(category),
                counts.get(category).to_string().red()
            ));
        }
        self.out.push_str(&format!("Precision: {:.1}%\n", precision * 100.0));
        self.out.push_str(&format!("Recall: {:.1}%\n", recall * 100.0));
        self.out.push_str(&format!("F₁ score: {:.1}%\n", f1 * 100.0));
    }
}

const fn category_name(category: Category) -> &'static str {
    match category {
        Category::Tp => "True positive",
        Category::Tn => "True negative",
        Category::Fp1 => "False positive 1",
        Category::Fp2 => "False positive 2",
        Category::Fn1 => "False negative 1",
        Category::Fn2 => "False negative 2",
    }
}

/// `error:corrections (type, (info))`
fn describe_expected(error: Option<&ErrorData>) -> String {
    error.map_or_else(
        || ": ()".to_string(),
        |e| {
            format!(
                "{}:{} ({}, ({}))",
                e.error_string,
                e.suggestions.join(", "),
                e.error_type,
                e.explanation
            )
        },
    )
}

/// `error:[suggestions] (type)`
fn describe_found(error: Option<&ErrorData>) -> String {
    error.map_or_else(
        || ":[] ()".to_string(),
        |e| format!("{}:[{}] ({})", e.error_string, e.suggestions.join(", "), e.error_type),
    )
}

impl Reporter for TextReporter {
    fn title(&mut self, index: usize, total: usize, sentence: &str) {
        if self.style == OutputStyle::Normal {
            let rule = "-".repeat(10);
            self.out.push_str(&format!(
                "{}\n",
                format!("{rule}\nTest {index}/{total}: {sentence}\n{rule}").cyan()
            ));
        }
    }

    fn success(&mut self, line: &ResultLine<'_>) {
        match self.style {
            OutputStyle::Normal => self.result_line(line, true),
            OutputStyle::Terse => self.out.push_str(&".".green().to_string()),
            OutputStyle::Compact | OutputStyle::Final | OutputStyle::Silent => {},
        }
    }

    fn failure(&mut self, line: &ResultLine<'_>) {
        match self.style {
            OutputStyle::Normal => self.result_line(line, false),
            OutputStyle::Terse => self.out.push_str(&"!".red().to_string()),
            OutputStyle::Compact | OutputStyle::Final | OutputStyle::Silent => {},
        }
    }

    fn result(&mut self, index: usize, counts: &Counts, sentence: &str) {
        match self.style {
            OutputStyle::Normal => self.out.push_str(&format!(
                "Test {index} - Passes: {}, Fails: {}, Total: {}\n\n",
                counts.passes().to_string().green(),
                counts.fails().to_string().red(),
                counts.total().to_string().cyan(),
            )),
            OutputStyle::Compact => {
                let verdict = if counts.fails() > 0 {
                    "FAIL".red()
                } else {
                    "PASS".green()
                };
                self.out.push_str(&format!(
                    "[{verdict}] {sentence} {}/{}/{}\n",
                    counts.passes(),
                    counts.fails(),
                    counts.total()
                ));
            },
            OutputStyle::Terse => self.out.push('\n'),
            OutputStyle::Final | OutputStyle::Silent => {},
        }
    }

    fn final_result(&mut self, counts: &Counts) {
        match self.style {
            OutputStyle::Normal => {
                self.totals(counts);
                self.scores(counts);
            },
            OutputStyle::Compact => self.totals(counts),
            OutputStyle::Terse => {
                let verdict = if counts.fails() > 0 {
                    "FAIL".red()
                } else {
                    "PASS".green()
                };
                self.out.push_str(&format!("{verdict}\n"));
            },
            OutputStyle::Final => self.out.push_str(&format!(
                "{}/{}/{}",
                counts.passes(),
                counts.fails(),
                counts.total()
            )),
            OutputStyle::Silent => {},
        }
    }
}
