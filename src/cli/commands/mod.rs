//! Command implementations
//!
//! Each command returns the process exit code.

mod build_archive;
mod compare_engines;
mod test_xml;
mod test_yaml;

pub use build_archive::build_archive;
pub use compare_engines::compare_engines;
pub use test_xml::test_xml;
pub use test_yaml::test_yaml;

use gtgramtools::core::models::TestData;
use gtgramtools::core::services::{RunSummary, run_tests};
use gtgramtools::output::{OutputStyle, TextReporter};

/// Compare and report test results, printing the report to stdout
fn report(tests: &[TestData], style: OutputStyle, hide_passes: bool) -> RunSummary {
    let mut reporter = TextReporter::new(style);
    let summary = run_tests(tests, &mut reporter, hide_passes);
    print!("{}", reporter.into_output());
    summary
}
