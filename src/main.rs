//! gtgramtool - Test GiellaLT grammar checkers against marked up test
//! sentences
//!
//! Runs YAML test files and XML goldstandard corpora through
//! `divvun-checker` (or `divvun-runtime`), compares the errors it finds with
//! the markup and reports the outcome. Also packages grammar checker
//! archives.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::process::ExitCode;

use gtgramtools::Error;

/// Main entry point for the gtgramtool CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            if let Some(known) = err.downcast_ref::<Error>() {
                eprintln!("{known}");
                ExitCode::from(known.exit_code())
            } else {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}
