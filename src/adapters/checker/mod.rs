//! External grammar checker engines
//!
//! Implements [`GrammarChecker`](crate::core::ports::GrammarChecker) by
//! running an engine as a subprocess:
//!
//! - [`divvun_checker`] - `divvun-checker` with a pipespec or `.zcheck` archive
//! - [`runtime`] - `divvun-runtime` with a `.drb` bundle
//!
//! Paragraphs go to the engine in chunks, several chunks at a time.

pub mod divvun_checker;
pub mod runtime;

use std::ffi::OsString;
use std::io::Write;
use std::num::NonZeroUsize;
use std::process::{Command, Stdio};
use std::thread;

use log::debug;

pub use divvun_checker::DivvunChecker;
pub use runtime::DivvunRuntime;

pub use crate::core::ports::CheckerError;
use crate::core::ports::CheckedParagraph;

/// Paragraphs per engine invocation
pub const CHUNK_SIZE: usize = 10;

/// An engine command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommand {
    /// The executable, looked up on `PATH`
    pub program: String,
    /// Its arguments
    pub args: Vec<OsString>,
}

impl EngineCommand {
    /// The command line as one string, for messages
    #[must_use]
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Run the command with `input` on stdin and return its stdout
    pub fn run(&self, input: &str) -> Result<String, CheckerError> {
        let command = self.display();
        debug!("running {command} on {} byte(s)", input.len());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CheckerError::Spawn {
                command: command.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            CheckerError::Io(std::io::Error::other(format!("no stdin for {command}")))
        })?;

        // Feed stdin from another thread so a full stdout pipe cannot block us
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(input.as_bytes()));
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        let output = output?;

        if !output.status.success() {
            return Err(CheckerError::Status {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        written.map_err(|_| CheckerError::WorkerPanicked)??;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check paragraphs chunk by chunk, running chunks in parallel
///
/// Results come back in input order.
pub fn check_in_chunks<F>(paragraphs: &[String], check_chunk: F) -> Result<Vec<CheckedParagraph>, CheckerError>
where
    F: Fn(&[String]) -> Result<Vec<CheckedParagraph>, CheckerError> + Sync,
{
    let chunks: Vec<&[String]> = paragraphs.chunks(CHUNK_SIZE).collect();
    let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    debug!("{} paragraph(s) in {} chunk(s), {workers} at a time", paragraphs.len(), chunks.len());

    let check_chunk = &check_chunk;
    let mut results = Vec::with_capacity(paragraphs.len());

    for batch in chunks.chunks(workers) {
        let checked: Vec<Vec<CheckedParagraph>> = thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .copied()
                .map(|chunk| scope.spawn(move || check_chunk(chunk)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|_| Err(CheckerError::WorkerPanicked)))
                .collect::<Result<_, _>>()
        })?;
        results.extend(checked.into_iter().flatten());
    }

    Ok(results)
}
