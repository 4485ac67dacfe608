//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the core logic and the
//! outside world: the external grammar checker and the report output.
//!
//! Implementations live in the `adapters` and `output` modules.

mod grammar_checker;
mod reporter;

pub use grammar_checker::{CheckedParagraph, CheckerError, GrammarChecker};
pub use reporter::{Reporter, ResultLine};
