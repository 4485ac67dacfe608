//! YAML grammar test files
//!
//! - [`parser`] - Load a test file and find duplicated tests
//! - [`writer`] - Remove duplicates and move tests between PASS/FAIL files

pub mod parser;
pub mod writer;

pub use parser::{YamlTestFile, YamlTestFileError, duplicate_tests, load};
pub use writer::{move_tests, remove_duplicates};
