//! Adapters for the outside world
//!
//! - [`markup`] - Parse the curly brace error markup of test sentences
//! - [`yaml`] - Load and maintain YAML test files
//! - [`corpus`] - Load XML goldstandard corpus files
//! - [`pipespec`] - Read pipespecs and build `.zcheck` archives
//! - [`checker`] - Run the external grammar checker engines

pub mod checker;
pub mod corpus;
pub mod markup;
pub mod pipespec;
pub mod yaml;
