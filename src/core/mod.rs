//! Core domain logic for gtgramtools
//!
//! This module contains pure logic with no I/O dependencies.
//! The external grammar checker is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ErrorData`, markup trees, `TestData`, `Counts`)
//! - `services/` - Normalisation, comparison and the test runner
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
