//! Domain models for gtgramtools
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ErrorData`] - One error, either marked up by hand or found by the checker
//! - [`ErrorAnnotatedSentence`] - A sentence with (possibly nested) error markup
//! - [`TestData`] - A test sentence ready for comparison
//! - [`Counts`] - Tallies of true/false positives and negatives

mod counts;
mod error_data;
mod markup;
mod test_data;

pub use counts::{Category, Counts};
pub use error_data::{ErrorData, sort_by_range};
pub use markup::{Correction, ErrorAnnotatedSentence, ErrorMarkup, ErrorMarkupSegment, ErrorType};
pub use test_data::TestData;
