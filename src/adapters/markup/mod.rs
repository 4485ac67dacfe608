//! Giella error markup
//!
//! Test sentences mark errors inline:
//!
//! ```text
//! {erroneous text}<marker>{[error info|]correction[///correction...]}
//! ```
//!
//! where `<marker>` selects the [`ErrorType`](crate::core::models::ErrorType),
//! e.g. `$` for orthographic errors. Markup nests inside the erroneous text:
//!
//! ```
//! use gtgramtools::adapters::markup;
//!
//! let sentence = markup::parse("{{makkar}${interr,á|makkár} soga}€{man soga} sii").unwrap();
//! let (text, errors) = sentence.to_test_sentence();
//! assert_eq!(text, "makkar soga sii");
//! assert_eq!(errors[0].error_type, "errorlex");
//! ```

mod parser;

pub use parser::{MarkupError, parse};

use crate::core::services::MarkedSentence;

/// Parse a test sentence into the sentence fed to the checker and its
/// top-level marked up errors
///
/// Newlines become spaces; the checker treats each line as a paragraph.
pub fn marked_sentence(text: &str) -> Result<MarkedSentence, MarkupError> {
    let (sentence, errors) = parse(text)?.to_test_sentence();
    Ok(MarkedSentence {
        sentence: sentence.replace('\n', " "),
        errors,
    })
}
