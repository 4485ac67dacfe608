//! Recursive descent parser for the curly-brace error markup

use thiserror::Error;

use crate::core::models::{
    Correction, ErrorAnnotatedSentence, ErrorMarkup, ErrorMarkupSegment, ErrorType,
};

/// Separates the error info from the corrections
const INFO_SEPARATOR: char = '|';
/// Separates alternative corrections
const SUGGESTION_SEPARATOR: &str = "///";

/// Errors in the error markup of a sentence
///
/// Positions count characters from the start of the sentence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// A `{` without its `}`
    #[error("unclosed '{{' at position {position} in: {text}")]
    Unclosed {
        /// Position of the `{`
        position: usize,
        /// The sentence
        text: String,
    },

    /// A `}` without its `{`
    #[error("unexpected '}}' at position {position} in: {text}")]
    UnexpectedClose {
        /// Position of the `}`
        position: usize,
        /// The sentence
        text: String,
    },

    /// The erroneous text is not followed by an error type marker
    #[error("missing error type marker at position {position} in: {text}")]
    MissingMarker {
        /// Where the marker should be
        position: usize,
        /// The sentence
        text: String,
    },

    /// The marker is not followed by a `{correction}`
    #[error("missing correction at position {position} in: {text}")]
    MissingCorrection {
        /// Where the correction should start
        position: usize,
        /// The sentence
        text: String,
    },
}

/// Parse a marked up sentence
pub fn parse(text: &str) -> Result<ErrorAnnotatedSentence, MarkupError> {
    let mut parser = Parser {
        text,
        chars: text.chars().collect(),
        pos: 0,
    };
    let sentence = parser.sentence(None)?;
    if parser.pos < parser.chars.len() {
        return Err(MarkupError::UnexpectedClose {
            position: parser.pos,
            text: text.to_string(),
        });
    }
    Ok(sentence)
}

struct Parser<'a> {
    text: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Parse text and markup up to a `}` (when `opened_at` is set) or the end
    fn sentence(&mut self, opened_at: Option<usize>) -> Result<ErrorAnnotatedSentence, MarkupError> {
        let mut sentence = ErrorAnnotatedSentence::default();

        loop {
            match self.peek() {
                None => {
                    if let Some(position) = opened_at {
                        return Err(MarkupError::Unclosed {
                            position,
                            text: self.text.to_string(),
                        });
                    }
                    break;
                },
                Some('}') => {
                    if opened_at.is_some() {
                        break;
                    }
                    return Err(MarkupError::UnexpectedClose {
                        position: self.pos,
                        text: self.text.to_string(),
                    });
                },
                Some('{') => {
                    let markup = self.markup()?;
                    sentence.errors.push(ErrorMarkupSegment {
                        markup,
                        tail: String::new(),
                    });
                },
                Some(c) => {
                    self.pos += 1;
                    match sentence.errors.last_mut() {
                        Some(segment) => segment.tail.push(c),
                        None => sentence.head.push(c),
                    }
                },
            }
        }

        Ok(sentence)
    }

    /// Parse `{error}<marker>{correction}`, positioned at the first `{`
    fn markup(&mut self) -> Result<ErrorMarkup, MarkupError> {
        let opened_at = self.pos;
        self.pos += 1;
        let error = self.sentence(Some(opened_at))?;
        // sentence() stopped at the closing brace
        self.pos += 1;

        let error_type = self
            .peek()
            .and_then(ErrorType::from_marker)
            .ok_or_else(|| MarkupError::MissingMarker {
                position: self.pos,
                text: self.text.to_string(),
            })?;
        self.pos += 1;

        if self.peek() != Some('{') {
            return Err(MarkupError::MissingCorrection {
                position: self.pos,
                text: self.text.to_string(),
            });
        }
        let correction_start = self.pos;
        self.pos += 1;

        let mut raw = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(MarkupError::Unclosed {
                        position: correction_start,
                        text: self.text.to_string(),
                    });
                },
                Some('}') => {
                    self.pos += 1;
                    break;
                },
                Some(c) => {
                    raw.push(c);
                    self.pos += 1;
                },
            }
        }

        Ok(ErrorMarkup {
            error,
            error_type,
            correction: parse_correction(&raw),
        })
    }
}

fn parse_correction(raw: &str) -> Correction {
    let (error_info, corrections) = match raw.split_once(INFO_SEPARATOR) {
        Some((info, rest)) => ((!info.is_empty()).then(|| info.to_string()), rest),
        None => (None, raw),
    };

    Correction {
        error_info,
        suggestions: corrections.split(SUGGESTION_SEPARATOR).map(ToString::to_string).collect(),
    }
}
