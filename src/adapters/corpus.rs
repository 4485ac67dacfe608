//! XML goldstandard corpus files
//!
//! Every `<p>` element is one test sentence. Errors are marked up with
//! `error*` elements carrying one `<correct>` child per correction:
//!
//! ```xml
//! <p>Mun <errorort>leam<correct errorinfo="verb,v">lean</correct></errorort> boahtán.</p>
//! ```
//!
//! Paragraphs in another language (`xml:lang` set) are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;

use crate::core::models::{Correction, ErrorAnnotatedSentence, ErrorMarkup, ErrorMarkupSegment, ErrorType};
use crate::core::services::MarkedSentence;

const CORRECT: &str = "correct";
const ERROR_INFO: &str = "errorinfo";
const URL: &str = "url";

/// Errors reading a corpus file
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The corpus file
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// The file is not well-formed XML
    #[error("invalid xml in {}: {source}", .path.display())]
    Xml {
        /// The corpus file
        path: PathBuf,
        /// What the XML parser said
        source: roxmltree::Error,
    },
}

/// Load the test sentences of a corpus file
pub fn load(path: &Path) -> Result<Vec<MarkedSentence>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

/// Extract the test sentences from the content of the corpus file at `path`
pub fn parse(path: &Path, content: &str) -> Result<Vec<MarkedSentence>, CorpusError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(content, options).map_err(|source| CorpusError::Xml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sentences = Vec::new();
    for paragraph in document.descendants().filter(|n| n.has_tag_name("p")) {
        if let Some(lang) = paragraph.attribute((roxmltree::NS_XML_URI, "lang")) {
            debug!("skipping paragraph in {lang} at byte {}", paragraph.range().start);
            continue;
        }

        let (sentence, errors) = paragraph_to_sentence(paragraph).to_test_sentence();
        let sentence = sentence.replace('\n', " ");
        if sentence.trim().is_empty() {
            warn!("skipping empty paragraph in {}", path.display());
            continue;
        }
        sentences.push(MarkedSentence { sentence, errors });
    }

    debug!("{} test paragraph(s) in {}", sentences.len(), path.display());
    Ok(sentences)
}

/// Convert a `<p>` element to an error annotated sentence
#[must_use]
pub fn paragraph_to_sentence(paragraph: Node<'_, '_>) -> ErrorAnnotatedSentence {
    let mut sentence = ErrorAnnotatedSentence::default();
    collect(paragraph, &mut sentence);
    sentence
}

fn push_text(sentence: &mut ErrorAnnotatedSentence, text: &str) {
    match sentence.errors.last_mut() {
        Some(segment) => segment.tail.push_str(text),
        None => sentence.head.push_str(text),
    }
}

fn collect(node: Node<'_, '_>, sentence: &mut ErrorAnnotatedSentence) {
    for child in node.children() {
        if child.is_text() {
            push_text(sentence, child.text().unwrap_or_default());
            continue;
        }
        if !child.is_element() {
            continue;
        }

        let name = child.tag_name().name();
        if name == CORRECT {
            continue;
        }

        match ErrorType::from_name(name) {
            Some(error_type) if !is_url(child, error_type) => {
                let mut error = ErrorAnnotatedSentence::default();
                collect(child, &mut error);
                sentence.errors.push(ErrorMarkupSegment {
                    markup: ErrorMarkup {
                        error,
                        error_type,
                        correction: correction(child),
                    },
                    tail: String::new(),
                });
            },
            // formatting elements and urls are plain text
            _ => collect(child, sentence),
        }
    }
}

/// Urls are marked as foreign text, but are kept as plain text
fn is_url(element: Node<'_, '_>, error_type: ErrorType) -> bool {
    error_type == ErrorType::ErrorLang
        && (element.attribute(CORRECT) == Some(URL)
            || element
                .children()
                .filter(|c| c.has_tag_name(CORRECT))
                .any(|c| c.text() == Some(URL)))
}

fn correction(element: Node<'_, '_>) -> Correction {
    let corrects: Vec<Node<'_, '_>> = element.children().filter(|c| c.has_tag_name(CORRECT)).collect();

    if corrects.is_empty() {
        // older corpus files keep the correction in attributes
        return Correction {
            error_info: element.attribute(ERROR_INFO).map(ToString::to_string),
            suggestions: element.attribute(CORRECT).map(ToString::to_string).into_iter().collect(),
        };
    }

    Correction {
        error_info: corrects
            .first()
            .and_then(|c| c.attribute(ERROR_INFO))
            .filter(|info| !info.is_empty())
            .map(ToString::to_string),
        suggestions: corrects
            .iter()
            .map(|c| c.text().unwrap_or_default().to_string())
            .collect(),
    }
}
