//! Error-annotated sentences
//!
//! A marked-up sentence is a tree: plain `head` text followed by segments,
//! each an error markup plus the plain text (`tail`) after it. The
//! erroneous part of a markup is itself a sentence, so markup can nest.

use super::ErrorData;

/// Kinds of manually marked up errors
///
/// The name doubles as the XML element name in goldstandard corpora and
/// as the `error_type` of the expected [`ErrorData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Unclassified error (`§`)
    Error,
    /// Orthographic error, a non-word (`$`)
    ErrorOrt,
    /// Real-word orthographic error (`¢`)
    ErrorOrtReal,
    /// Lexical error (`€`)
    ErrorLex,
    /// Morphosyntactic error (`£`)
    ErrorMorphSyn,
    /// Syntactic error (`¥`)
    ErrorSyn,
    /// Text in another language (`∞`)
    ErrorLang,
    /// Formatting error, e.g. spacing (`‰`)
    ErrorFormat,
}

impl ErrorType {
    /// All error types
    pub const ALL: [Self; 8] = [
        Self::Error,
        Self::ErrorOrt,
        Self::ErrorOrtReal,
        Self::ErrorLex,
        Self::ErrorMorphSyn,
        Self::ErrorSyn,
        Self::ErrorLang,
        Self::ErrorFormat,
    ];

    /// Element name, e.g. `errorort`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::ErrorOrt => "errorort",
            Self::ErrorOrtReal => "errorortreal",
            Self::ErrorLex => "errorlex",
            Self::ErrorMorphSyn => "errormorphsyn",
            Self::ErrorSyn => "errorsyn",
            Self::ErrorLang => "errorlang",
            Self::ErrorFormat => "errorformat",
        }
    }

    /// Marker character used in the curly-brace markup
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Error => '§',
            Self::ErrorOrt => '$',
            Self::ErrorOrtReal => '¢',
            Self::ErrorLex => '€',
            Self::ErrorMorphSyn => '£',
            Self::ErrorSyn => '¥',
            Self::ErrorLang => '∞',
            Self::ErrorFormat => '‰',
        }
    }

    /// Look up an error type by its marker character
    #[must_use]
    pub fn from_marker(marker: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.marker() == marker)
    }

    /// Look up an error type by its element name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The correction part of an error markup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Correction {
    /// Extra classification, e.g. `noun,cons`
    pub error_info: Option<String>,
    /// Corrected forms
    pub suggestions: Vec<String>,
}

/// A marked up error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMarkup {
    /// The erroneous text, possibly containing nested markup
    pub error: ErrorAnnotatedSentence,
    /// Kind of error
    pub error_type: ErrorType,
    /// The correction
    pub correction: Correction,
}

/// An error markup followed by plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMarkupSegment {
    /// The error
    pub markup: ErrorMarkup,
    /// Plain text up to the next markup
    pub tail: String,
}

/// A sentence with error markup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorAnnotatedSentence {
    /// Plain text before the first markup
    pub head: String,
    /// Markups in order of appearance
    pub errors: Vec<ErrorMarkupSegment>,
}

impl ErrorMarkup {
    /// Convert to an [`ErrorData`] starting at `offset`
    #[must_use]
    pub fn to_error_data(&self, offset: usize) -> ErrorData {
        let error_string = self.error.uncorrected_text();
        let end = offset + error_string.chars().count();
        ErrorData::new(
            error_string,
            offset,
            end,
            self.error_type.name(),
            self.correction.error_info.clone().unwrap_or_default(),
            self.correction.suggestions.clone(),
        )
    }
}

impl ErrorAnnotatedSentence {
    /// A sentence without markup
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            head: text.into(),
            errors: Vec::new(),
        }
    }

    /// The sentence as the writer wrote it, with all markup removed
    #[must_use]
    pub fn uncorrected_text(&self) -> String {
        let mut text = self.head.clone();
        for segment in &self.errors {
            text.push_str(&segment.markup.error.uncorrected_text());
            text.push_str(&segment.tail);
        }
        text
    }

    /// The uncorrected sentence and its top-level errors
    ///
    /// Nested markup only contributes text; the enclosing error is the one
    /// the grammar checker is expected to find.
    #[must_use]
    pub fn to_test_sentence(&self) -> (String, Vec<ErrorData>) {
        let mut offset = self.head.chars().count();
        let mut errors = Vec::with_capacity(self.errors.len());

        for segment in &self.errors {
            let error_data = segment.markup.to_error_data(offset);
            offset = error_data.end + segment.tail.chars().count();
            errors.push(error_data);
        }

        (self.uncorrected_text(), errors)
    }

    /// Whether the sentence has no markup at all
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.errors.is_empty()
    }
}
