//! Property-based tests for the markup parser
//!
//! Uses proptest to verify properties that should hold for all inputs.

use gtgramtools::adapters::markup;
use proptest::prelude::*;

proptest! {
    /// A single `{x}¢{y}` error points at exactly `x` in the checker input
    #[test]
    fn error_offsets_select_the_error_text(
        head in "[^{}\n]{0,20}",
        x in "[^{}\n]{1,20}",
        y in "[^{}|/\n]{0,10}",
        tail in "[^{}\n]{0,20}"
    ) {
        let sentence = markup::parse(&format!("{head}{{{x}}}¢{{{y}}}{tail}")).unwrap();
        let (text, errors) = sentence.to_test_sentence();

        prop_assert_eq!(&text, &format!("{head}{x}{tail}"));
        prop_assert_eq!(errors.len(), 1);
        let error = &errors[0];
        prop_assert_eq!(&error.error_string, &x);
        prop_assert_eq!(error.error_type.as_str(), "errorortreal");
        let selected: String = text.chars().skip(error.start).take(error.end - error.start).collect();
        prop_assert_eq!(selected, x);
    }

    /// Any input gives a sentence or an error, never a panic
    #[test]
    fn parse_never_panics(text in "\\PC*") {
        let _ = markup::parse(&text);
    }

    /// Braces are the only markup syntax: text without them is returned as is
    #[test]
    fn text_without_braces_is_plain(text in "[^{}]*") {
        let sentence = markup::parse(&text).unwrap();
        prop_assert!(sentence.is_plain());
        prop_assert_eq!(sentence.uncorrected_text(), text);
    }
}
