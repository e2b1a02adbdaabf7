//! Prompt grammar: `label [placeholder] label-suffix`.
//!
//! A prompt may carry one bracketed segment holding a default or example
//! value. The text around it becomes the label:
//!
//! ```
//! use scriptform_core::prompt::grammar::parse_prompt;
//!
//! let field = parse_prompt("Your city [Seattle]:");
//! assert_eq!(field.label, "Your city:");
//! assert_eq!(field.placeholder, "Seattle");
//! ```
//!
//! A backslash before `[` or `]` makes the bracket literal; escaped brackets
//! are un-escaped in the result. Parsing never fails: anything that cannot
//! be split cleanly is returned whole as the label.

use scriptform_types::form::InputField;

const OPEN: u8 = b'[';
const CLOSE: u8 = b']';
const ESCAPE: u8 = b'\\';

/// Parse one raw prompt string into an [`InputField`].
///
/// Only the first un-escaped `[` and the first un-escaped `]` after it are
/// treated as delimiters. Text before and after the pair is trimmed and
/// concatenated into the label; the trimmed contents become the placeholder.
///
/// The label is non-empty whenever the prompt has visible text. A blank
/// prompt (`input("")`) still gets a field, with an empty label, because the
/// call consumes an answer at replay and the fields must stay aligned with it.
pub fn parse_prompt(prompt: &str) -> InputField {
    if let Some((open, close)) = find_placeholder(prompt) {
        let label = unescape(&format!(
            "{}{}",
            prompt[..open].trim(),
            prompt[close + 1..].trim()
        ));

        // A prompt that is nothing but a placeholder keeps its text as label.
        if !label.trim().is_empty() {
            let placeholder = unescape(prompt[open + 1..close].trim());
            return InputField::new(label, placeholder);
        }
    }

    InputField::new(unescape(prompt.trim()), "")
}

/// Byte offsets of the placeholder delimiters, if the prompt has a pair.
///
/// The delimiters are ASCII, so the offsets are always char boundaries.
fn find_placeholder(prompt: &str) -> Option<(usize, usize)> {
    let bytes = prompt.as_bytes();
    let is_delimiter = |i: usize, delimiter: u8| {
        bytes[i] == delimiter && (i == 0 || bytes[i - 1] != ESCAPE)
    };

    let open = (0..bytes.len()).find(|&i| is_delimiter(i, OPEN))?;
    let close = (open + 1..bytes.len()).find(|&i| is_delimiter(i, CLOSE))?;
    Some((open, close))
}

fn unescape(text: &str) -> String {
    text.replace("\\[", "[").replace("\\]", "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(prompt: &str) -> (String, String) {
        let field = parse_prompt(prompt);
        (field.label, field.placeholder)
    }

    // -------------------------------------------------------------------
    // Placeholder extraction
    // -------------------------------------------------------------------

    #[test]
    fn test_placeholder_before_suffix() {
        assert_eq!(
            parsed("Your city [Seattle]:"),
            ("Your city:".to_string(), "Seattle".to_string())
        );
    }

    #[test]
    fn test_placeholder_at_end() {
        assert_eq!(parsed("Your city: [Seattle]"), parsed("Your city [Seattle]:"));
    }

    #[test]
    fn test_placeholder_contents_are_trimmed() {
        assert_eq!(
            parsed("Length [  12  ] "),
            ("Length".to_string(), "12".to_string())
        );
    }

    #[test]
    fn test_empty_brackets_give_empty_placeholder() {
        assert_eq!(parsed("Nickname []:"), ("Nickname:".to_string(), String::new()));
    }

    #[test]
    fn test_placeholder_with_spaces_inside() {
        assert_eq!(
            parsed("Favorite color [Black and purple]"),
            ("Favorite color".to_string(), "Black and purple".to_string())
        );
    }

    // -------------------------------------------------------------------
    // Escaping
    // -------------------------------------------------------------------

    #[test]
    fn test_escaped_brackets_are_literal() {
        assert_eq!(
            parsed(r"Your city \[Seattle\]:"),
            ("Your city [Seattle]:".to_string(), String::new())
        );
    }

    #[test]
    fn test_escaped_brackets_then_placeholder() {
        assert_eq!(
            parsed(r"Your city \[Seattle\]: [Placeholder]"),
            ("Your city [Seattle]:".to_string(), "Placeholder".to_string())
        );
    }

    #[test]
    fn test_escaped_close_inside_placeholder() {
        assert_eq!(
            parsed(r"Range [0..9\]]:"),
            ("Range:".to_string(), "0..9]".to_string())
        );
    }

    #[test]
    fn test_single_escaped_bracket() {
        assert_eq!(
            parsed(r"Index \[:"),
            ("Index [:".to_string(), String::new())
        );
    }

    // -------------------------------------------------------------------
    // Degradation
    // -------------------------------------------------------------------

    #[test]
    fn test_no_brackets_whole_string_is_label() {
        for prompt in ["Password length: ", "  Name  ", "What?", ""] {
            let field = parse_prompt(prompt);
            assert_eq!(field.label, prompt.trim(), "prompt {prompt:?}");
            assert_eq!(field.placeholder, "", "prompt {prompt:?}");
        }
    }

    #[test]
    fn test_blank_prompt_keeps_a_field_with_empty_label() {
        for prompt in ["", "   ", "\t\n"] {
            let field = parse_prompt(prompt);
            assert_eq!(field, InputField::new("", ""), "prompt {prompt:?}");
        }
        assert_eq!(parsed("  [  ]  "), ("[  ]".to_string(), String::new()));
    }

    #[test]
    fn test_unclosed_bracket_is_label_text() {
        assert_eq!(parsed("Pick [one"), ("Pick [one".to_string(), String::new()));
        assert_eq!(parsed("Pick one]"), ("Pick one]".to_string(), String::new()));
    }

    #[test]
    fn test_close_before_open_is_label_text() {
        assert_eq!(
            parsed("a ] b [ c"),
            ("a ] b [ c".to_string(), String::new())
        );
    }

    #[test]
    fn test_only_first_pair_is_consumed() {
        assert_eq!(
            parsed("Size [M] or [L]"),
            ("Sizeor [L]".to_string(), "M".to_string())
        );
    }

    #[test]
    fn test_placeholder_only_prompt_keeps_text_as_label() {
        assert_eq!(
            parsed(" [Seattle] "),
            ("[Seattle]".to_string(), String::new())
        );
    }

    #[test]
    fn test_multibyte_text_around_placeholder() {
        assert_eq!(
            parsed("Ciudad ñ [Sevilla] →"),
            ("Ciudad ñ→".to_string(), "Sevilla".to_string())
        );
    }
}
