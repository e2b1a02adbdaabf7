//! Form renderers: HTML for the web server, plain text for the terminal.
//!
//! Field *i* is named with [`field_name`] so a submission can be turned back
//! into answers with `answers_from_submission`.

use std::fmt::Write as _;

use scriptform_core::form::naming::field_name;
use scriptform_types::form::{AnswerSequence, FormSpec};

/// What to show under the form after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The replay finished; this is everything it printed.
    Output(&'a str),
    /// The replay failed. `output` is whatever was printed before that.
    Failure { message: &'a str, output: &'a str },
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the form itself: heading, description, one labelled text input
/// per field, submit button.
///
/// `answers`, when given, pre-fills the inputs so a re-rendered form keeps
/// what the user typed.
pub fn render_html(spec: &FormSpec, answers: Option<&AnswerSequence>) -> String {
    let mut html = String::new();

    if !spec.title.is_empty() {
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(&spec.title));
    }
    if !spec.description.is_empty() {
        let _ = writeln!(html, "<p>{}</p>", escape_html(&spec.description));
    }

    html.push_str("<form method=\"post\">\n");
    for (index, input) in spec.inputs.iter().enumerate() {
        let name = field_name(index);
        let value = answers
            .and_then(|answers| answers.get(index))
            .map(|value| format!(" value=\"{}\"", escape_html(value)))
            .unwrap_or_default();

        let _ = writeln!(
            html,
            "    <label for=\"field-{name}\">{}</label>",
            escape_html(&input.label)
        );
        let _ = writeln!(
            html,
            "    <input type=\"text\" id=\"field-{name}\" name=\"{name}\" placeholder=\"{}\"{value}>",
            escape_html(&input.placeholder)
        );
    }
    html.push_str("    <input type=\"submit\" value=\"submit\">\n");
    html.push_str("</form>\n");

    html
}

/// Render a complete page: the form, then the outcome of the last submission.
pub fn render_page(
    spec: &FormSpec,
    answers: Option<&AnswerSequence>,
    outcome: Option<Outcome<'_>>,
) -> String {
    let mut body = render_html(spec, answers);

    match outcome {
        Some(Outcome::Output(output)) => {
            let _ = writeln!(body, "<pre class=\"output\">{}</pre>", escape_html(output));
        }
        Some(Outcome::Failure { message, output }) => {
            if !output.is_empty() {
                let _ = writeln!(body, "<pre class=\"output\">{}</pre>", escape_html(output));
            }
            let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(message));
        }
        None => {}
    }

    page(page_title(spec), &body)
}

/// Render a page for a script that could not be turned into a form at all.
pub fn render_error_page(message: &str) -> String {
    let body = format!("<p class=\"error\">{}</p>\n", escape_html(message));
    page("scriptform", &body)
}

fn page_title(spec: &FormSpec) -> &str {
    if spec.title.is_empty() {
        "scriptform"
    } else {
        &spec.title
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}

/// Render the form as plain text for the terminal.
pub fn render_text(spec: &FormSpec) -> String {
    let mut text = String::new();

    if !spec.title.is_empty() {
        let _ = writeln!(text, "{}", spec.title);
    }
    if !spec.description.is_empty() {
        let _ = writeln!(text, "{}", spec.description);
    }
    if spec.has_header() {
        text.push('\n');
    }

    if spec.is_empty() {
        text.push_str("(this script asks for no input)\n");
        return text;
    }

    for (index, input) in spec.inputs.iter().enumerate() {
        let _ = write!(text, "{}. {}", field_name(index), input.label);
        if input.has_placeholder() {
            let _ = write!(text, " [{}]", input.placeholder);
        }
        text.push('\n');
    }

    text
}
