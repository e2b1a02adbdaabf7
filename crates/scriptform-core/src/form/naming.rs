//! Positional naming convention for form controls.
//!
//! Field *i* (1-indexed) of a form is named `"i"` and answers the *i*-th
//! input request of the script. Renderers use [`field_name`] to name their
//! controls; [`answers_from_submission`] turns the submitted controls back
//! into an [`AnswerSequence`] in replay order.

use std::collections::{BTreeMap, HashMap};

use scriptform_types::error::SubmissionError;
use scriptform_types::form::AnswerSequence;

/// Control name for the field at zero-based `index`.
pub fn field_name(index: usize) -> String {
    (index + 1).to_string()
}

/// Reassemble submitted form values into answers ordered by field number.
///
/// Keys that are not positive integers (a submit button, a CSRF token) are
/// ignored. The numeric keys must be exactly `1..=n`; a gap means a field
/// went missing and is reported rather than silently shifting later answers
/// onto the wrong call sites.
pub fn answers_from_submission(
    fields: &HashMap<String, String>,
) -> Result<AnswerSequence, SubmissionError> {
    let numbered: BTreeMap<usize, &String> = fields
        .iter()
        .filter_map(|(key, value)| {
            key.trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .map(|n| (n, value))
        })
        .collect();

    let mut answers = Vec::with_capacity(numbered.len());
    for (expected, (position, value)) in (1..).zip(numbered) {
        if position != expected {
            return Err(SubmissionError::MissingField(expected));
        }
        answers.push(value.clone());
    }

    Ok(AnswerSequence::new(answers))
}
