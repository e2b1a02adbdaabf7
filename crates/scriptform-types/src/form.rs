//! Form domain types.
//!
//! A [`FormSpec`] is what a script looks like from the outside: an optional
//! title and description taken from its leading documentation block, plus one
//! [`InputField`] per `input(...)` call site in program order. An
//! [`AnswerSequence`] is the matching list of answers collected for it.

use serde::{Deserialize, Serialize};

/// One answer requested by a script.
///
/// `label` is the human-readable prompt with any placeholder segment removed.
/// `placeholder` is the bracketed default/example text, or empty when the
/// prompt had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
}

impl InputField {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Whether the prompt carried a default/example value.
    pub fn has_placeholder(&self) -> bool {
        !self.placeholder.is_empty()
    }
}

/// The structured description of everything a script will ask for.
///
/// `inputs` order is the order the script's input requests are discovered
/// in, which is also the order they are answered in during replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub inputs: Vec<InputField>,
}

impl FormSpec {
    /// Number of fields (and therefore answers) in the form.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Whether the script documented itself with a title or description.
    pub fn has_header(&self) -> bool {
        !self.title.is_empty() || !self.description.is_empty()
    }
}

/// Ordered answers, one per [`InputField`].
///
/// Position is the only correlation key: the i-th answer satisfies the i-th
/// input request the script makes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSequence(Vec<String>);

impl AnswerSequence {
    pub fn new(answers: Vec<String>) -> Self {
        Self(answers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for AnswerSequence {
    fn from(answers: Vec<String>) -> Self {
        Self(answers)
    }
}

impl<'a> From<Vec<&'a str>> for AnswerSequence {
    fn from(answers: Vec<&'a str>) -> Self {
        Self(answers.into_iter().map(str::to_string).collect())
    }
}

impl FromIterator<String> for AnswerSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
