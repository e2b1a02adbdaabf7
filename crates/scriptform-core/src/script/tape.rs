//! Answer tape: the cursor a replay consumes answers from.
//!
//! Runtimes hand every `input(...)` call to [`AnswerTape::pop_answer`]. The
//! tape remembers the first call that found it empty, so a script that
//! catches the resulting runtime error still ends in
//! [`ReplayError::InsufficientInput`] once the run is over.

use scriptform_types::error::ReplayError;
use scriptform_types::form::AnswerSequence;

/// Details of the first input request that could not be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub supplied: usize,
    pub prompt: Option<String>,
}

impl From<Shortfall> for ReplayError {
    fn from(shortfall: Shortfall) -> Self {
        ReplayError::InsufficientInput {
            supplied: shortfall.supplied,
            prompt: shortfall.prompt,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnswerTape {
    answers: Vec<String>,
    cursor: usize,
    shortfall: Option<Shortfall>,
}

impl AnswerTape {
    pub fn new(answers: &AnswerSequence) -> Self {
        Self {
            answers: answers.iter().map(str::to_string).collect(),
            cursor: 0,
            shortfall: None,
        }
    }

    /// Take the next answer for an input request.
    ///
    /// Returns `None` once the tape is exhausted and records the shortfall
    /// (only the first one; later calls keep returning `None`).
    pub fn pop_answer(&mut self, prompt: Option<&str>) -> Option<String> {
        match self.answers.get(self.cursor) {
            Some(answer) => {
                self.cursor += 1;
                tracing::debug!(position = self.cursor, prompt, "answered input request");
                Some(answer.clone())
            }
            None => {
                if self.shortfall.is_none() {
                    tracing::debug!(supplied = self.answers.len(), prompt, "answers exhausted");
                    self.shortfall = Some(Shortfall {
                        supplied: self.answers.len(),
                        prompt: prompt.map(str::to_string),
                    });
                }
                None
            }
        }
    }

    pub fn supplied(&self) -> usize {
        self.answers.len()
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn shortfall(&self) -> Option<&Shortfall> {
        self.shortfall.as_ref()
    }

    /// Fail with [`ReplayError::InsufficientInput`] if the tape ever ran dry.
    pub fn check(&self) -> Result<(), ReplayError> {
        match &self.shortfall {
            Some(shortfall) => Err(shortfall.clone().into()),
            None => Ok(()),
        }
    }
}
