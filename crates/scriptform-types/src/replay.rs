//! Replay result types.

use std::time::Duration;

use serde::Serialize;

/// The outcome of replaying a script against an [`AnswerSequence`].
///
/// [`AnswerSequence`]: crate::form::AnswerSequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Everything the script printed, one line per `print` call.
    pub output: String,
    /// How many answers the caller supplied.
    pub answers_supplied: usize,
    /// How many answers the script actually asked for.
    pub answers_consumed: usize,
    /// Wall-clock duration of the run.
    #[serde(serialize_with = "serialize_duration_ms", rename = "duration_ms")]
    pub duration: Duration,
}

impl ExecutionResult {
    /// Answers supplied but never requested by the script.
    pub fn unused_answers(&self) -> usize {
        self.answers_supplied.saturating_sub(self.answers_consumed)
    }
}

fn serialize_duration_ms<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}
