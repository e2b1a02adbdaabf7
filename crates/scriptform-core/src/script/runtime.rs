//! Replay execution trait.

use scriptform_types::error::ReplayError;
use scriptform_types::form::AnswerSequence;
use scriptform_types::replay::ExecutionResult;

/// Trait for running a script with its input requests answered from a
/// pre-collected [`AnswerSequence`].
///
/// Every call to the script's `input` function must return the next unused
/// answer. Running out of answers is a hard failure
/// ([`ReplayError::InsufficientInput`]): implementations never block waiting
/// for more and never invent a default. Output capture must be scoped to the
/// run so concurrent replays do not interleave.
pub trait ScriptRuntime: Send + Sync {
    fn replay(
        &self,
        source: &str,
        answers: &AnswerSequence,
    ) -> Result<ExecutionResult, ReplayError>;
}
