//! Form service: build a form from a script, replay a script with answers.
//!
//! Stateless by construction -- every call re-derives everything from the
//! source text it is given, so edits to a script show up on the next call.

use scriptform_types::error::{ReplayError, SourceSyntaxError};
use scriptform_types::form::{AnswerSequence, FormSpec};
use scriptform_types::replay::ExecutionResult;

use crate::form::builder::assemble_form;
use crate::script::runtime::ScriptRuntime;
use crate::script::scanner::ScriptScanner;

/// Service composing a scanner and a runtime for one script language.
///
/// Generic over the script ports to keep scriptform-core independent of
/// scriptform-infra.
pub struct FormService<S: ScriptScanner, R: ScriptRuntime> {
    scanner: S,
    runtime: R,
}

impl<S: ScriptScanner, R: ScriptRuntime> FormService<S, R> {
    pub fn new(scanner: S, runtime: R) -> Self {
        Self { scanner, runtime }
    }

    /// Scan a script and describe the form it implies.
    pub fn build_form(&self, source: &str) -> Result<FormSpec, SourceSyntaxError> {
        let _span = tracing::info_span!("build_form", source_len = source.len()).entered();

        let scanned = self.scanner.scan(source)?;
        let spec = assemble_form(&scanned);

        tracing::info!(
            fields = spec.len(),
            title = %spec.title,
            "built form from script"
        );
        Ok(spec)
    }

    /// Run a script with its input requests answered positionally.
    pub fn replay(
        &self,
        source: &str,
        answers: &AnswerSequence,
    ) -> Result<ExecutionResult, ReplayError> {
        let _span = tracing::info_span!("replay", answers = answers.len()).entered();

        match self.runtime.replay(source, answers) {
            Ok(result) => {
                tracing::info!(
                    consumed = result.answers_consumed,
                    unused = result.unused_answers(),
                    output_bytes = result.output.len(),
                    elapsed_ms = result.duration.as_millis() as u64,
                    "replay finished"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "replay failed");
                Err(e)
            }
        }
    }
}
