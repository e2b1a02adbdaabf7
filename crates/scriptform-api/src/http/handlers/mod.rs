//! HTTP request handlers.

pub mod form;
pub mod page;

use std::sync::Arc;

use scriptform_types::form::{AnswerSequence, FormSpec};
use scriptform_types::replay::ExecutionResult;

use crate::http::error::AppError;
use crate::state::ServeState;

/// Re-read the served script and build its form.
pub(crate) async fn load_form(state: &ServeState) -> Result<(String, FormSpec), AppError> {
    let source = state.current_source().await?;
    let spec = state.app.form_service.build_form(&source)?;
    Ok((source, spec))
}

/// Replay on a blocking thread; Rhai engines are not `Send`.
pub(crate) async fn replay_blocking(
    state: &ServeState,
    source: String,
    answers: AnswerSequence,
) -> Result<ExecutionResult, AppError> {
    let service = Arc::clone(&state.app.form_service);
    let result = tokio::task::spawn_blocking(move || service.replay(&source, &answers))
        .await
        .map_err(|e| AppError::Internal(format!("Replay task failed: {e}")))??;
    Ok(result)
}
