//! JSON form API.
//!
//! GET  /api/v1/form    - The form spec of the served script.
//! POST /api/v1/replay  - Replay the served script with `{"answers": [...]}`.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use scriptform_types::form::{AnswerSequence, FormSpec};
use scriptform_types::replay::ExecutionResult;

use crate::http::error::AppError;
use crate::http::handlers::{load_form, replay_blocking};
use crate::http::response::ApiResponse;
use crate::state::ServeState;

/// Request body for replaying the served script.
#[derive(Debug, Deserialize)]
pub struct ReplayRequest {
    #[serde(default)]
    pub answers: AnswerSequence,
}

/// GET /api/v1/form - Describe the form implied by the served script.
pub async fn get_form(
    State(state): State<ServeState>,
) -> Result<Json<ApiResponse<FormSpec>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let (_, spec) = load_form(&state).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(
        ApiResponse::success(spec, request_id, elapsed)
            .with_link("self", "/api/v1/form")
            .with_link("replay", "/api/v1/replay"),
    ))
}

/// POST /api/v1/replay - Run the served script with the given answers.
pub async fn replay(
    State(state): State<ServeState>,
    body: Result<Json<ReplayRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ExecutionResult>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let Json(request) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    let source = state.current_source().await?;
    let result = replay_blocking(&state, source, request.answers).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(
        ApiResponse::success(result, request_id, elapsed).with_link("form", "/api/v1/form"),
    ))
}
