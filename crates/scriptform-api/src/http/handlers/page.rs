//! HTML form page.
//!
//! GET  /  - the rendered form
//! POST /  - replay with the submitted answers and show the output

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use scriptform_core::form::naming::answers_from_submission;

use crate::http::error::AppError;
use crate::http::handlers::{load_form, replay_blocking};
use crate::http::response::status_for_code;
use crate::render::{render_error_page, render_page, Outcome};
use crate::state::ServeState;

/// GET / - Render the served script as a form.
pub async fn show_form(State(state): State<ServeState>) -> Response {
    match load_form(&state).await {
        Ok((_, spec)) => Html(render_page(&spec, None, None)).into_response(),
        Err(err) => error_page(&err),
    }
}

/// POST / - Reassemble the submitted fields into answers, replay, and
/// re-render the form with the captured output (or the error) below it.
pub async fn submit_form(
    State(state): State<ServeState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let (source, spec) = match load_form(&state).await {
        Ok(loaded) => loaded,
        Err(err) => return error_page(&err),
    };

    let answers = match answers_from_submission(&fields) {
        Ok(answers) => answers,
        Err(e) => {
            let message = AppError::from(e).to_message();
            let outcome = Outcome::Failure {
                message: &message,
                output: "",
            };
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(&spec, None, Some(outcome))),
            )
                .into_response();
        }
    };

    match replay_blocking(&state, source, answers.clone()).await {
        Ok(result) => Html(render_page(
            &spec,
            Some(&answers),
            Some(Outcome::Output(&result.output)),
        ))
        .into_response(),
        Err(err) => {
            let message = err.to_message();
            let outcome = Outcome::Failure {
                message: &message,
                output: err.partial_output(),
            };
            (
                status_for_code(err.parts().0),
                Html(render_page(&spec, Some(&answers), Some(outcome))),
            )
                .into_response()
        }
    }
}

fn error_page(err: &AppError) -> Response {
    let (code, message, _) = err.parts();
    (status_for_code(code), Html(render_error_page(&message))).into_response()
}
