//! Application error type mapping to HTTP status codes and envelope format.

use axum::response::{IntoResponse, Response};
use serde_json::json;

use scriptform_types::error::{LoadError, ReplayError, SourceSyntaxError, SubmissionError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The served script does not parse.
    Syntax(SourceSyntaxError),
    /// Replaying the script failed.
    Replay(ReplayError),
    /// The served script could not be read.
    Load(LoadError),
    /// A form submission could not be turned into answers.
    Submission(SubmissionError),
    /// Malformed request.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<SourceSyntaxError> for AppError {
    fn from(e: SourceSyntaxError) -> Self {
        AppError::Syntax(e)
    }
}

impl From<ReplayError> for AppError {
    fn from(e: ReplayError) -> Self {
        match e {
            ReplayError::Syntax(e) => AppError::Syntax(e),
            other => AppError::Replay(other),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Load(e)
    }
}

impl From<SubmissionError> for AppError {
    fn from(e: SubmissionError) -> Self {
        AppError::Submission(e)
    }
}

impl AppError {
    /// Envelope error code, message, and structured details.
    pub fn parts(&self) -> (&'static str, String, Option<serde_json::Value>) {
        match self {
            AppError::Syntax(e) => (
                "SOURCE_SYNTAX_ERROR",
                e.to_string(),
                Some(json!({ "line": e.line, "column": e.column })),
            ),
            AppError::Replay(ReplayError::InsufficientInput { supplied, prompt }) => (
                "INSUFFICIENT_INPUT",
                self.to_message(),
                Some(json!({ "supplied": supplied, "prompt": prompt })),
            ),
            AppError::Replay(ReplayError::ScriptFailed { output, .. }) => (
                "SCRIPT_FAILED",
                self.to_message(),
                Some(json!({ "output": output })),
            ),
            AppError::Replay(ReplayError::Syntax(e)) => ("SOURCE_SYNTAX_ERROR", e.to_string(), None),
            AppError::Load(LoadError::NotFound(path)) => (
                "SCRIPT_NOT_FOUND",
                format!("Script '{path}' not found"),
                None,
            ),
            AppError::Load(e) => ("INTERNAL_ERROR", e.to_string(), None),
            AppError::Submission(e) => ("VALIDATION_ERROR", e.to_string(), None),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone(), None),
            AppError::Internal(msg) => ("INTERNAL_ERROR", msg.clone(), None),
        }
    }

    /// Human-readable message, as shown on the HTML page.
    pub fn to_message(&self) -> String {
        match self {
            AppError::Syntax(e) => e.to_string(),
            AppError::Replay(e) => e.to_string(),
            AppError::Load(e) => e.to_string(),
            AppError::Submission(e) => e.to_string(),
            AppError::Validation(msg) | AppError::Internal(msg) => msg.clone(),
        }
    }

    /// Output the script printed before failing, if any.
    pub fn partial_output(&self) -> &str {
        match self {
            AppError::Replay(ReplayError::ScriptFailed { output, .. }) => output,
            _ => "",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message, details) = self.parts();
        if code == "INTERNAL_ERROR" {
            tracing::error!(error = %message, "request failed");
        }
        ApiResponse::error(code, &message, details, String::new(), 0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn insufficient_input_is_unprocessable() {
        let err = AppError::from(ReplayError::InsufficientInput {
            supplied: 1,
            prompt: Some("Allowed characters: ".to_string()),
        });
        let (code, message, details) = err.parts();
        assert_eq!(code, "INSUFFICIENT_INPUT");
        assert!(message.contains("1 supplied"));
        assert_eq!(details.unwrap()["prompt"], "Allowed characters: ");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn replay_syntax_error_unwraps() {
        let err = AppError::from(ReplayError::Syntax(SourceSyntaxError::new("bad")));
        assert!(matches!(err, AppError::Syntax(_)));
        assert_eq!(err.parts().0, "SOURCE_SYNTAX_ERROR");
    }

    #[test]
    fn missing_script_is_not_found() {
        let err = AppError::from(LoadError::NotFound("gone.rhai".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn submission_gap_is_bad_request() {
        let err = AppError::from(SubmissionError::MissingField(2));
        assert_eq!(err.to_message(), "missing answer for field 2");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn script_failure_keeps_output() {
        let err = AppError::from(ReplayError::ScriptFailed {
            message: "boom".to_string(),
            output: "before\n".to_string(),
        });
        assert_eq!(err.partial_output(), "before\n");
        assert_eq!(err.parts().0, "SCRIPT_FAILED");
    }
}
