use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Answer generation domain errors
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector search error: {0}")]
    Search(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to generate response")]
    Generation,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AnswerResult<T> = Result<T, AnswerError>;

/// Convert AnswerError to AppError for standardized HTTP error responses.
///
/// Upstream failure detail stays in the logs; the client only sees the
/// generic failure message.
impl From<AnswerError> for AppError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::Validation(msg) => AppError::BadRequest(msg),
            AnswerError::Embedding(_)
            | AnswerError::Search(_)
            | AnswerError::Completion(_)
            | AnswerError::Config(_)
            | AnswerError::Generation
            | AnswerError::Internal(_) => {
                AppError::InternalServerError("Failed to generate response".to_string())
            }
        }
    }
}

impl IntoResponse for AnswerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request_with_message() {
        let err = AnswerError::Validation("Question is required".to_string());

        match AppError::from(err) {
            AppError::BadRequest(msg) => assert_eq!(msg, "Question is required"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_upstream_errors_map_to_generic_internal_error() {
        let errors = [
            AnswerError::Embedding("timeout".to_string()),
            AnswerError::Search("index unavailable".to_string()),
            AnswerError::Completion("rate limited".to_string()),
            AnswerError::Config("OPENAI_API_KEY not set".to_string()),
            AnswerError::Generation,
            AnswerError::Internal("poisoned state".to_string()),
        ];

        for err in errors {
            match AppError::from(err) {
                AppError::InternalServerError(msg) => {
                    assert_eq!(msg, "Failed to generate response")
                }
                other => panic!("expected InternalServerError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_generation_error_display() {
        assert_eq!(
            AnswerError::Generation.to_string(),
            "Failed to generate response"
        );
    }
}
