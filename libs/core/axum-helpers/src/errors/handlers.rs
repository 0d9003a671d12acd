use super::AppError;
use axum::response::{IntoResponse, Response};

/// Fallback handler producing the standard 404 error body.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}
