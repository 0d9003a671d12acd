//! API routes module

use axum::Router;
use domain_answers::{handlers, AnswerService, VectorRepository};

/// Create all API routes
pub fn routes<R: VectorRepository + 'static>(service: AnswerService<R>) -> Router {
    Router::new().nest("/openai", handlers::router(service))
}
