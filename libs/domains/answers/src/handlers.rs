//! REST handlers for answer generation

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use utoipa::OpenApi;

use axum_helpers::errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse};

use crate::error::{AnswerError, AnswerResult};
use crate::models::{AnswerItem, GenerateRequest, GenerateResponse};
use crate::repository::VectorRepository;
use crate::service::AnswerService;

/// OpenAPI documentation for the answers API
#[derive(OpenApi)]
#[openapi(
    paths(generate_response),
    components(
        schemas(GenerateRequest, GenerateResponse, AnswerItem),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "answers", description = "Question answering over indexed property listings")
    )
)]
pub struct AnswersApiDoc;

/// Create router for answer generation endpoints
pub fn router<R: VectorRepository + 'static>(service: AnswerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/generate-response", post(generate_response))
        .with_state(shared_service)
}

/// Generate answers for a question from the indexed listings
#[utoipa::path(
    post,
    path = "/generate-response",
    tag = "answers",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated answers, one per retrieved listing", body = GenerateResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn generate_response<R: VectorRepository>(
    State(service): State<Arc<AnswerService<R>>>,
    Json(request): Json<GenerateRequest>,
) -> AnswerResult<Json<GenerateResponse>> {
    let question = match request.question {
        Some(question) if !question.is_empty() => question,
        _ => return Err(AnswerError::Validation("Question is required".to_string())),
    };

    let response = service.generate_response(&question).await?;
    Ok(Json(GenerateResponse { response }))
}
