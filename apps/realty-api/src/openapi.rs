//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Realty API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Realty API",
        version = "0.1.0",
        description = "Question answering over indexed Gangnam property listings",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/openai", api = domain_answers::AnswersApiDoc)
    ),
    tags(
        (name = "answers", description = "Answer generation endpoints")
    )
)]
pub struct ApiDoc;
