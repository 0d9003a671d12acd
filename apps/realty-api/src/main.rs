//! Realty API - retrieval-augmented question answering over property listings

use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_answers::{AnswerService, OpenAIProvider, PineconeRepository};
use std::sync::Arc;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Connecting to Pinecone index '{}'",
        config.pinecone.index_name
    );

    let repository = PineconeRepository::connect(config.pinecone.clone()).await?;
    let openai = Arc::new(OpenAIProvider::new(config.openai.clone()));

    // One provider serves both embeddings and completions
    let service = AnswerService::new(repository, openai.clone(), openai);

    // Build REST router
    let api_routes = api::routes(service);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(config.app.clone()));

    info!("Starting Realty API on port {}", config.server.port);

    // Run server with graceful shutdown
    create_app(app, &config.server).await?;

    info!("Realty API shutdown complete");
    Ok(())
}
