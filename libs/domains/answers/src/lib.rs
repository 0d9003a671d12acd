//! Answers Domain Library
//!
//! This module provides a complete domain implementation for
//! retrieval-augmented question answering over indexed property listings:
//! embed the question, search the vector index, and generate one answer per
//! retrieved listing.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     AnswerService                     │
//! │        embed → search → one completion per match      │
//! └─────────┬──────────────────┬──────────────────┬───────┘
//!           │                  │                  │
//! ┌─────────▼────────┐ ┌───────▼─────────┐ ┌──────▼────────────┐
//! │ VectorRepository │ │EmbeddingProvider│ │CompletionProvider │
//! │     (trait)      │ │     (trait)     │ │      (trait)      │
//! └─────────┬────────┘ └───────┬─────────┘ └──────┬────────────┘
//!           │                  │                  │
//! ┌─────────▼────────┐ ┌───────▼──────────────────▼────────────┐
//! │PineconeRepository│ │            OpenAIProvider             │
//! │ (implementation) │ │   (embeddings + chat completions)     │
//! └──────────────────┘ └───────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_answers::{AnswerService, OpenAIProvider, PineconeConfig, PineconeRepository};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = PineconeRepository::connect(PineconeConfig::from_env()?).await?;
//! let openai = Arc::new(OpenAIProvider::from_env()?);
//!
//! let service = AnswerService::new(repository, openai.clone(), openai);
//! let answers = service.generate_response("강남역 근처 주거용 매물 알려줘").await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod completion;
pub mod embedding;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openai;
pub mod pinecone;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use completion::CompletionProvider;
pub use embedding::EmbeddingProvider;
pub use error::{AnswerError, AnswerResult};
pub use handlers::AnswersApiDoc;
pub use models::{
    AnswerItem, CompletionModel, CompletionRequest, EmbeddingModel, GenerateRequest,
    GenerateResponse, SearchQuery, VectorMatch,
};
pub use openai::{OpenAIConfig, OpenAIProvider};
pub use pinecone::{PineconeConfig, PineconeRepository};
pub use repository::VectorRepository;
pub use service::AnswerService;
