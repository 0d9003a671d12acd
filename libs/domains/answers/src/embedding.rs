use async_trait::async_trait;

use crate::error::AnswerResult;
use crate::models::EmbeddingModel;

/// Turns text into embedding vectors.
///
/// Implementations may call any embedding API (OpenAI, local models, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text
    async fn embed(&self, model: EmbeddingModel, text: &str) -> AnswerResult<Vec<f32>>;
}
