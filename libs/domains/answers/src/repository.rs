use async_trait::async_trait;

use crate::error::AnswerResult;
use crate::models::{SearchQuery, VectorMatch};

/// Repository trait for vector search operations
///
/// This trait abstracts the underlying vector database so the service layer
/// can be tested without a live index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorRepository: Send + Sync {
    /// Search the index for the vectors nearest to the query vector
    async fn query(&self, query: SearchQuery) -> AnswerResult<Vec<VectorMatch>>;
}
