use async_trait::async_trait;

use crate::error::AnswerResult;
use crate::models::{CompletionModel, CompletionRequest};

/// Trait for chat completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the given request.
    ///
    /// Returns `None` when the provider answers without any content.
    async fn complete(
        &self,
        model: CompletionModel,
        request: CompletionRequest,
    ) -> AnswerResult<Option<String>>;
}
