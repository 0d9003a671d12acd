use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::address::extract_address;
use crate::completion::CompletionProvider;
use crate::embedding::EmbeddingProvider;
use crate::error::{AnswerError, AnswerResult};
use crate::models::{
    AnswerItem, CompletionModel, CompletionRequest, EmbeddingModel, SearchQuery, VectorMatch,
};
use crate::repository::VectorRepository;

/// Embedding model used to vectorize questions
const EMBEDDING_MODEL: EmbeddingModel = EmbeddingModel::TextEmbeddingAda002;
/// Completion model used to generate answers
const COMPLETION_MODEL: CompletionModel = CompletionModel::Gpt4;
/// Namespace holding the indexed listings
const SEARCH_NAMESPACE: &str = "gangnam";
/// Number of listings retrieved per question
const SEARCH_TOP_K: u32 = 3;
const COMPLETION_MAX_TOKENS: u32 = 300;
const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Placeholder answer returned when the index has no matching listings
const NO_MATCH_ADDRESS: &str = "정보 없음";
const NO_MATCH_ANSWER: &str = "죄송합니다, 관련 정보를 찾을 수 없습니다.";
/// Answer recorded when the model returns an empty completion
const EMPTY_COMPLETION_FALLBACK: &str = "응답 생성 실패";

/// Service layer for retrieval-augmented answer generation
pub struct AnswerService<R: VectorRepository> {
    repository: Arc<R>,
    embeddings: Arc<dyn EmbeddingProvider>,
    completions: Arc<dyn CompletionProvider>,
}

impl<R: VectorRepository> AnswerService<R> {
    pub fn new(
        repository: R,
        embeddings: Arc<dyn EmbeddingProvider>,
        completions: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            embeddings,
            completions,
        }
    }

    /// Generate one answer per listing retrieved for the question.
    ///
    /// Any upstream failure is logged and collapsed into
    /// [`AnswerError::Generation`]; partial results are never returned.
    pub async fn generate_response(&self, question: &str) -> AnswerResult<Vec<AnswerItem>> {
        match self.answer_question(question).await {
            Ok(items) => Ok(items),
            Err(err) => {
                error!("Error generating response: {err}");
                Err(AnswerError::Generation)
            }
        }
    }

    async fn answer_question(&self, question: &str) -> AnswerResult<Vec<AnswerItem>> {
        let embedding = self.embeddings.embed(EMBEDDING_MODEL, question).await?;

        let query = SearchQuery::new(embedding, SEARCH_NAMESPACE.to_string(), SEARCH_TOP_K);
        let matches = self.repository.query(query).await?;
        debug!(count = matches.len(), "Vector search returned");

        if matches.is_empty() {
            return Ok(vec![AnswerItem {
                address: NO_MATCH_ADDRESS.to_string(),
                answer: NO_MATCH_ANSWER.to_string(),
            }]);
        }

        let mut items = Vec::with_capacity(matches.len());

        for m in &matches {
            let text = match listing_text(m) {
                Some(text) => text,
                None => {
                    warn!(match_id = %m.id, "Match carries no usable text metadata, skipping");
                    continue;
                }
            };

            let address = extract_address(text);
            let prompt = build_prompt(text, question);

            let completion = self
                .completions
                .complete(
                    COMPLETION_MODEL,
                    CompletionRequest {
                        prompt,
                        max_tokens: COMPLETION_MAX_TOKENS,
                        temperature: COMPLETION_TEMPERATURE,
                    },
                )
                .await?;

            let answer = match completion.as_deref().map(str::trim) {
                Some(content) if !content.is_empty() => content.to_string(),
                _ => EMPTY_COMPLETION_FALLBACK.to_string(),
            };

            items.push(AnswerItem { address, answer });
        }

        Ok(items)
    }
}

/// Extract the listing text from match metadata.
///
/// Returns `None` when the metadata is absent or `text` is not a non-empty
/// string.
fn listing_text(m: &VectorMatch) -> Option<&str> {
    m.metadata
        .as_ref()
        .and_then(|metadata| metadata.get("text"))
        .and_then(|text| text.as_str())
        .filter(|text| !text.is_empty())
}

/// Build the answer prompt from a listing text and the user question
fn build_prompt(text: &str, question: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("아래는 사용자 질문과 관련된 부동산 정보입니다:\n");
    prompt.push_str(text);
    prompt.push_str("\n\n사용자의 질문: ");
    prompt.push_str(question);
    prompt.push_str("\n\n위 정보를 기반으로 적절한 답변을 작성하세요.");

    prompt
}
