use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for answer generation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Question to answer, in free text
    #[serde(default)]
    pub question: Option<String>,
}

/// One generated answer for a retrieved listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerItem {
    /// Address extracted from the listing text
    #[serde(rename = "주소")]
    pub address: String,
    /// Model-generated answer for the listing
    #[serde(rename = "gpt응답")]
    pub answer: String,
}

/// Response body for answer generation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub response: Vec<AnswerItem>,
}

/// Vector search query parameters
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub vector: Vec<f32>,
    pub namespace: String,
    pub top_k: u32,
    pub include_metadata: bool,
    pub include_values: bool,
}

impl SearchQuery {
    pub fn new(vector: Vec<f32>, namespace: String, top_k: u32) -> Self {
        Self {
            vector,
            namespace,
            top_k,
            include_metadata: true,
            include_values: false,
        }
    }
}

/// A single match returned by vector search
#[derive(Debug, Clone)]
pub struct VectorMatch {
    pub id: String,
    pub score: f32,
    pub metadata: Option<serde_json::Value>,
}

/// Chat completion request parameters
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Embedding model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbeddingModel {
    /// OpenAI text-embedding-3-small (1536 dimensions)
    TextEmbedding3Small,
    /// OpenAI text-embedding-3-large (3072 dimensions)
    TextEmbedding3Large,
    /// OpenAI text-embedding-ada-002 (1536 dimensions, legacy)
    #[default]
    TextEmbeddingAda002,
}

impl EmbeddingModel {
    pub fn model_name(&self) -> &str {
        match self {
            EmbeddingModel::TextEmbedding3Small => "text-embedding-3-small",
            EmbeddingModel::TextEmbedding3Large => "text-embedding-3-large",
            EmbeddingModel::TextEmbeddingAda002 => "text-embedding-ada-002",
        }
    }

    pub fn dimension(&self) -> u32 {
        match self {
            EmbeddingModel::TextEmbedding3Small => 1536,
            EmbeddingModel::TextEmbedding3Large => 3072,
            EmbeddingModel::TextEmbeddingAda002 => 1536,
        }
    }
}

/// Chat completion model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionModel {
    /// OpenAI gpt-4
    #[default]
    Gpt4,
    /// OpenAI gpt-4o
    Gpt4o,
    /// OpenAI gpt-3.5-turbo
    Gpt35Turbo,
}

impl CompletionModel {
    pub fn model_name(&self) -> &str {
        match self {
            CompletionModel::Gpt4 => "gpt-4",
            CompletionModel::Gpt4o => "gpt-4o",
            CompletionModel::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_item_serializes_with_korean_keys() {
        let item = AnswerItem {
            address: "서울 강남구 역삼동 1-1".to_string(),
            answer: "가능합니다.".to_string(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "주소": "서울 강남구 역삼동 1-1",
                "gpt응답": "가능합니다."
            })
        );
    }

    #[test]
    fn test_generate_request_question_defaults_to_none() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.question.is_none());
    }

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::new(vec![0.5, 0.25], "gangnam".to_string(), 3);

        assert_eq!(query.top_k, 3);
        assert!(query.include_metadata);
        assert!(!query.include_values);
    }
}
