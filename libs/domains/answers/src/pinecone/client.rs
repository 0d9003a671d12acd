use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::PineconeConfig;
use crate::error::{AnswerError, AnswerResult};
use crate::models::{SearchQuery, VectorMatch};
use crate::repository::VectorRepository;

/// Pinecone-backed implementation of [`VectorRepository`]
pub struct PineconeRepository {
    client: Client,
    api_key: String,
    query_url: String,
}

impl PineconeRepository {
    /// Connect to the configured Pinecone index.
    ///
    /// Uses the configured index host when present, otherwise resolves the
    /// host through the control plane once at startup.
    pub async fn connect(config: PineconeConfig) -> AnswerResult<Self> {
        let client = Client::new();

        let host = match &config.index_host {
            Some(host) => host.clone(),
            None => describe_index_host(&client, &config).await?,
        };

        let host = host.trim_end_matches('/');
        let query_url = if host.starts_with("http") {
            format!("{}/query", host)
        } else {
            format!("https://{}/query", host)
        };

        info!(
            "Pinecone index '{}' resolved to {}",
            config.index_name, query_url
        );

        Ok(Self {
            client,
            api_key: config.api_key,
            query_url,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    namespace: String,
    vector: Vec<f32>,
    top_k: u32,
    include_metadata: bool,
    include_values: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct IndexDescription {
    host: String,
}

/// Resolve the data-plane host of an index via the control plane
async fn describe_index_host(client: &Client, config: &PineconeConfig) -> AnswerResult<String> {
    let response = client
        .get(format!(
            "{}/indexes/{}",
            config.controller_url, config.index_name
        ))
        .header("Api-Key", &config.api_key)
        .send()
        .await
        .map_err(|e| AnswerError::Search(format!("HTTP request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(AnswerError::Search(format!(
            "Pinecone API error ({}): {}",
            status, error_text
        )));
    }

    let description: IndexDescription = response
        .json()
        .await
        .map_err(|e| AnswerError::Search(format!("Failed to parse response: {}", e)))?;

    Ok(description.host)
}

#[async_trait]
impl VectorRepository for PineconeRepository {
    async fn query(&self, query: SearchQuery) -> AnswerResult<Vec<VectorMatch>> {
        let request = QueryRequest {
            namespace: query.namespace,
            vector: query.vector,
            top_k: query.top_k,
            include_metadata: query.include_metadata,
            include_values: query.include_values,
        };

        let response = self
            .client
            .post(&self.query_url)
            .header("Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AnswerError::Search(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnswerError::Search(format!(
                "Pinecone API error ({}): {}",
                status, error_text
            )));
        }

        let query_response: QueryResponse = response
            .json()
            .await
            .map_err(|e| AnswerError::Search(format!("Failed to parse response: {}", e)))?;

        Ok(query_response
            .matches
            .into_iter()
            .map(|m| VectorMatch {
                id: m.id,
                score: m.score,
                metadata: m.metadata,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_request_uses_camel_case_wire_format() {
        let request = QueryRequest {
            namespace: "gangnam".to_string(),
            vector: vec![0.5, 0.25],
            top_k: 3,
            include_metadata: true,
            include_values: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "namespace": "gangnam",
                "vector": [0.5, 0.25],
                "topK": 3,
                "includeMetadata": true,
                "includeValues": false
            })
        );
    }

    #[test]
    fn test_query_response_without_matches_parses_empty() {
        let response: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn test_query_match_metadata_is_optional() {
        let json = r#"{"matches": [{"id": "listing-1", "score": 0.5}]}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0].id, "listing-1");
        assert!(response.matches[0].metadata.is_none());
    }

    #[test]
    fn test_query_match_carries_text_metadata() {
        let json = r#"{
            "matches": [
                {
                    "id": "listing-2",
                    "score": 0.75,
                    "metadata": {"text": "주소:서울 강남구 용도:주거"}
                }
            ]
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();

        let metadata = response.matches[0].metadata.as_ref().unwrap();
        assert_eq!(
            metadata.get("text").and_then(|text| text.as_str()),
            Some("주소:서울 강남구 용도:주거")
        );
    }

    #[test]
    fn test_index_description_parses_host() {
        let json = r#"{"name": "seoul", "host": "seoul-abc123.svc.pinecone.io"}"#;
        let description: IndexDescription = serde_json::from_str(json).unwrap();

        assert_eq!(description.host, "seoul-abc123.svc.pinecone.io");
    }
}
