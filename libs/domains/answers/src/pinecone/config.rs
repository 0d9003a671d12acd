use crate::error::{AnswerError, AnswerResult};

/// Pinecone connection configuration
#[derive(Debug, Clone)]
pub struct PineconeConfig {
    pub api_key: String,
    pub index_name: String,
    /// Data-plane host of the index, resolved through the control plane
    /// when not configured
    pub index_host: Option<String>,
    pub controller_url: String,
}

impl PineconeConfig {
    pub fn new(api_key: String, index_name: String) -> Self {
        Self {
            api_key,
            index_name,
            index_host: None,
            controller_url: "https://api.pinecone.io".to_string(),
        }
    }

    pub fn with_index_host(mut self, index_host: String) -> Self {
        self.index_host = Some(index_host);
        self
    }

    pub fn with_controller_url(mut self, controller_url: String) -> Self {
        self.controller_url = controller_url;
        self
    }

    /// Reads `PINECONE_API_KEY` (required), `PINECONE_INDEX`,
    /// `PINECONE_INDEX_HOST` and `PINECONE_CONTROLLER_URL` (optional).
    pub fn from_env() -> AnswerResult<Self> {
        let api_key = std::env::var("PINECONE_API_KEY")
            .map_err(|_| AnswerError::Config("PINECONE_API_KEY not set".to_string()))?;

        let index_name = std::env::var("PINECONE_INDEX").unwrap_or_else(|_| "seoul".to_string());

        let index_host = std::env::var("PINECONE_INDEX_HOST").ok();

        let controller_url = std::env::var("PINECONE_CONTROLLER_URL")
            .unwrap_or_else(|_| "https://api.pinecone.io".to_string());

        Ok(Self {
            api_key,
            index_name,
            index_host,
            controller_url,
        })
    }
}
