//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! Supports text-embedding-ada-002, text-embedding-3-small and
//! text-embedding-3-large.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use snipdex_domain::error::{Error, Result};
use snipdex_domain::ports::providers::EmbeddingProvider;
use snipdex_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, OPENAI_DEFAULT_BASE_URL,
};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Native dimensionality of a known OpenAI embedding model
fn model_dimensions(model: &str) -> usize {
    match model {
        "text-embedding-3-small" => EMBEDDING_DIMENSION_OPENAI_SMALL,
        "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
        "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
        _ => EMBEDDING_DIMENSION_OPENAI_ADA,
    }
}

/// OpenAI embedding provider
///
/// Implements the `EmbeddingProvider` domain port using OpenAI's embedding API.
/// Receives HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use snipdex_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = OpenAIEmbeddingProvider::new(
///     "sk-your-api-key".to_string(),
///     None,
///     "text-embedding-ada-002".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-ada-002")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_key = constructor::validate_api_key(&api_key);
        let base_url = constructor::validate_url(base_url);
        let dimensions = model_dimensions(&model);

        Self {
            api_key,
            base_url,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Request vectors of `dimensions` elements instead of the model's native size
    ///
    /// Only the text-embedding-3 family honours a reduced size; for other
    /// models a mismatch surfaces as an embedding error on every call.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, text: &str) -> Result<serde_json::Value> {
        let mut payload = serde_json::json!({
            "input": [text],
            "model": self.model,
            "encoding_format": "float"
        });
        if self.dimensions != model_dimensions(&self.model) {
            payload["dimensions"] = serde_json::json!(self.dimensions);
        }

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::send_error(
                    &e,
                    self.timeout,
                    "OpenAI",
                    Error::embedding::<String>,
                )
            })?;

        HttpResponseUtils::check_and_parse(response, "OpenAI").await
    }

    /// Parse the first embedding vector from response data
    fn parse_embedding(&self, response_data: &serde_json::Value) -> Result<Embedding> {
        let item = response_data["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing data array"))?
            .first()
            .ok_or_else(|| Error::embedding("Invalid response format: empty data array"))?;

        let vector = item["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid embedding format: missing embedding"))?
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| Error::embedding("Invalid embedding format: non-numeric value"))
            })
            .collect::<Result<Vec<f32>>>()?;

        Embedding::checked(vector, self.model.clone(), self.dimensions)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let response_data = self.fetch_embeddings(text).await?;
        self.parse_embedding(&response_data)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
