//! Provider configuration types
//!
//! One section per external collaborator. `provider` names select the
//! implementation in [`crate::di::factory`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use snipdex_domain::constants::DEFAULT_COLLECTION_NAME;

use crate::constants::{
    DEFAULT_ANALYSIS_BASE_URL, DEFAULT_EMBEDDING_DIMENSIONS, DEFAULT_EMBEDDING_PROVIDER,
    DEFAULT_PROVIDER_TIMEOUT_SECS, DEFAULT_QDRANT_ADDRESS, DEFAULT_VECTOR_STORE_PROVIDER,
};

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name (`openai` or `null`)
    pub provider: String,
    /// Model name
    pub model: String,
    /// Base URL override for the API
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Vector length produced by the provider
    pub dimensions: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: snipdex_providers::constants::OPENAI_DEFAULT_MODEL.to_string(),
            base_url: None,
            api_key: None,
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl EmbeddingConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Vector store provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Provider name (`qdrant` or `memory`)
    pub provider: String,
    /// Server address (gRPC for Qdrant)
    pub address: String,
    /// API key
    pub api_key: Option<String>,
    /// Collection holding the snippets
    pub collection: String,
    /// Collection dimensionality; must match the embedding provider when set
    pub dimensions: Option<usize>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_VECTOR_STORE_PROVIDER.to_string(),
            address: DEFAULT_QDRANT_ADDRESS.to_string(),
            api_key: None,
            collection: DEFAULT_COLLECTION_NAME.to_string(),
            dimensions: None,
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl VectorStoreConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Analysis service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Base URL of the refactoring service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ANALYSIS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl AnalysisConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Provider configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Embedding provider configuration
    pub embedding: EmbeddingConfig,
    /// Vector store provider configuration
    pub vector_store: VectorStoreConfig,
    /// Analysis service configuration
    pub analysis: AnalysisConfig,
}
