//! Provider Factory
//!
//! Creates embedding, vector store and analysis providers from
//! configuration. All implementations come from `snipdex-providers`;
//! this module only selects and wires them.

use std::sync::Arc;

use reqwest::Client;
use snipdex_application::ports::providers::{
    AnalysisProvider, EmbeddingProvider, VectorStoreProvider,
};
use snipdex_domain::error::{Error, Result};
use snipdex_providers::analysis::HttpAnalysisProvider;
use snipdex_providers::embedding::{NullEmbeddingProvider, OpenAIEmbeddingProvider};
use snipdex_providers::http::HttpClientConfig;
use snipdex_providers::vector_store::{InMemoryVectorStoreProvider, QdrantVectorStoreProvider};

use crate::config::{AnalysisConfig, EmbeddingConfig, VectorStoreConfig};

/// Known embedding provider names
pub mod embedding_providers {
    pub const OPENAI: &str = "openai";
    pub const NULL: &str = "null";

    /// Every accepted name
    pub const ALL: &[&str] = &[OPENAI, NULL];
}

/// Known vector store provider names
pub mod vector_store_providers {
    pub const QDRANT: &str = "qdrant";
    pub const MEMORY: &str = "memory";
    pub const IN_MEMORY: &str = "in_memory";

    /// Every accepted name
    pub const ALL: &[&str] = &[QDRANT, MEMORY, IN_MEMORY];
}

fn unknown(kind: &str, name: &str) -> Error {
    Error::Configuration {
        message: format!("Unknown {kind} provider: {name}"),
        source: None,
    }
}

/// Factory for creating embedding providers
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create an embedding provider based on configuration
    ///
    /// The `http_client` parameter is optional. If not provided, a default
    /// client will be created for providers that need HTTP access.
    pub fn create(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        match config.provider.to_lowercase().as_str() {
            embedding_providers::NULL => Ok(Arc::new(NullEmbeddingProvider::with_dimensions(
                config.dimensions,
            ))),
            embedding_providers::OPENAI => Self::create_openai(config, http_client),
            _ => Err(unknown("embedding", &config.provider)),
        }
    }

    fn create_openai(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let client = require_http_client(http_client)?;
        let api_key = Self::require_api_key(config, "OpenAI")?;
        Ok(Arc::new(
            OpenAIEmbeddingProvider::new(
                api_key,
                config.base_url.clone(),
                config.model.clone(),
                config.timeout(),
                client,
            )
            .with_dimensions(config.dimensions),
        ))
    }

    fn require_api_key(config: &EmbeddingConfig, provider: &str) -> Result<String> {
        config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Configuration {
                message: format!("API key required for {provider} provider"),
                source: None,
            })
    }
}

/// Factory for creating vector store providers
pub struct VectorStoreProviderFactory;

impl VectorStoreProviderFactory {
    /// Create a vector store provider based on configuration
    ///
    /// Qdrant connects lazily, so an unreachable server is only noticed by
    /// the first call (collection provisioning at bootstrap).
    pub fn create(config: &VectorStoreConfig) -> Result<Arc<dyn VectorStoreProvider>> {
        match config.provider.to_lowercase().as_str() {
            vector_store_providers::QDRANT => Ok(Arc::new(QdrantVectorStoreProvider::new(
                &config.address,
                config.api_key.clone(),
                config.timeout(),
            )?)),
            vector_store_providers::MEMORY | vector_store_providers::IN_MEMORY => {
                Ok(Arc::new(InMemoryVectorStoreProvider::new()))
            }
            _ => Err(unknown("vector store", &config.provider)),
        }
    }
}

/// Factory for the analysis service client
pub struct AnalysisProviderFactory;

impl AnalysisProviderFactory {
    /// Create the HTTP analysis provider
    pub fn create(
        config: &AnalysisConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn AnalysisProvider>> {
        if config.base_url.trim().is_empty() {
            return Err(Error::Configuration {
                message: "Analysis service base URL cannot be empty".to_string(),
                source: None,
            });
        }
        let client = require_http_client(http_client)?;
        Ok(Arc::new(HttpAnalysisProvider::new(
            &config.base_url,
            config.timeout(),
            client,
        )))
    }
}

fn require_http_client(client: Option<Client>) -> Result<Client> {
    client.map_or_else(|| HttpClientConfig::default().build_client(), Ok)
}
