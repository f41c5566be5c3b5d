//! Application bootstrap
//!
//! One-time start-up: build the shared HTTP client, create the providers,
//! provision the snippet collection and wire the orchestrators. Everything
//! produced here is read-only afterwards and shared across requests.

use std::sync::Arc;

use snipdex_application::ports::providers::{
    AnalysisProvider, EmbeddingProvider, VectorStoreProvider,
};
use snipdex_application::ports::services::{IngestionServiceInterface, SimilarityServiceInterface};
use snipdex_application::use_cases::{BackgroundPersister, IngestionService, SimilarityService};
use snipdex_domain::error::{Error, Result};
use snipdex_domain::value_objects::DistanceMetric;
use snipdex_providers::http::HttpClientConfig;
use tracing::info;

use crate::config::AppConfig;
use crate::di::factory::{
    AnalysisProviderFactory, EmbeddingProviderFactory, VectorStoreProviderFactory,
};

/// Wired application state handed to the dispatcher
#[derive(Clone)]
pub struct AppContext {
    /// Configuration the context was built from
    pub config: Arc<AppConfig>,
    /// Snippet submission
    pub ingestion: Arc<dyn IngestionServiceInterface>,
    /// Similar snippet lookup
    pub similarity: Arc<dyn SimilarityServiceInterface>,
    /// Tracker of background indexing tasks, drained at shutdown
    pub persister: Arc<BackgroundPersister>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("collection", &self.config.providers.vector_store.collection)
            .field("in_flight", &self.persister.in_flight())
            .finish_non_exhaustive()
    }
}

/// Build the application from configuration
///
/// Fails when a provider cannot be created, the configured collection
/// dimensionality disagrees with the embedding provider, or the collection
/// cannot be provisioned.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let http_client = HttpClientConfig::default().build_client()?;
    let providers = &config.providers;

    let embedding =
        EmbeddingProviderFactory::create(&providers.embedding, Some(http_client.clone()))?;
    let vector_store = VectorStoreProviderFactory::create(&providers.vector_store)?;
    let analysis = AnalysisProviderFactory::create(&providers.analysis, Some(http_client))?;

    init_app_with_providers(config, embedding, vector_store, analysis).await
}

/// Build the application around already constructed providers
pub async fn init_app_with_providers(
    config: AppConfig,
    embedding: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    analysis: Arc<dyn AnalysisProvider>,
) -> Result<AppContext> {
    let store_config = &config.providers.vector_store;
    let dimensions = embedding.dimensions();
    if let Some(configured) = store_config.dimensions
        && configured != dimensions
    {
        return Err(Error::Configuration {
            message: format!(
                "Collection '{}' is configured for {configured} dimensions but embedding provider '{}' produces {dimensions}",
                store_config.collection,
                embedding.provider_name()
            ),
            source: None,
        });
    }

    let collection = store_config.collection.clone();
    vector_store
        .ensure_collection(&collection, dimensions, DistanceMetric::Cosine)
        .await?;

    info!(
        embedding = embedding.provider_name(),
        vector_store = vector_store.provider_name(),
        analysis = analysis.provider_name(),
        collection = %collection,
        dimensions,
        "Providers ready"
    );

    let persister = Arc::new(BackgroundPersister::new(config.ingestion.persist_timeout()));
    let ingestion = IngestionService::new(
        Arc::clone(&embedding),
        Arc::clone(&vector_store),
        analysis,
        collection.as_str(),
        Arc::clone(&persister),
    );
    let similarity = SimilarityService::new(embedding, vector_store, collection.as_str());

    Ok(AppContext {
        config: Arc::new(config),
        ingestion: Arc::new(ingestion),
        similarity: Arc::new(similarity),
        persister,
    })
}
