//! Ingestion Service Use Case
//!
//! Handles snippet submission: indexes the snippet on a detached task and,
//! independently, asks the analysis service for a refactoring suggestion.

use std::sync::Arc;

use snipdex_domain::error::Result;
use snipdex_domain::value_objects::{SnippetPayload, SnippetRecord};
use tracing::{debug, info, warn};

use crate::ports::providers::{AnalysisProvider, EmbeddingProvider, VectorStoreProvider};
use crate::ports::services::IngestionServiceInterface;
use crate::use_cases::background::BackgroundPersister;

/// Ingestion service implementation
///
/// Indexing is best-effort and at-most-once: a failed embed or upsert is
/// logged and the snippet is simply never searchable.
pub struct IngestionService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    analysis_provider: Arc<dyn AnalysisProvider>,
    collection: Arc<str>,
    persister: Arc<BackgroundPersister>,
}

impl IngestionService {
    /// Create new ingestion service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        analysis_provider: Arc<dyn AnalysisProvider>,
        collection: impl Into<Arc<str>>,
        persister: Arc<BackgroundPersister>,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store_provider,
            analysis_provider,
            collection: collection.into(),
            persister,
        }
    }

    /// Persister running this service's indexing tasks
    pub fn persister(&self) -> &Arc<BackgroundPersister> {
        &self.persister
    }

    /// Wait until all indexing tasks spawned so far have finished
    pub async fn settle(&self) {
        self.persister.settle().await;
    }

    /// Launch the embed-and-store task for one submission
    fn spawn_indexing(&self, submission_id: String, code: String) {
        let embedding = Arc::clone(&self.embedding_provider);
        let store = Arc::clone(&self.vector_store_provider);
        let collection = Arc::clone(&self.collection);
        let task_id = submission_id.clone();

        self.persister.spawn(submission_id, async move {
            let vector = match embedding.embed(&code).await {
                Ok(vector) => vector,
                Err(e) => {
                    warn!(
                        submission_id = %task_id,
                        stage = "embed",
                        error = %e,
                        "Snippet not indexed"
                    );
                    return;
                }
            };

            let record = SnippetRecord {
                id: task_id,
                vector,
                payload: SnippetPayload::new(code),
            };
            match store.upsert(&collection, &record).await {
                Ok(()) => info!(
                    submission_id = %record.id,
                    collection = %collection,
                    "Snippet indexed"
                ),
                Err(e) => warn!(
                    submission_id = %record.id,
                    stage = "upsert",
                    error = %e,
                    "Snippet not indexed"
                ),
            }
        });
    }
}

#[async_trait::async_trait]
impl IngestionServiceInterface for IngestionService {
    async fn submit(&self, code: &str) -> Result<String> {
        let submission_id = SnippetRecord::new_id();
        debug!(submission_id = %submission_id, bytes = code.len(), "Snippet submitted");

        self.spawn_indexing(submission_id.clone(), code.to_owned());

        match self.analysis_provider.analyze(code).await {
            Ok(result) => Ok(result.refactored_code),
            Err(e) => {
                warn!(
                    submission_id = %submission_id,
                    origin = ?e.analysis_origin(),
                    error = %e,
                    "Analysis failed"
                );
                Err(e)
            }
        }
    }
}
