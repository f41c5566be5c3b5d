//! Similarity Service Use Case
//!
//! Embeds the query snippet, asks the vector store for its nearest
//! neighbors and returns their stored source text.

use std::sync::Arc;

use snipdex_domain::constants::SIMILAR_SNIPPETS_LIMIT;
use snipdex_domain::error::Result;
use snipdex_domain::value_objects::ScoredPayload;
use tracing::debug;

use crate::ports::providers::{EmbeddingProvider, VectorStoreProvider};
use crate::ports::services::SimilarityServiceInterface;

/// Keep the `code` of each hit in rank order, skipping hits without one
fn extract_snippets(hits: Vec<ScoredPayload>) -> Vec<String> {
    hits.iter()
        .take(SIMILAR_SNIPPETS_LIMIT)
        .filter_map(|hit| hit.code().map(str::to_owned))
        .collect()
}

/// Similarity service implementation
pub struct SimilarityService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    collection: Arc<str>,
}

impl SimilarityService {
    /// Create new similarity service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        collection: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store_provider,
            collection: collection.into(),
        }
    }
}

#[async_trait::async_trait]
impl SimilarityServiceInterface for SimilarityService {
    async fn similar(&self, code: &str) -> Result<Vec<String>> {
        let query = self.embedding_provider.embed(code).await?;
        let hits = self
            .vector_store_provider
            .query(&self.collection, &query.vector, SIMILAR_SNIPPETS_LIMIT)
            .await?;

        let total = hits.len();
        let snippets = extract_snippets(hits);
        debug!(
            hits = total,
            returned = snippets.len(),
            "Similar snippets resolved"
        );
        Ok(snippets)
    }
}
