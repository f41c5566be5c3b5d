use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{DistanceMetric, ScoredPayload, SnippetRecord};

/// Vector Storage Interface
///
/// Defines the contract for vector stores that persist snippet embeddings
/// and answer nearest-neighbor queries. Operations are collection-scoped;
/// the collection name and dimensionality are fixed at bootstrap.
///
/// # Errors
///
/// Connection failures and rejected writes or queries are reported as
/// [`crate::error::Error::VectorDb`].
///
/// # Example
///
/// ```ignore
/// use snipdex_domain::ports::providers::VectorStoreProvider;
/// use snipdex_domain::value_objects::DistanceMetric;
///
/// provider.ensure_collection("code-snippets", 1536, DistanceMetric::Cosine).await?;
/// provider.upsert("code-snippets", &record).await?;
///
/// for hit in provider.query("code-snippets", &query_vec, 5).await? {
///     println!("{:?} (score: {})", hit.code(), hit.score);
/// }
/// ```
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Check if a collection exists
    async fn collection_exists(&self, name: &str) -> Result<bool>;

    /// Create the collection unless it already exists
    ///
    /// Idempotent. Invoked once at process start, never per request.
    async fn ensure_collection(
        &self,
        name: &str,
        dimensions: usize,
        metric: DistanceMetric,
    ) -> Result<()>;

    /// Insert or replace the record addressed by `record.id`
    ///
    /// Returns only after the store acknowledged the write as applied, so a
    /// successful return means the record is visible to subsequent queries.
    async fn upsert(&self, collection: &str, record: &SnippetRecord) -> Result<()>;

    /// Find the records nearest to `vector`
    ///
    /// Returns at most `limit` hits ordered by descending score. An empty
    /// collection yields an empty vector, not an error.
    async fn query(
        &self,
        collection: &str,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredPayload>>;

    /// Get the name/identifier of this vector store provider
    fn provider_name(&self) -> &str;
}
