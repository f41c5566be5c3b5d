use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Semantic Embedding Interface
///
/// Defines the contract for services that transform a code snippet into a
/// semantic embedding. Implementations make a single attempt per call; retry
/// policy belongs to callers.
///
/// # Errors
///
/// Every failure (transport error, timeout, malformed or empty response,
/// dimension mismatch) is reported as [`crate::error::Error::Embedding`].
///
/// # Example
///
/// ```ignore
/// use snipdex_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("fn main() { println!(\"Hello\"); }").await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Compute the embedding of a single text
    ///
    /// The returned vector always has exactly [`Self::dimensions`] elements.
    async fn embed(&self, text: &str) -> Result<Embedding>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "openai", "null")
    fn provider_name(&self) -> &str;
}
