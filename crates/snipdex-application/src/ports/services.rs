//! Application Service Port Interfaces
//!
//! Contracts the request dispatcher programs against. Each one maps to a
//! single inbound operation.

use async_trait::async_trait;
use snipdex_domain::error::Result;

// ============================================================================
// Ingestion Service Interface
// ============================================================================

/// Snippet Submission Interface
///
/// Indexes a snippet in the background and returns the analysis service's
/// refactoring suggestion.
#[async_trait]
pub trait IngestionServiceInterface: Send + Sync {
    /// Submit one snippet
    ///
    /// The outcome depends only on the analysis call. Indexing runs on its
    /// own task and never changes the returned value.
    async fn submit(&self, code: &str) -> Result<String>;
}

// ============================================================================
// Similarity Service Interface
// ============================================================================

/// Similar Snippet Lookup Interface
#[async_trait]
pub trait SimilarityServiceInterface: Send + Sync {
    /// Previously submitted snippets nearest to `code`, best match first
    async fn similar(&self, code: &str) -> Result<Vec<String>>;
}
