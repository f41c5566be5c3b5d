//! Hand-written collaborators for orchestration tests
//!
//! Real offline providers (`NullEmbeddingProvider`,
//! `InMemoryVectorStoreProvider`) cover the happy paths; these doubles cover
//! outages and malformed store contents.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use snipdex_application::ports::providers::{
    AnalysisProvider, EmbeddingProvider, VectorStoreProvider,
};
use snipdex_application::use_cases::BackgroundPersister;
use snipdex_domain::error::{Error, Result};
use snipdex_domain::value_objects::{
    AnalysisResult, DistanceMetric, Embedding, ScoredPayload, SnippetRecord,
};
use snipdex_providers::embedding::NullEmbeddingProvider;
use snipdex_providers::vector_store::InMemoryVectorStoreProvider;

pub const COLLECTION: &str = "test-snippets";
pub const DIMENSIONS: usize = 256;

pub fn embedding() -> Arc<dyn EmbeddingProvider> {
    Arc::new(NullEmbeddingProvider::with_dimensions(DIMENSIONS))
}

pub async fn memory_store() -> Arc<InMemoryVectorStoreProvider> {
    let store = Arc::new(InMemoryVectorStoreProvider::new());
    store
        .ensure_collection(COLLECTION, DIMENSIONS, DistanceMetric::Cosine)
        .await
        .expect("collection should be created");
    store
}

pub fn persister() -> Arc<BackgroundPersister> {
    Arc::new(BackgroundPersister::new(Duration::from_secs(5)))
}

/// Analysis double with a scripted answer
pub enum MockAnalysis {
    Suggests(String),
    Rejects(String),
    Unreachable,
}

#[async_trait]
impl AnalysisProvider for MockAnalysis {
    async fn analyze(&self, _code: &str) -> Result<AnalysisResult> {
        match self {
            Self::Suggests(code) => Ok(AnalysisResult::new(code.clone())),
            Self::Rejects(message) => Err(Error::analysis_service(message.clone())),
            Self::Unreachable => Err(Error::analysis_transport(
                "error sending request: connection refused",
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

/// Embedding provider that is always down
pub struct FailingEmbedding;

#[async_trait]
impl EmbeddingProvider for FailingEmbedding {
    async fn embed(&self, _text: &str) -> Result<Embedding> {
        Err(Error::embedding("embedding service unavailable"))
    }

    fn dimensions(&self) -> usize {
        DIMENSIONS
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Vector store that is down, counting the calls it received
#[derive(Default)]
pub struct FailingVectorStore {
    pub upserts: AtomicUsize,
    pub queries: AtomicUsize,
}

impl FailingVectorStore {
    pub fn upsert_attempts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VectorStoreProvider for FailingVectorStore {
    async fn collection_exists(&self, _name: &str) -> Result<bool> {
        Err(Error::vector_db("connection refused"))
    }

    async fn ensure_collection(
        &self,
        _name: &str,
        _dimensions: usize,
        _metric: DistanceMetric,
    ) -> Result<()> {
        Err(Error::vector_db("connection refused"))
    }

    async fn upsert(&self, _collection: &str, _record: &SnippetRecord) -> Result<()> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        Err(Error::vector_db("connection refused"))
    }

    async fn query(
        &self,
        _collection: &str,
        _vector: &[f32],
        _limit: usize,
    ) -> Result<Vec<ScoredPayload>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Err(Error::vector_db("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Vector store answering every query with fixed hits
pub struct ScriptedVectorStore {
    pub hits: Vec<ScoredPayload>,
}

#[async_trait]
impl VectorStoreProvider for ScriptedVectorStore {
    async fn collection_exists(&self, _name: &str) -> Result<bool> {
        Ok(true)
    }

    async fn ensure_collection(
        &self,
        _name: &str,
        _dimensions: usize,
        _metric: DistanceMetric,
    ) -> Result<()> {
        Ok(())
    }

    async fn upsert(&self, _collection: &str, _record: &SnippetRecord) -> Result<()> {
        Ok(())
    }

    async fn query(
        &self,
        _collection: &str,
        _vector: &[f32],
        _limit: usize,
    ) -> Result<Vec<ScoredPayload>> {
        Ok(self.hits.clone())
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// Embedding provider whose calls never complete
pub struct PendingEmbedding;

#[async_trait]
impl EmbeddingProvider for PendingEmbedding {
    async fn embed(&self, _text: &str) -> Result<Embedding> {
        std::future::pending().await
    }

    fn dimensions(&self) -> usize {
        DIMENSIONS
    }

    fn provider_name(&self) -> &str {
        "pending"
    }
}

/// Vector store whose writes never complete
pub struct PendingVectorStore;

#[async_trait]
impl VectorStoreProvider for PendingVectorStore {
    async fn collection_exists(&self, _name: &str) -> Result<bool> {
        Ok(true)
    }

    async fn ensure_collection(
        &self,
        _name: &str,
        _dimensions: usize,
        _metric: DistanceMetric,
    ) -> Result<()> {
        Ok(())
    }

    async fn upsert(&self, _collection: &str, _record: &SnippetRecord) -> Result<()> {
        std::future::pending().await
    }

    async fn query(
        &self,
        _collection: &str,
        _vector: &[f32],
        _limit: usize,
    ) -> Result<Vec<ScoredPayload>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "pending"
    }
}
