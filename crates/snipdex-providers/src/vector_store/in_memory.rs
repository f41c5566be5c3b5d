//! In-memory vector store provider implementation
//!
//! Provides an in-memory vector storage backend for development and testing.
//! Data is not persisted and will be lost on restart.

use async_trait::async_trait;
use dashmap::DashMap;
use snipdex_domain::error::{Error, Result};
use snipdex_domain::ports::providers::VectorStoreProvider;
use snipdex_domain::value_objects::{DistanceMetric, ScoredPayload, SnippetRecord};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use tracing::debug;

/// Records of one collection, keyed by id
struct Collection {
    dimensions: usize,
    records: DashMap<String, SnippetRecord>,
}

/// In-memory vector store provider
///
/// Stores vectors and payloads in memory using concurrent hash maps.
/// Scores are raw cosine similarity, the metric snippet collections use.
pub struct InMemoryVectorStoreProvider {
    collections: Arc<DashMap<String, Arc<Collection>>>,
}

impl InMemoryVectorStoreProvider {
    /// Create a new in-memory vector store provider
    pub fn new() -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
        }
    }

    /// Number of records in `collection`, `None` when it does not exist
    pub fn count(&self, collection: &str) -> Option<usize> {
        self.collections.get(collection).map(|c| c.records.len())
    }

    fn collection(&self, name: &str) -> Result<Arc<Collection>> {
        self.collections
            .get(name)
            .map(|c| Arc::clone(c.value()))
            .ok_or_else(|| Error::vector_db(format!("Collection '{name}' not found")))
    }
}

impl Default for InMemoryVectorStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    async fn collection_exists(&self, name: &str) -> Result<bool> {
        Ok(self.collections.contains_key(name))
    }

    async fn ensure_collection(
        &self,
        name: &str,
        dimensions: usize,
        metric: DistanceMetric,
    ) -> Result<()> {
        if metric != DistanceMetric::Cosine {
            return Err(Error::vector_db(format!(
                "In-memory store only supports cosine distance, got {metric}"
            )));
        }
        self.collections
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(collection = name, dimensions, "Created in-memory collection");
                Arc::new(Collection {
                    dimensions,
                    records: DashMap::new(),
                })
            });
        Ok(())
    }

    async fn upsert(&self, collection: &str, record: &SnippetRecord) -> Result<()> {
        let coll = self.collection(collection)?;
        if record.vector.vector.len() != coll.dimensions {
            return Err(Error::vector_db(format!(
                "Wrong vector dimension for collection '{collection}': expected {}, got {}",
                coll.dimensions,
                record.vector.vector.len()
            )));
        }
        coll.records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn query(
        &self,
        collection: &str,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredPayload>> {
        let coll = self.collection(collection)?;
        if vector.len() != coll.dimensions {
            return Err(Error::vector_db(format!(
                "Wrong query dimension for collection '{collection}': expected {}, got {}",
                coll.dimensions,
                vector.len()
            )));
        }
        if limit == 0 {
            return Ok(Vec::new());
        }

        // Precompute query norm once (avoids redundant calculation per vector)
        let query_norm = compute_norm(vector);

        // Use min-heap for top-k selection: O(n log k) instead of O(n log n)
        let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(limit + 1);

        for entry in coll.records.iter() {
            let score = cosine_similarity_with_norm(vector, &entry.vector.vector, query_norm);

            if heap.len() < limit {
                heap.push(ScoredItem {
                    score,
                    id: entry.key().clone(),
                });
            } else if let Some(min) = heap.peek() {
                // Only add if better than current minimum
                if score > min.score {
                    heap.pop();
                    heap.push(ScoredItem {
                        score,
                        id: entry.key().clone(),
                    });
                }
            }
        }

        // Extract results in descending score order
        let mut items: Vec<_> = heap.into_vec();
        items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let hits = items
            .into_iter()
            .filter_map(|item| {
                coll.records.get(&item.id).map(|record| ScoredPayload {
                    payload: Some(record.payload.to_json_map()),
                    score: item.score,
                })
            })
            .collect();

        Ok(hits)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

/// Scored item for heap-based top-k selection
///
/// Uses reverse ordering so BinaryHeap acts as a min-heap (smallest scores at top).
struct ScoredItem {
    score: f32,
    id: String,
}

impl PartialEq for ScoredItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: smallest at top
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed query norm
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
