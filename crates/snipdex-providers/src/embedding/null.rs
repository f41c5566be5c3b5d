//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use snipdex_domain::error::Result;
use snipdex_domain::ports::providers::EmbeddingProvider;
use snipdex_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_NULL, EMBEDDING_MODEL_NULL};

/// FNV-1a, stable across processes and platforms
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}

/// Null embedding provider for testing
///
/// Hashes the character trigrams of the input into a fixed number of
/// buckets and L2-normalizes the counts. Identical texts map to identical
/// vectors and texts sharing fragments score higher than unrelated ones,
/// which is enough to exercise ranking without an embedding service.
///
/// # Example
///
/// ```rust
/// use snipdex_providers::embedding::NullEmbeddingProvider;
/// use snipdex_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a null embedding provider producing `dimensions`-long vectors
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        EMBEDDING_MODEL_NULL
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        let chars: Vec<char> = text.chars().collect();

        let mut add = |fragment: &[char]| {
            let key: String = fragment.iter().collect();
            let bucket = (fnv1a(key.as_bytes()) % self.dimensions as u64) as usize;
            vector[bucket] += 1.0;
        };
        if chars.len() < 3 {
            if !chars.is_empty() {
                add(&chars[..]);
            }
        } else {
            chars.windows(3).for_each(&mut add);
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        Embedding::checked(self.vectorize(text), EMBEDDING_MODEL_NULL, self.dimensions)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
