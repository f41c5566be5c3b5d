//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings and the metric used to
//! compare them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Value Object: Semantic Code Embedding
///
/// Represents a vector embedding of a code snippet. A fresh embedding is
/// computed for every submit and every query; embeddings are never cached
/// or mutated after creation.
///
/// ## Business Rules
///
/// - Vector length must equal the provider's configured dimensionality
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use snipdex_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3],
///     model: "text-embedding-ada-002".to_string(),
///     dimensions: 3,
/// };
/// assert!(embedding.ensure_dimensions(3).is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding, rejecting vectors whose length differs from `expected`
    pub fn checked(vector: Vec<f32>, model: impl Into<String>, expected: usize) -> Result<Self> {
        let embedding = Self {
            dimensions: vector.len(),
            vector,
            model: model.into(),
        };
        embedding.ensure_dimensions(expected)?;
        Ok(embedding)
    }

    /// Fail with an embedding error unless the vector is non-empty and `expected` long
    pub fn ensure_dimensions(&self, expected: usize) -> Result<()> {
        if self.vector.is_empty() {
            return Err(Error::embedding(format!(
                "Model {} returned an empty embedding",
                self.model
            )));
        }
        if self.vector.len() != expected {
            return Err(Error::embedding(format!(
                "Embedding dimension mismatch: expected {expected}, got {}",
                self.vector.len()
            )));
        }
        Ok(())
    }
}

/// Distance metric of a vector collection
///
/// Snippet collections are always created with [`DistanceMetric::Cosine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Cosine similarity
    #[default]
    Cosine,
    /// Dot product
    Dot,
    /// Euclidean distance
    Euclid,
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cosine => f.write_str("cosine"),
            Self::Dot => f.write_str("dot"),
            Self::Euclid => f.write_str("euclid"),
        }
    }
}
