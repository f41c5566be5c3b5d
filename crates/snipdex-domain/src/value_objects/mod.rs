//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of a code snippet |
//! | [`DistanceMetric`] | Similarity metric of a vector collection |
//! | [`SnippetPayload`] | Payload stored next to a snippet vector |
//! | [`SnippetRecord`] | Unit persisted in the vector store |
//! | [`ScoredPayload`] | Raw nearest-neighbor hit returned by a store |
//! | [`AnalysisResult`] | Refactoring suggestion from the analysis service |

/// Analysis value objects
pub mod analysis;
/// Semantic embedding value objects
pub mod embedding;
/// Stored snippet value objects
pub mod snippet;

// Re-export commonly used value objects
pub use analysis::AnalysisResult;
pub use embedding::{DistanceMetric, Embedding};
pub use snippet::{ScoredPayload, SnippetPayload, SnippetRecord};
