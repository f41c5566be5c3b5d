//! # snipdex Domain Layer
//!
//! Core types and contracts of the snippet indexing and similarity-search
//! orchestrator. This crate has no knowledge of HTTP, gRPC or configuration;
//! it only defines what the orchestrators work with.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Embeddings, snippet records, store hits, analysis results |
//! | [`ports`] | Provider traits for the embedding, vector store and analysis services |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain constants (top-K, payload field names) |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use error::{AnalysisFailure, Error, Result};
pub use ports::providers::{AnalysisProvider, EmbeddingProvider, VectorStoreProvider};
pub use value_objects::{
    AnalysisResult, DistanceMetric, Embedding, ScoredPayload, SnippetPayload, SnippetRecord,
};
