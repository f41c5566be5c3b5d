//! # snipdex - Provider Implementations
//!
//! Adapters for the three external collaborators of the orchestrator. Each
//! provider implements a port (trait) defined in `snipdex-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Null |
//! | Vector Store | `VectorStoreProvider` | Qdrant, InMemory |
//! | Analysis | `AnalysisProvider` | Http |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! snipdex-providers = { version = "0.1", default-features = false, features = ["vectorstore-memory"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use snipdex_providers::embedding::OpenAIEmbeddingProvider;
//! use snipdex_providers::vector_store::QdrantVectorStoreProvider;
//! use snipdex_providers::analysis::HttpAnalysisProvider;
//! ```

// Re-export snipdex-domain types commonly used with providers
pub use snipdex_domain::error::{Error, Result};
pub use snipdex_domain::ports::providers::{
    AnalysisProvider, EmbeddingProvider, VectorStoreProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration shared by API-based providers
pub mod http;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` trait for embedding APIs.
pub mod embedding;

/// Vector store provider implementations
///
/// Implements `VectorStoreProvider` trait for vector storage backends.
pub mod vector_store;

/// Analysis provider implementations
///
/// Implements `AnalysisProvider` trait for the refactoring service.
pub mod analysis;
