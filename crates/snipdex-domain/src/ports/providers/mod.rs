//! External Provider Ports
//!
//! Ports for the three external services the orchestrators depend on.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Maps a code snippet to a fixed-length vector |
//! | VectorStoreProvider | Upsert-by-id and nearest-neighbor search with payloads |
//! | AnalysisProvider | Maps a code snippet to a refactoring suggestion |
//!
//! Every implementation is a shared, connection-pooled handle that holds no
//! request-local mutable state, so it can be invoked concurrently without
//! client-side locking.

/// Analysis provider port
pub mod analysis;
/// Embedding provider port
pub mod embedding;
/// Vector store provider port
pub mod vector_store;

// Re-export provider ports for convenience
pub use analysis::AnalysisProvider;
pub use embedding::EmbeddingProvider;
pub use vector_store::VectorStoreProvider;
