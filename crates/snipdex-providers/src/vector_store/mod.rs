//! Vector Store Provider Implementations
//!
//! Provides storage backends for snippet embeddings.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryVectorStoreProvider | Local | In-memory storage (non-persistent) |
//! | QdrantVectorStoreProvider | Remote | Qdrant over gRPC |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `InMemoryVectorStoreProvider`
//! - **Production**: Use `QdrantVectorStoreProvider`

#[cfg(feature = "vectorstore-memory")]
pub mod in_memory;
#[cfg(feature = "vectorstore-qdrant")]
pub mod qdrant;

// Re-export for convenience
#[cfg(feature = "vectorstore-memory")]
pub use in_memory::InMemoryVectorStoreProvider;
#[cfg(feature = "vectorstore-qdrant")]
pub use qdrant::QdrantVectorStoreProvider;
