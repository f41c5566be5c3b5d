//! Embedding Provider Implementations
//!
//! Converts a code snippet into a dense vector for similarity search.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Offline | Complete |
//! | OpenAIEmbeddingProvider | Cloud | Complete |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `NullEmbeddingProvider`, deterministic and offline
//! - **Production**: `OpenAIEmbeddingProvider`

pub mod helpers;
pub mod null;
#[cfg(feature = "embedding-openai")]
pub mod openai;

// Re-export for convenience
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
