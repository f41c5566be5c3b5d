//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **providers** - External service providers, re-exported from the domain
//! - **services.rs** - Application service interfaces (ingestion, similarity)

/// External service provider ports
pub mod providers {
    pub use snipdex_domain::ports::providers::*;
}
/// Application service interfaces
pub mod services;

pub use providers::{AnalysisProvider, EmbeddingProvider, VectorStoreProvider};
pub use services::{IngestionServiceInterface, SimilarityServiceInterface};
