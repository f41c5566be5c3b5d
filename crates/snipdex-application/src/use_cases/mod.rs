//! Use Cases
//!
//! Application service implementations.

/// Background persistence task tracking
pub mod background;
/// Snippet submission use case
pub mod ingestion_service;
/// Similar snippet lookup use case
pub mod similarity_service;

pub use background::BackgroundPersister;
pub use ingestion_service::IngestionService;
pub use similarity_service::SimilarityService;
