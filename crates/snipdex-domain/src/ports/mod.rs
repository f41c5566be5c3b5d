//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the orchestration core and the
//! external collaborators it drives.
//!
//! ## Architecture
//!
//! Ports define the contracts that external layers must implement.
//! This follows the Dependency Inversion Principle:
//! - High-level modules (domain, application) define interfaces
//! - Low-level modules (providers, infrastructure) implement them

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{AnalysisProvider, EmbeddingProvider, VectorStoreProvider};
