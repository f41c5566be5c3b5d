//! Provider factories

pub mod providers;

pub use providers::{
    AnalysisProviderFactory, EmbeddingProviderFactory, VectorStoreProviderFactory,
    embedding_providers, vector_store_providers,
};
