//! Provider factory tests

use reqwest::Client;
use snipdex_domain::error::Error;
use snipdex_infrastructure::config::{AnalysisConfig, EmbeddingConfig, VectorStoreConfig};
use snipdex_infrastructure::di::factory::{
    AnalysisProviderFactory, EmbeddingProviderFactory, VectorStoreProviderFactory,
};

fn embedding_config(provider: &str, api_key: Option<&str>) -> EmbeddingConfig {
    EmbeddingConfig {
        provider: provider.to_string(),
        api_key: api_key.map(str::to_string),
        ..EmbeddingConfig::default()
    }
}

fn store_config(provider: &str) -> VectorStoreConfig {
    VectorStoreConfig {
        provider: provider.to_string(),
        ..VectorStoreConfig::default()
    }
}

#[test]
fn test_null_embedding_uses_configured_dimensions() {
    let config = EmbeddingConfig {
        dimensions: 128,
        ..embedding_config("null", None)
    };
    let provider = EmbeddingProviderFactory::create(&config, None).unwrap();

    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 128);
}

#[test]
fn test_openai_embedding_requires_api_key() {
    let missing = EmbeddingProviderFactory::create(&embedding_config("openai", None), None);
    let blank = EmbeddingProviderFactory::create(&embedding_config("OpenAI", Some(" ")), None);

    assert!(matches!(missing, Err(Error::Configuration { .. })));
    assert!(matches!(blank, Err(Error::Configuration { .. })));
}

#[test]
fn test_openai_embedding_created_with_key() {
    let config = EmbeddingConfig {
        model: "text-embedding-3-small".to_string(),
        dimensions: 512,
        ..embedding_config("openai", Some("sk-test"))
    };
    let provider = EmbeddingProviderFactory::create(&config, Some(Client::new())).unwrap();

    assert_eq!(provider.provider_name(), "openai");
    assert_eq!(provider.dimensions(), 512);
}

#[test]
fn test_unknown_embedding_provider() {
    let result = EmbeddingProviderFactory::create(&embedding_config("gemini", None), None);

    match result {
        Err(Error::Configuration { message, .. }) => {
            assert_eq!(message, "Unknown embedding provider: gemini");
        }
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("unknown provider accepted"),
    }
}

#[test]
fn test_vector_store_selection() {
    for name in ["memory", "in_memory", "Memory"] {
        let provider = VectorStoreProviderFactory::create(&store_config(name)).unwrap();
        assert_eq!(provider.provider_name(), "memory");
    }

    let qdrant = VectorStoreProviderFactory::create(&store_config("qdrant")).unwrap();
    assert_eq!(qdrant.provider_name(), "qdrant");

    assert!(matches!(
        VectorStoreProviderFactory::create(&store_config("milvus")),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_analysis_provider() {
    let provider = AnalysisProviderFactory::create(&AnalysisConfig::default(), None).unwrap();
    assert_eq!(provider.provider_name(), "http");

    let blank = AnalysisConfig {
        base_url: String::new(),
        ..AnalysisConfig::default()
    };
    assert!(matches!(
        AnalysisProviderFactory::create(&blank, None),
        Err(Error::Configuration { .. })
    ));
}
