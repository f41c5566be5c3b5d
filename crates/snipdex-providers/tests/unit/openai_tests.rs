//! OpenAI embedding provider tests against a mock HTTP server

use std::time::Duration;

use mockito::Server;
use reqwest::Client;
use snipdex_domain::error::Error;
use snipdex_domain::ports::providers::EmbeddingProvider;
use snipdex_providers::embedding::OpenAIEmbeddingProvider;

fn provider(base_url: String, dimensions: usize) -> OpenAIEmbeddingProvider {
    OpenAIEmbeddingProvider::new(
        "test-key".to_string(),
        Some(base_url),
        "text-embedding-ada-002".to_string(),
        Duration::from_secs(5),
        Client::new(),
    )
    .with_dimensions(dimensions)
}

fn embedding_body(values: &[f32]) -> String {
    serde_json::json!({
        "object": "list",
        "data": [{"object": "embedding", "index": 0, "embedding": values}],
        "model": "text-embedding-ada-002"
    })
    .to_string()
}

#[test]
fn test_openai_provider_defaults() {
    let provider = OpenAIEmbeddingProvider::new(
        " sk-key ".to_string(),
        None,
        "text-embedding-ada-002".to_string(),
        Duration::from_secs(30),
        Client::new(),
    );

    assert_eq!(provider.provider_name(), "openai");
    assert_eq!(provider.model(), "text-embedding-ada-002");
    assert_eq!(provider.dimensions(), 1536);
    assert_eq!(provider.base_url(), "https://api.openai.com/v1");
}

#[tokio::test]
async fn test_embed_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "input": ["fn main() {}"],
            "model": "text-embedding-ada-002"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(embedding_body(&[0.1, 0.2, 0.3]))
        .create_async()
        .await;

    let result = provider(server.url(), 3)
        .embed("fn main() {}")
        .await
        .expect("embed should succeed");

    assert_eq!(result.vector, vec![0.1, 0.2, 0.3]);
    assert_eq!(result.dimensions, 3);
    assert_eq!(result.model, "text-embedding-ada-002");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_embed_dimension_mismatch_is_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(embedding_body(&[0.1, 0.2]))
        .create_async()
        .await;

    let result = provider(server.url(), 3).embed("x").await;
    match result {
        Err(Error::Embedding { message }) => assert!(message.contains("dimension mismatch")),
        other => panic!("Expected Embedding error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_embed_empty_data_is_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let result = provider(server.url(), 3).embed("x").await;
    assert!(matches!(result, Err(Error::Embedding { .. })));
}

#[tokio::test]
async fn test_embed_maps_status_codes() {
    for (status, expected) in [
        (401, "authentication failed"),
        (429, "rate limit exceeded"),
        (503, "server error (503)"),
        (400, "request failed (400)"),
    ] {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/embeddings")
            .with_status(status)
            .with_body("upstream says no")
            .create_async()
            .await;

        match provider(server.url(), 3).embed("x").await {
            Err(Error::Embedding { message }) => {
                assert!(message.contains(expected), "{message}");
                assert!(message.contains("upstream says no"));
            }
            other => panic!("Expected Embedding error for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_embed_unreachable_is_error() {
    let result = provider("http://127.0.0.1:1".to_string(), 3).embed("x").await;
    assert!(matches!(result, Err(Error::Embedding { .. })));
}
