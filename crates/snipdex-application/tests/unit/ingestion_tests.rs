//! Tests for the submit flow
//!
//! The analysis answer alone decides the outcome of a submission; indexing
//! runs on the background persister and is observed through `settle()`.

use std::sync::Arc;
use std::time::Duration;

use snipdex_application::ports::services::{
    IngestionServiceInterface, SimilarityServiceInterface,
};
use snipdex_application::use_cases::{IngestionService, SimilarityService};
use snipdex_domain::error::{AnalysisFailure, Error};

use crate::mocks::{
    COLLECTION, FailingEmbedding, FailingVectorStore, MockAnalysis, PendingEmbedding,
    PendingVectorStore, embedding, memory_store, persister,
};

const SUBMITTED: &str = "fn add(a,b){a+b}";
const REFACTORED: &str = "fn add(a: i32, b: i32) -> i32 { a + b }";

#[tokio::test]
async fn test_submit_returns_refactored_code() {
    let store = memory_store().await;
    let service = IngestionService::new(
        embedding(),
        store,
        Arc::new(MockAnalysis::Suggests(REFACTORED.to_string())),
        COLLECTION,
        persister(),
    );

    let result = service.submit(SUBMITTED).await.expect("submit should succeed");
    assert_eq!(result, REFACTORED);
}

#[tokio::test]
async fn test_submit_succeeds_during_store_outage() {
    let store = Arc::new(FailingVectorStore::default());
    let service = IngestionService::new(
        embedding(),
        store.clone(),
        Arc::new(MockAnalysis::Suggests(REFACTORED.to_string())),
        COLLECTION,
        persister(),
    );

    let result = service.submit(SUBMITTED).await;
    assert_eq!(result.expect("store outage must not fail submit"), REFACTORED);

    service.settle().await;
    assert_eq!(store.upsert_attempts(), 1);
}

#[tokio::test]
async fn test_submit_succeeds_during_embedding_outage() {
    let store = memory_store().await;
    let service = IngestionService::new(
        Arc::new(FailingEmbedding),
        store.clone(),
        Arc::new(MockAnalysis::Suggests(REFACTORED.to_string())),
        COLLECTION,
        persister(),
    );

    assert!(service.submit(SUBMITTED).await.is_ok());
    service.settle().await;
    assert_eq!(store.count(COLLECTION), Some(0));
}

#[tokio::test]
async fn test_structured_analysis_error_fails_submit_verbatim() {
    let store = memory_store().await;
    let service = IngestionService::new(
        embedding(),
        store,
        Arc::new(MockAnalysis::Rejects("unexpected token at 1:9".to_string())),
        COLLECTION,
        persister(),
    );

    let error = service
        .submit(SUBMITTED)
        .await
        .expect_err("analysis error should fail submit");

    assert_eq!(error.to_string(), "unexpected token at 1:9");
    assert_eq!(error.analysis_origin(), Some(AnalysisFailure::Service));
}

#[tokio::test]
async fn test_unreachable_analysis_still_indexes_snippet() {
    let store = memory_store().await;
    let service = IngestionService::new(
        embedding(),
        store.clone(),
        Arc::new(MockAnalysis::Unreachable),
        COLLECTION,
        persister(),
    );

    let error = service.submit(SUBMITTED).await.expect_err("should fail");
    assert!(matches!(
        error,
        Error::Analysis {
            origin: AnalysisFailure::Transport,
            ..
        }
    ));

    service.settle().await;
    let similar = SimilarityService::new(embedding(), store, COLLECTION);
    let snippets = similar.similar(SUBMITTED).await.expect("query should succeed");
    assert_eq!(snippets, vec![SUBMITTED.to_string()]);
}

#[tokio::test]
async fn test_identical_submissions_are_not_deduplicated() {
    let store = memory_store().await;
    let service = IngestionService::new(
        embedding(),
        store.clone(),
        Arc::new(MockAnalysis::Suggests(REFACTORED.to_string())),
        COLLECTION,
        persister(),
    );

    service.submit(SUBMITTED).await.expect("first submit");
    service.submit(SUBMITTED).await.expect("second submit");
    service.settle().await;

    assert_eq!(store.count(COLLECTION), Some(2));
}

#[tokio::test]
async fn test_concurrent_submissions_all_indexed() {
    let store = memory_store().await;
    let service = Arc::new(IngestionService::new(
        embedding(),
        store.clone(),
        Arc::new(MockAnalysis::Suggests(REFACTORED.to_string())),
        COLLECTION,
        persister(),
    ));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.submit(&format!("let v{i} = {i};")).await })
        })
        .collect();
    for handle in handles {
        handle.await.expect("task should join").expect("submit should succeed");
    }

    service.settle().await;
    assert_eq!(store.count(COLLECTION), Some(10));
}

#[tokio::test]
async fn test_submit_does_not_wait_for_stuck_embedding() {
    let persister = persister();
    let service = IngestionService::new(
        Arc::new(PendingEmbedding),
        memory_store().await,
        Arc::new(MockAnalysis::Suggests(REFACTORED.to_string())),
        COLLECTION,
        Arc::clone(&persister),
    );

    let result = tokio::time::timeout(Duration::from_millis(200), service.submit(SUBMITTED))
        .await
        .expect("submit must return while indexing is still running");

    assert_eq!(result.expect("submit should succeed"), REFACTORED);
    assert_eq!(persister.in_flight(), 1);
}

#[tokio::test]
async fn test_submit_does_not_wait_for_stuck_store_write() {
    let persister = persister();
    let service = IngestionService::new(
        embedding(),
        Arc::new(PendingVectorStore),
        Arc::new(MockAnalysis::Suggests(REFACTORED.to_string())),
        COLLECTION,
        Arc::clone(&persister),
    );

    let result = tokio::time::timeout(Duration::from_millis(200), service.submit(SUBMITTED))
        .await
        .expect("submit must return while the store write is pending");

    assert_eq!(result.expect("submit should succeed"), REFACTORED);
    assert_eq!(persister.in_flight(), 1);
}
