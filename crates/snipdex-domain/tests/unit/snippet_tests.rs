//! Unit tests for stored snippet value objects

use serde_json::json;
use snipdex_domain::{ScoredPayload, SnippetPayload, SnippetRecord};

#[test]
fn test_payload_json_shape() {
    let payload = SnippetPayload::new("fn main() {}");
    let map = payload.to_json_map();

    assert_eq!(map.len(), 1);
    assert_eq!(map["code"], json!("fn main() {}"));
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"code": "fn main() {}"})
    );
}

#[test]
fn test_record_ids_are_unique() {
    let first = SnippetRecord::new_id();
    let second = SnippetRecord::new_id();

    assert_ne!(first, second);
    assert!(uuid::Uuid::parse_str(&first).is_ok());
}

#[test]
fn test_scored_payload_code_present() {
    let hit = ScoredPayload {
        payload: Some(SnippetPayload::new("let x = 1;").to_json_map()),
        score: 0.9,
    };
    assert_eq!(hit.code(), Some("let x = 1;"));
}

#[test]
fn test_scored_payload_without_payload() {
    let hit = ScoredPayload {
        payload: None,
        score: 0.5,
    };
    assert_eq!(hit.code(), None);
}

#[test]
fn test_scored_payload_without_code_field() {
    let payload = json!({"language": "rust"}).as_object().cloned();
    let hit = ScoredPayload { payload, score: 0.5 };
    assert_eq!(hit.code(), None);
}

#[test]
fn test_scored_payload_with_non_string_code() {
    let payload = json!({"code": 42}).as_object().cloned();
    let hit = ScoredPayload { payload, score: 0.5 };
    assert_eq!(hit.code(), None);
}
