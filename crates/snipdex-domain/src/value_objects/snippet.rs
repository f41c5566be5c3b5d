//! Stored Snippet Value Objects
//!
//! The record written to the vector store for each submission and the raw
//! hits a store returns for a similarity query.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::PAYLOAD_FIELD_CODE;
use crate::value_objects::Embedding;

/// Payload stored alongside a snippet vector
///
/// Serializes to `{"code": "<source text>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnippetPayload {
    /// The submitted source text, stored verbatim
    pub code: String,
}

impl SnippetPayload {
    /// Create a payload for the given source text
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Payload as a JSON object, the shape vector stores persist
    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            PAYLOAD_FIELD_CODE.to_string(),
            Value::String(self.code.clone()),
        );
        map
    }
}

/// Value Object: Persisted Snippet
///
/// The unit written to the vector store. The id is generated at submit time
/// and only exists so the store can address the record; it carries no
/// relation to the snippet content, so identical submissions produce
/// distinct records.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetRecord {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    /// Embedding of the snippet
    pub vector: Embedding,
    /// Stored payload
    pub payload: SnippetPayload,
}

impl SnippetRecord {
    /// Generate a fresh record identifier
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Raw nearest-neighbor hit returned by a vector store
///
/// The payload is kept untyped: legacy or partial records may lack it or
/// may lack the `code` field, and callers decide how to treat them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPayload {
    /// Payload attached to the stored vector, if any
    pub payload: Option<Map<String, Value>>,
    /// Similarity score reported by the store (higher is closer)
    pub score: f32,
}

impl ScoredPayload {
    /// The stored `code` string, if present and a string
    pub fn code(&self) -> Option<&str> {
        self.payload
            .as_ref()?
            .get(PAYLOAD_FIELD_CODE)
            .and_then(Value::as_str)
    }
}
