//! Transport layer types
//!
//! JSON bodies exchanged with the front end.

use serde::{Deserialize, Serialize};

/// Body of both `POST` endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeRequest {
    /// Snippet source text
    pub code: String,
}

/// Successful submission
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitCodeResponse {
    /// Refactoring suggestion from the analysis service
    pub refactored_code: String,
}

/// Successful similarity lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarCodeResponse {
    /// Stored snippets, best match first
    pub snippets: Vec<String>,
}

/// Failure body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness probe body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    pub status: String,
}
