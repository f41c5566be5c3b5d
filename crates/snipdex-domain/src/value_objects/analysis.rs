//! Analysis Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Refactoring Suggestion
///
/// Successful outcome of analyzing one snippet. Failures are reported as
/// [`crate::error::Error::Analysis`]. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Refactored source text suggested by the analysis service
    pub refactored_code: String,
}

impl AnalysisResult {
    /// Wrap a refactoring suggestion
    pub fn new(refactored_code: impl Into<String>) -> Self {
        Self {
            refactored_code: refactored_code.into(),
        }
    }
}
