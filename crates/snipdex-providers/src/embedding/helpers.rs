//! Common helpers for embedding providers
//!
//! Shared functionality and patterns used across embedding provider
//! implementations.

/// Common constructor patterns used by embedding providers
pub mod constructor {
    /// Template for validating and normalizing API keys
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Template for validating and normalizing URLs
    ///
    /// Trims whitespace and a trailing slash so paths can be appended.
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }
}
