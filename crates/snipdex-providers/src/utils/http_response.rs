//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use std::time::Duration;

use reqwest::Response;
use snipdex_domain::error::{Error, Result};

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Builds the domain error of the calling provider from a message
pub type ErrorBuilder = fn(String) -> Error;

/// Format error message for a provider
fn provider_error(make: ErrorBuilder, provider: &str, context: &str, details: &str) -> Error {
    make(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by API providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON, reporting failures as embedding errors
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        Self::check_and_parse_with(response, provider_name, Error::embedding::<String>).await
    }

    /// Check response status and parse JSON, building errors with `make`
    pub async fn check_and_parse_with(
        response: Response,
        provider_name: &str,
        make: ErrorBuilder,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => provider_error(make, provider_name, "authentication failed", &error_text),
                429 => provider_error(make, provider_name, "rate limit exceeded", &error_text),
                500..=599 => provider_error(
                    make,
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => provider_error(
                    make,
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response.json().await.map_err(|e| {
            provider_error(make, provider_name, "response parse failed", &e.to_string())
        })
    }

    /// Map a failed `send()` to a provider error, naming timeouts explicitly
    pub fn send_error(
        error: &reqwest::Error,
        timeout: Duration,
        provider_name: &str,
        make: ErrorBuilder,
    ) -> Error {
        if error.is_timeout() {
            make(format!(
                "{provider_name} {ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}"
            ))
        } else {
            make(format!("{provider_name} HTTP request failed: {error}"))
        }
    }
}
