//! HTTP Analysis Provider
//!
//! Client for the refactoring service: `POST {base_url}/analyze` with
//! `{"code": ...}`, answered by `{"refactored_code": ..., "error": ...}`.
//! A non-empty `error` is a failure whatever the HTTP status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use snipdex_domain::error::{Error, Result};
use snipdex_domain::ports::providers::AnalysisProvider;
use snipdex_domain::value_objects::AnalysisResult;

use crate::constants::{ANALYSIS_ENDPOINT_PATH, CONTENT_TYPE_JSON};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

const PROVIDER_NAME: &str = "Analysis service";

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    code: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    refactored_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AnalyzeResponse {
    /// Service-reported failure, if any
    fn failure(&mut self) -> Option<String> {
        self.error.take().filter(|e| !e.is_empty())
    }
}

/// HTTP analysis provider
///
/// Receives the shared HTTP client via constructor injection.
pub struct HttpAnalysisProvider {
    endpoint: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpAnalysisProvider {
    /// Create a client for the analysis service at `base_url`
    pub fn new(base_url: &str, timeout: Duration, http_client: Client) -> Self {
        let base = constructor::validate_url(Some(base_url.to_string())).unwrap_or_default();
        Self {
            endpoint: format!("{base}{ANALYSIS_ENDPOINT_PATH}"),
            timeout,
            http_client,
        }
    }

    /// Full URL of the analysis endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisProvider for HttpAnalysisProvider {
    async fn analyze(&self, code: &str) -> Result<AnalysisResult> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&AnalyzeRequest { code })
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::send_error(
                    &e,
                    self.timeout,
                    PROVIDER_NAME,
                    Error::analysis_transport::<String>,
                )
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::analysis_transport(format!("{PROVIDER_NAME} response read failed: {e}"))
        })?;

        match serde_json::from_str::<AnalyzeResponse>(&body) {
            Ok(mut answer) => match answer.failure() {
                Some(message) => {
                    debug!(status = status.as_u16(), "Analysis service reported an error");
                    Err(Error::analysis_service(message))
                }
                None if status.is_success() => Ok(AnalysisResult::new(
                    answer.refactored_code.unwrap_or_default(),
                )),
                None => Err(Error::analysis_transport(format!(
                    "{PROVIDER_NAME} request failed ({}): {body}",
                    status.as_u16()
                ))),
            },
            Err(e) if status.is_success() => Err(Error::analysis_transport(format!(
                "{PROVIDER_NAME} response parse failed: {e}"
            ))),
            _ => Err(Error::analysis_transport(format!(
                "{PROVIDER_NAME} request failed ({}): {body}",
                status.as_u16()
            ))),
        }
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
