//! Shared HTTP client construction

use reqwest::Client;
use serde::{Deserialize, Serialize};
use snipdex_domain::error::{Error, Result};
use std::time::Duration;

use crate::constants::DEFAULT_HTTP_TIMEOUT;

/// HTTP client configuration
///
/// Controls connection pooling, timeouts, and other HTTP client behavior.
/// Per-request deadlines set by providers take precedence over `timeout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            keepalive: Duration::from_secs(60),
            timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: format!("snipdex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Build the pooled client shared by every API provider
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
            .tcp_keepalive(self.keepalive)
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| Error::infrastructure_with_source("Failed to create HTTP client", e))
    }
}
