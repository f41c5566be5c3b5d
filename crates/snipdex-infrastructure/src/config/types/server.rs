//! HTTP server configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CORS_ORIGIN, DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST, DEFAULT_SHUTDOWN_DRAIN_SECS,
};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,

    /// Seconds to wait for in-flight indexing at shutdown
    pub shutdown_drain_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            shutdown_drain_secs: DEFAULT_SHUTDOWN_DRAIN_SECS,
        }
    }
}

impl ServerConfig {
    /// Shutdown drain limit as a duration
    pub fn shutdown_drain(&self) -> Duration {
        Duration::from_secs(self.shutdown_drain_secs)
    }
}
