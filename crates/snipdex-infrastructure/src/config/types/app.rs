//! Main application configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PERSIST_TIMEOUT_SECS;

use super::{LoggingConfig, ProvidersConfig, ServerConfig};

/// Background indexing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Deadline of one embed-and-store task, in seconds
    pub persist_timeout_secs: u64,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            persist_timeout_secs: DEFAULT_PERSIST_TIMEOUT_SECS,
        }
    }
}

impl IngestionConfig {
    /// Task deadline as a duration
    pub fn persist_timeout(&self) -> Duration {
        Duration::from_secs(self.persist_timeout_secs)
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Provider configurations
    pub providers: ProvidersConfig,
    /// Background indexing configuration
    pub ingestion: IngestionConfig,
}
