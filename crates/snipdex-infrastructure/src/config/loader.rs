//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    OPENAI_API_KEY_ENV,
};
use crate::di::factory::{embedding_providers, vector_store_providers};
use crate::error_ext::ErrorContext;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use snipdex_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. `OPENAI_API_KEY` as `providers.embedding.api_key`
    /// 4. Environment variables with prefix (e.g., `SNIPDEX__SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Merged configuration sources, before extraction
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = self.resolved_path()
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&[OPENAI_API_KEY_ENV])
                    .map(|_| "providers.embedding.api_key".into()),
            )
            .merge(
                Env::prefixed(&format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}"))
                    .split(CONFIG_ENV_SEPARATOR),
            )
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File the TOML layer reads: the explicit path, else the first default
    /// location that exists
    ///
    /// An explicit path is returned even when missing; loading then falls
    /// back to defaults and environment.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Configuration {
        message: message.into(),
        source: None,
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_logging_config(config)?;
    validate_embedding_config(config)?;
    validate_vector_store_config(config)?;
    validate_analysis_config(config)?;
    if config.ingestion.persist_timeout_secs == 0 {
        return Err(invalid("Persist timeout cannot be 0"));
    }
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(invalid("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    crate::logging::parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.providers.embedding;
    if embedding.dimensions == 0 {
        return Err(invalid("Embedding dimensions must be greater than 0"));
    }
    if embedding.timeout_secs == 0 {
        return Err(invalid("Embedding timeout cannot be 0"));
    }
    let provider = embedding.provider.to_lowercase();
    if provider == embedding_providers::OPENAI
        && embedding.api_key.as_deref().is_none_or(str::is_empty)
    {
        return Err(invalid(format!(
            "API key required for OpenAI provider (set {OPENAI_API_KEY_ENV} or providers.embedding.api_key)"
        )));
    }
    if !embedding_providers::ALL.contains(&provider.as_str()) {
        return Err(invalid(format!(
            "Unknown embedding provider: {}",
            embedding.provider
        )));
    }
    Ok(())
}

fn validate_vector_store_config(config: &AppConfig) -> Result<()> {
    let store = &config.providers.vector_store;
    if store.collection.trim().is_empty() {
        return Err(invalid("Vector store collection name cannot be empty"));
    }
    if store.timeout_secs == 0 {
        return Err(invalid("Vector store timeout cannot be 0"));
    }
    if store.dimensions == Some(0) {
        return Err(invalid("Vector store dimensions must be greater than 0"));
    }
    if !vector_store_providers::ALL.contains(&store.provider.to_lowercase().as_str()) {
        return Err(invalid(format!(
            "Unknown vector store provider: {}",
            store.provider
        )));
    }
    Ok(())
}

fn validate_analysis_config(config: &AppConfig) -> Result<()> {
    let analysis = &config.providers.analysis;
    if analysis.base_url.trim().is_empty() {
        return Err(invalid("Analysis service base URL cannot be empty"));
    }
    if analysis.timeout_secs == 0 {
        return Err(invalid("Analysis timeout cannot be 0"));
    }
    Ok(())
}
