//! Server Initialization
//!
//! Start-up order: configuration, logging, provider wiring (including
//! collection provisioning), HTTP launch. Any failure before launch is
//! fatal. After Rocket shuts down, in-flight indexing tasks get a bounded
//! grace period.

use std::path::Path;

use snipdex_infrastructure::bootstrap::init_app;
use snipdex_infrastructure::config::{AppConfig, ConfigLoader};
use snipdex_infrastructure::logging::{init_logging, log_config_loaded};
use tracing::info;

use crate::transport::HttpTransport;

/// Run the snipdex server
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config: AppConfig = loader.load()?;
    init_logging(&config.logging)?;
    if let Some(path) = loader.resolved_path() {
        log_config_loaded(&path, path.exists());
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        embedding = %config.providers.embedding.provider,
        vector_store = %config.providers.vector_store.provider,
        "Starting snipdex server"
    );

    let drain_limit = config.server.shutdown_drain();
    let context = init_app(config).await?;
    let persister = std::sync::Arc::clone(&context.persister);

    HttpTransport::new(context).start().await?;

    info!(in_flight = persister.in_flight(), "Server stopped, draining indexing tasks");
    if persister.drain(drain_limit).await {
        info!("Indexing tasks drained");
    }
    Ok(())
}

