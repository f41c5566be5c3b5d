//! Configuration loading tests
//!
//! `figment::Jail` gives each test its own working directory and restores
//! the environment afterwards.

use figment::Jail;
use snipdex_domain::error::Error;
use snipdex_infrastructure::config::{AppConfig, ConfigLoader};

fn load() -> figment::error::Result<AppConfig> {
    ConfigLoader::new().load().map_err(|e| e.to_string().into())
}

fn config_error_message(result: snipdex_domain::error::Result<AppConfig>) -> String {
    match result {
        Err(Error::Configuration { message, .. }) => message,
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_defaults_with_offline_embedding() {
    Jail::expect_with(|jail| {
        jail.set_env("SNIPDEX__PROVIDERS__EMBEDDING__PROVIDER", "null");
        let config = load()?;

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.server.shutdown_drain_secs, 5);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_format);
        assert_eq!(config.providers.embedding.dimensions, 1536);
        assert_eq!(config.providers.vector_store.provider, "qdrant");
        assert_eq!(config.providers.vector_store.address, "http://localhost:6334");
        assert_eq!(config.providers.vector_store.collection, "code-snippets");
        assert_eq!(config.providers.vector_store.dimensions, None);
        assert_eq!(
            config.providers.analysis.base_url,
            "http://rust-service:8081"
        );
        assert_eq!(config.ingestion.persist_timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn test_config_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "snipdex.toml",
            r#"
            [server]
            port = 9090

            [providers.embedding]
            provider = "null"
            dimensions = 64

            [providers.vector_store]
            provider = "memory"
            collection = "snippets-dev"
            dimensions = 64
            "#,
        )?;
        let config = load()?;

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.providers.embedding.dimensions, 64);
        assert_eq!(config.providers.vector_store.collection, "snippets-dev");
        assert_eq!(config.providers.vector_store.dimensions, Some(64));
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [server]
            port = 9090

            [providers.embedding]
            provider = "null"
            "#,
        )?;
        jail.set_env("SNIPDEX__SERVER__PORT", "7070");
        jail.set_env("SNIPDEX__PROVIDERS__VECTOR_STORE__COLLECTION", "from-env");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 7070);
        assert_eq!(config.providers.vector_store.collection, "from-env");
        assert_eq!(config.providers.embedding.provider, "null");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("SNIPDEX__PROVIDERS__EMBEDDING__PROVIDER", "null");
        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.server.port, 8080);
        Ok(())
    });
}

#[test]
fn test_resolved_path_reports_file_source() {
    Jail::expect_with(|jail| {
        let explicit = ConfigLoader::new().with_config_path("does-not-exist.toml");
        assert_eq!(
            explicit.resolved_path(),
            Some(std::path::PathBuf::from("does-not-exist.toml"))
        );

        jail.create_file("snipdex.toml", "[server]\nport = 9191\n")?;
        let found = ConfigLoader::new()
            .resolved_path()
            .ok_or_else(|| "default config file should be found".to_string())?;
        assert!(found.ends_with("snipdex.toml"));
        assert!(found.exists());
        Ok(())
    });
}

#[test]
fn test_openai_api_key_from_conventional_variable() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-conventional");
        let config = load()?;

        assert_eq!(config.providers.embedding.provider, "openai");
        assert_eq!(
            config.providers.embedding.api_key.as_deref(),
            Some("sk-conventional")
        );
        Ok(())
    });
}

#[test]
fn test_prefixed_api_key_wins_over_conventional_variable() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-conventional");
        jail.set_env("SNIPDEX__PROVIDERS__EMBEDDING__API_KEY", "sk-prefixed");
        let config = load()?;

        assert_eq!(
            config.providers.embedding.api_key.as_deref(),
            Some("sk-prefixed")
        );
        Ok(())
    });
}

#[test]
fn test_openai_without_api_key_is_fatal() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "");
        let message = config_error_message(ConfigLoader::new().load());

        assert!(message.contains("API key required"), "{message}");
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("SNIPDEX__SERVER__PORT", "0", "port"),
        ("SNIPDEX__PROVIDERS__EMBEDDING__DIMENSIONS", "0", "dimensions"),
        ("SNIPDEX__PROVIDERS__EMBEDDING__PROVIDER", "voyage", "Unknown embedding"),
        ("SNIPDEX__PROVIDERS__VECTOR_STORE__PROVIDER", "milvus", "Unknown vector store"),
        ("SNIPDEX__PROVIDERS__ANALYSIS__TIMEOUT_SECS", "0", "Analysis timeout"),
        ("SNIPDEX__LOGGING__LEVEL", "loud", "Invalid log level"),
    ];

    for (key, value, expected) in cases {
        Jail::expect_with(|jail| {
            jail.set_env("OPENAI_API_KEY", "sk-test");
            jail.set_env(key, value);
            let message = config_error_message(ConfigLoader::new().load());

            assert!(message.contains(expected), "{key}={value}: {message}");
            Ok(())
        });
    }
}

#[test]
fn test_blank_collection_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "snipdex.toml",
            r#"
            [providers.embedding]
            provider = "null"

            [providers.vector_store]
            collection = "   "
            "#,
        )?;
        let message = config_error_message(ConfigLoader::new().load());

        assert!(message.contains("collection"), "{message}");
        Ok(())
    });
}

#[test]
fn test_saved_config_loads_back() {
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
        let path = dir.path().join("saved.toml");

        let mut config = AppConfig::default();
        config.server.port = 8181;
        config.providers.embedding.provider = "null".to_string();
        config.providers.vector_store.provider = "memory".to_string();
        config.providers.vector_store.dimensions = Some(1536);

        let loader = ConfigLoader::new().with_config_path(&path);
        loader
            .save_to_file(&config, &path)
            .map_err(|e| e.to_string())?;
        let loaded = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(loader.config_path(), Some(path.as_path()));
        assert_eq!(loaded.server.port, 8181);
        assert_eq!(loaded.providers.vector_store.provider, "memory");
        assert_eq!(loaded.providers.vector_store.dimensions, Some(1536));
        Ok(())
    });
}
