//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `snipdex_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "snipdex.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "snipdex";

/// Environment variable prefix for configuration (`SNIPDEX__SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "SNIPDEX";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional variable holding the OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SNIPDEX_LOG";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Front-end origin allowed by default
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Seconds to wait for in-flight indexing at shutdown
pub const DEFAULT_SHUTDOWN_DRAIN_SECS: u64 = 5;

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Default embedding provider
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";

/// Default embedding dimensionality (text-embedding-ada-002)
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;

/// Default vector store provider
pub const DEFAULT_VECTOR_STORE_PROVIDER: &str = "qdrant";

/// Default Qdrant gRPC address
pub const DEFAULT_QDRANT_ADDRESS: &str = "http://localhost:6334";

/// Default analysis service base URL
pub const DEFAULT_ANALYSIS_BASE_URL: &str = "http://rust-service:8081";

/// Default timeout for outbound provider requests
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Default deadline of one background indexing task
pub const DEFAULT_PERSIST_TIMEOUT_SECS: u64 = 30;
