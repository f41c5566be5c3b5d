//! Server-specific constants

/// Methods advertised to CORS preflight requests
pub const CORS_ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Headers advertised to CORS preflight requests
pub const CORS_ALLOWED_HEADERS: &str = "Content-Type";

/// Wildcard entry in `server.cors_origins`
pub const CORS_ANY_ORIGIN: &str = "*";
