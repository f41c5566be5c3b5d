//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in snipdex-domain) and infrastructure
//! constants.

use std::time::Duration;

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Model name reported by the null embedding provider
pub const EMBEDDING_MODEL_NULL: &str = "null";

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-ada-002";

/// Default OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// ============================================================================
// VECTOR STORE CONSTANTS
// ============================================================================

/// Deadline for Qdrant administrative calls (existence check, creation)
pub const QDRANT_ADMIN_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// ANALYSIS PROVIDER CONSTANTS
// ============================================================================

/// Path of the analysis endpoint, relative to the service base URL
pub const ANALYSIS_ENDPOINT_PATH: &str = "/analyze";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Content-Type header value for JSON
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default timeout for API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
