//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `snipdex_infrastructure::constants`.

// ============================================================================
// SIMILARITY SEARCH CONSTANTS
// ============================================================================

/// Number of nearest snippets returned by a similarity query
pub const SIMILAR_SNIPPETS_LIMIT: usize = 5;

// ============================================================================
// SNIPPET RECORD CONSTANTS
// ============================================================================

/// Payload field holding the submitted source text
pub const PAYLOAD_FIELD_CODE: &str = "code";

/// Default collection name for stored snippets
pub const DEFAULT_COLLECTION_NAME: &str = "code-snippets";
