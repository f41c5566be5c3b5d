//! Analysis Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | HttpAnalysisProvider | Remote | JSON over HTTP `POST /analyze` |

pub mod http;

pub use http::HttpAnalysisProvider;
