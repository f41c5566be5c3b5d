//! HTTP Transport Layer
//!
//! Rocket dispatcher in front of the two orchestrators.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use snipdex_server::transport::HttpTransport;
//!
//! let context = snipdex_infrastructure::init_app(config).await?;
//! HttpTransport::new(context).start().await?;
//! ```

pub mod http;
pub mod types;

pub use http::{ApiError, Cors, HttpTransport};
pub use types::{CodeRequest, ErrorResponse, HealthResponse, SimilarCodeResponse, SubmitCodeResponse};
