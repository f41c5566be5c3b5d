//! # snipdex Server
//!
//! HTTP front of the snippet indexing and similarity-search orchestrator.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snipdex_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults, `snipdex.toml` if present, then `SNIPDEX__*` variables
//!     run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/submit` | Index a snippet, return the refactoring suggestion |
//! | `POST` | `/api/similar` | Previously submitted snippets nearest to the given one |
//! | `GET` | `/health` | Liveness probe |

pub mod constants;
pub mod init;
pub mod transport;

pub use init::run;
pub use transport::HttpTransport;
