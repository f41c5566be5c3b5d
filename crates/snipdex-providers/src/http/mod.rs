//! HTTP Client Configuration
//!
//! API-based providers receive a `reqwest::Client` through their
//! constructors. One client is built at start-up from [`HttpClientConfig`]
//! and cloned into every provider, so they all share a single connection
//! pool.
//!
//! ## Contents
//!
//! - `HttpClientConfig` - Pool and timeout settings, plus the client builder
//! - `HttpResponseUtils` - Utilities for handling HTTP responses (re-exported from utils)

pub mod provider;

pub use provider::HttpClientConfig;
pub use crate::utils::HttpResponseUtils;
