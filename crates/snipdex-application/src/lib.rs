//! Application Layer - snipdex
//!
//! Use cases of the snippet indexing and similarity-search orchestrator,
//! written against the provider ports of `snipdex-domain`.
//!
//! ## Use Cases
//!
//! - Submit: fire-and-forget indexing plus a synchronous analysis call
//! - Similar: embed, nearest-neighbor query, payload extraction
//!
//! ## Ports (Interfaces)
//!
//! - `ports::providers::*`: Provider interfaces (Embedding, VectorStore, Analysis)
//! - `ports::services::*`: Use case interfaces consumed by the dispatcher
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `snipdex-domain`: For value objects, errors and port traits
//! - `tokio` / `tokio-util`: For the background persistence task

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
