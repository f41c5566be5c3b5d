//! Configuration management
//!
//! Layered configuration: built-in defaults, an optional TOML file and
//! `SNIPDEX__`-prefixed environment variables, merged with figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
