//! # snipdex Infrastructure Layer
//!
//! Cross-cutting technical concerns that sit between the process entry
//! point and the orchestration core.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`logging`] | tracing subscriber setup |
//! | [`di`] | Provider factories selecting adapters by configured name |
//! | [`bootstrap`] | One-time start-up: clients, collection provisioning, service wiring |
//! | [`error_ext`] | Context extension for foreign results |
//! | [`constants`] | Infrastructure constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
