//! Dependency wiring
//!
//! Providers are plain `Arc<dyn Port>` handles; the factories here turn
//! configuration into those handles.

pub mod factory;
