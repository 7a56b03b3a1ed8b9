//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the places dataset library.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML and environment configuration with figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions from foreign errors to domain errors |
//! | [`bootstrap`] | Composition root resolving providers by name |
//! | [`constants`] | Configuration defaults |

// Provider crate is linked for its registry entries
extern crate places_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{PlacesContext, bootstrap, bootstrap_with_reporter};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
