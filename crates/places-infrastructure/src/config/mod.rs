//! Configuration
//!
//! Layered figment configuration: built-in defaults, an optional TOML file,
//! then `PLACES_`-prefixed environment variables.

/// Configuration loader
pub mod loader;
/// Configuration section types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DatasetConfig, IoConfig, LoggingConfig, SearchConfig};
