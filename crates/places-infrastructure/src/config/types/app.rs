//! Main application configuration

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DatasetConfig, IoConfig, LoggingConfig, SearchConfig};

/// Root configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [dataset]
/// store_provider = "memory"
/// expected_dimensions = 768
/// warning_policy = "reject"
///
/// [search]
/// default_k = 5
///
/// [io]
/// csv_delimiter = ";"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
    /// Store and ingestion configuration
    #[serde(default)]
    #[validate(nested)]
    pub dataset: DatasetConfig,
    /// Similarity search configuration
    #[serde(default)]
    #[validate(nested)]
    pub search: SearchConfig,
    /// Row file configuration
    #[serde(default)]
    #[validate(nested)]
    pub io: IoConfig,
}
