//! Dataset configuration types

use crate::constants::DEFAULT_STORE_PROVIDER;
use places_application::use_cases::WarningPolicy;
use places_domain::constants::{EMBEDDING_MIN_DIMENSIONS, TEXT_SOFT_LIMIT_DEFAULT};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Store and ingestion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DatasetConfig {
    /// Registered place store provider name
    #[validate(length(min = 1))]
    pub store_provider: String,

    /// Preset embedding length; unset lets the first insert decide
    #[validate(range(min = EMBEDDING_MIN_DIMENSIONS))]
    pub expected_dimensions: Option<usize>,

    /// Soft limit for `wikipedia_content`, in characters
    #[validate(range(min = 1))]
    pub text_soft_limit: usize,

    /// Whether rows with only warnings are inserted
    pub warning_policy: WarningPolicy,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            store_provider: DEFAULT_STORE_PROVIDER.to_string(),
            expected_dimensions: None,
            text_soft_limit: TEXT_SOFT_LIMIT_DEFAULT,
            warning_policy: WarningPolicy::default(),
        }
    }
}
