//! Similarity search configuration types

use crate::constants::{DEFAULT_INDEX_PROVIDER, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SEARCH_K};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Similarity search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SearchConfig {
    /// Registered similarity index provider name
    #[validate(length(min = 1))]
    pub index_provider: String,

    /// Result count when a query names none
    #[validate(range(min = 1))]
    pub default_k: usize,

    /// Store size from which scoring runs in parallel
    #[validate(range(min = 1))]
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_provider: DEFAULT_INDEX_PROVIDER.to_string(),
            default_k: DEFAULT_SEARCH_K,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
