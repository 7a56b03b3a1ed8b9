//! Similarity Index Provider Registry
//!
//! Auto-registration system for similarity index strategies. An index is built
//! over an existing store, so factories receive the store alongside the config.

use std::collections::HashMap;
use std::sync::Arc;

use places_domain::ports::providers::{PlaceStore, SimilarityIndex};

/// Configuration for similarity index creation
#[derive(Debug, Clone, Default)]
pub struct SimilarityIndexProviderConfig {
    /// Provider name (e.g., "linear")
    pub provider: String,
    /// Store size from which scoring runs in parallel
    pub parallel_threshold: Option<usize>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl SimilarityIndexProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the parallel scoring threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for similarity index providers
pub struct SimilarityIndexProviderEntry {
    /// Unique provider name (e.g., "linear")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create an index over a store
    pub factory: fn(
        &SimilarityIndexProviderConfig,
        Arc<dyn PlaceStore>,
    ) -> Result<Arc<dyn SimilarityIndex>, String>,
}

#[linkme::distributed_slice]
pub static SIMILARITY_INDEX_PROVIDERS: [SimilarityIndexProviderEntry] = [..];

/// Resolve a similarity index by name from the registry
///
/// # Arguments
/// * `config` - Configuration containing provider name and settings
/// * `store` - Store the index ranks
pub fn resolve_similarity_index_provider(
    config: &SimilarityIndexProviderConfig,
    store: Arc<dyn PlaceStore>,
) -> Result<Arc<dyn SimilarityIndex>, String> {
    let provider_name = &config.provider;

    for entry in SIMILARITY_INDEX_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config, store);
        }
    }

    let available: Vec<&str> = SIMILARITY_INDEX_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown similarity index provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered similarity index providers as (name, description) tuples
pub fn list_similarity_index_providers() -> Vec<(&'static str, &'static str)> {
    SIMILARITY_INDEX_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
