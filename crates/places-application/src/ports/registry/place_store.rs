//! Place Store Provider Registry
//!
//! Auto-registration system for place store backends using linkme distributed
//! slices.

use std::collections::HashMap;
use std::sync::Arc;

use places_domain::ports::providers::PlaceStore;

/// Configuration for place store creation
///
/// Backends use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct PlaceStoreProviderConfig {
    /// Provider name (e.g., "memory")
    pub provider: String,
    /// Preset embedding dimensionality
    pub dimensions: Option<usize>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl PlaceStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for place store providers
pub struct PlaceStoreProviderEntry {
    /// Unique provider name (e.g., "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a store
    pub factory: fn(&PlaceStoreProviderConfig) -> Result<Arc<dyn PlaceStore>, String>,
}

#[linkme::distributed_slice]
pub static PLACE_STORE_PROVIDERS: [PlaceStoreProviderEntry] = [..];

/// Resolve a place store by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn PlaceStore>)` - Created store
/// * `Err(String)` - Error message if the provider is unknown or creation failed
pub fn resolve_place_store_provider(
    config: &PlaceStoreProviderConfig,
) -> Result<Arc<dyn PlaceStore>, String> {
    let provider_name = &config.provider;

    for entry in PLACE_STORE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = PLACE_STORE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown place store provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered place store providers as (name, description) tuples
pub fn list_place_store_providers() -> Vec<(&'static str, &'static str)> {
    PLACE_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
