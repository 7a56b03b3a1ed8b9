//! Application Ports
//!
//! Port traits live in `places-domain`; this module re-exports them next to
//! the registries that resolve their providers by name.

/// Provider registry for dynamic provider discovery
pub mod registry;

pub use places_domain::ports::infrastructure::ValidationReporter;
pub use places_domain::ports::providers::{PlaceStore, RowSink, RowSource, SimilarityIndex};
pub use registry::{
    PLACE_STORE_PROVIDERS, PlaceStoreProviderConfig, PlaceStoreProviderEntry,
    SIMILARITY_INDEX_PROVIDERS, SimilarityIndexProviderConfig, SimilarityIndexProviderEntry,
    list_place_store_providers, list_similarity_index_providers, resolve_place_store_provider,
    resolve_similarity_index_provider,
};
