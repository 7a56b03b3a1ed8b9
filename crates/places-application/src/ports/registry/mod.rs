//! Provider Registry System
//!
//! Compile-time registration of place store and similarity index backends.
//! Uses the `linkme` crate so that a backend only has to be linked into the
//! binary to become resolvable by name.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "store_provider = memory" → InMemory     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in places-providers)
//!
//! ```ignore
//! use places_application::ports::registry::{PlaceStoreProviderEntry, PLACE_STORE_PROVIDERS};
//!
//! #[linkme::distributed_slice(PLACE_STORE_PROVIDERS)]
//! static MEMORY_PROVIDER: PlaceStoreProviderEntry = PlaceStoreProviderEntry {
//!     name: "memory",
//!     description: "In-memory place store",
//!     factory: |config| Ok(Arc::new(InMemoryPlaceStore::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Provider (in places-infrastructure)
//!
//! ```ignore
//! use places_application::ports::registry::resolve_place_store_provider;
//!
//! let config = PlaceStoreProviderConfig::new("memory").with_dimensions(768);
//! let store = resolve_place_store_provider(&config)?;
//! ```

pub mod place_store;
pub mod similarity;

pub use place_store::{
    PLACE_STORE_PROVIDERS, PlaceStoreProviderConfig, PlaceStoreProviderEntry,
    list_place_store_providers, resolve_place_store_provider,
};
pub use similarity::{
    SIMILARITY_INDEX_PROVIDERS, SimilarityIndexProviderConfig, SimilarityIndexProviderEntry,
    list_similarity_index_providers, resolve_similarity_index_provider,
};
