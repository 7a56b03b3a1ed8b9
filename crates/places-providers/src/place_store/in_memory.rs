//! In-memory place store provider implementation
//!
//! Keeps every place in process memory. Data is not persisted.
//!
//! Inserts are serialized by a write lock that covers the dimension check and
//! the append. The record list is shared copy-on-write, so a snapshot taken
//! under the read lock stays valid after the lock is released.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use places_domain::entities::Place;
use places_domain::error::{Error, Result};
use places_domain::ports::providers::PlaceStore;
use places_domain::value_objects::PlaceSnapshot;
use tracing::trace;

use crate::constants::MEMORY_STORE_PROVIDER;

/// Positions of the places sharing a key, by state then city
type KeyIndex = HashMap<String, HashMap<String, Vec<usize>>>;

#[derive(Default)]
struct StoreState {
    places: Arc<Vec<Arc<Place>>>,
    by_key: KeyIndex,
    dimensions: Option<usize>,
}

/// In-memory place store provider
pub struct InMemoryPlaceStore {
    state: RwLock<StoreState>,
}

impl InMemoryPlaceStore {
    /// Create an empty store; the first insert fixes the dimensionality
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Create an empty store with a preset dimensionality
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            state: RwLock::new(StoreState {
                dimensions: Some(dimensions),
                ..StoreState::default()
            }),
        }
    }
}

impl Default for InMemoryPlaceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceStore for InMemoryPlaceStore {
    fn insert(&self, place: Place) -> Result<Arc<Place>> {
        let actual = match place.dimensions() {
            Some(0) | None => {
                return Err(Error::invalid_argument(format!(
                    "place {}, {} has no embedding",
                    place.city_name, place.state_name
                )));
            }
            Some(n) => n,
        };

        let mut state = self.state.write();
        if let Some(expected) = state.dimensions {
            if expected != actual {
                return Err(Error::dimension_mismatch(expected, actual));
            }
        }

        let position = state.places.len();
        let place = Arc::new(place);
        Arc::make_mut(&mut state.places).push(Arc::clone(&place));
        state
            .by_key
            .entry(place.state_name.clone())
            .or_default()
            .entry(place.city_name.clone())
            .or_default()
            .push(position);
        state.dimensions = Some(actual);

        trace!(position, dimensions = actual, "Place stored");
        Ok(place)
    }

    fn snapshot(&self) -> PlaceSnapshot {
        let state = self.state.read();
        PlaceSnapshot::new(Arc::clone(&state.places), state.dimensions)
    }

    fn get(&self, state_name: &str, city_name: &str) -> Option<Arc<Place>> {
        let state = self.state.read();
        let position = *state.by_key.get(state_name)?.get(city_name)?.last()?;
        state.places.get(position).cloned()
    }

    fn find_all(&self, state_name: &str, city_name: &str) -> Vec<Arc<Place>> {
        let state = self.state.read();
        state
            .by_key
            .get(state_name)
            .and_then(|cities| cities.get(city_name))
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&i| state.places.get(i).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn dimensions(&self) -> Option<usize> {
        self.state.read().dimensions
    }

    fn len(&self) -> usize {
        self.state.read().places.len()
    }

    fn provider_name(&self) -> &str {
        MEMORY_STORE_PROVIDER
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use places_application::ports::registry::{
    PLACE_STORE_PROVIDERS, PlaceStoreProviderConfig, PlaceStoreProviderEntry,
};

/// Factory function for creating in-memory place store instances.
fn in_memory_place_store_factory(
    config: &PlaceStoreProviderConfig,
) -> std::result::Result<Arc<dyn PlaceStore>, String> {
    let store = match config.dimensions {
        Some(0) => return Err("dimensions must be at least 1".to_string()),
        Some(dimensions) => InMemoryPlaceStore::with_dimensions(dimensions),
        None => InMemoryPlaceStore::new(),
    };
    Ok(Arc::new(store))
}

#[linkme::distributed_slice(PLACE_STORE_PROVIDERS)]
static MEMORY_PROVIDER: PlaceStoreProviderEntry = PlaceStoreProviderEntry {
    name: MEMORY_STORE_PROVIDER,
    description: "In-memory place store (copy-on-write snapshots, non-persistent)",
    factory: in_memory_place_store_factory,
};
