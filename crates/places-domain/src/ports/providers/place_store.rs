use crate::entities::Place;
use crate::error::Result;
use crate::value_objects::{PlaceScan, PlaceSnapshot, StoreStats};
use std::sync::Arc;

/// Dataset Storage Interface
///
/// Append-only, ordered collection of validated places. All places in one
/// store share a single embedding dimensionality, fixed by the first insert
/// (or preset by the backend).
///
/// Implementations must serialize `insert` against other inserts and give
/// readers a consistent snapshot: a reader sees the store either before or
/// after any concurrent insert, never a partial record.
///
/// # Example
///
/// ```ignore
/// use places_domain::ports::providers::PlaceStore;
///
/// store.insert(place)?;
/// for place in store.scan() {
///     println!("{}, {}", place.city_name, place.state_name);
/// }
/// let jaipur = store.get("Rajasthan", "Jaipur");
/// ```
pub trait PlaceStore: Send + Sync {
    /// Append a place
    ///
    /// # Returns
    /// The shared handle of the stored place. Fails with `DimensionMismatch`
    /// when the vector length differs from the established dimensionality and
    /// with `InvalidArgument` when the place has no vector. A failed insert
    /// leaves the store unchanged.
    fn insert(&self, place: Place) -> Result<Arc<Place>>;

    /// Consistent view of the current contents
    fn snapshot(&self) -> PlaceSnapshot;

    /// Lazy, finite iteration in insertion order; call again to restart
    fn scan(&self) -> PlaceScan {
        self.snapshot().into_iter()
    }

    /// Most recently inserted place with this key
    ///
    /// The schema does not make `(state_name, city_name)` unique; the latest
    /// insert wins. Use [`find_all`](Self::find_all) to see every match.
    fn get(&self, state_name: &str, city_name: &str) -> Option<Arc<Place>>;

    /// Every place with this key, in insertion order
    fn find_all(&self, state_name: &str, city_name: &str) -> Vec<Arc<Place>>;

    /// Established dimensionality, if any
    fn dimensions(&self) -> Option<usize>;

    /// Number of stored places
    fn len(&self) -> usize;

    /// Whether the store holds no place
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of this backend (e.g. "memory")
    fn provider_name(&self) -> &str;

    /// Summary statistics
    fn stats(&self) -> StoreStats {
        let snapshot = self.snapshot();
        StoreStats {
            provider: self.provider_name().to_string(),
            places: snapshot.len(),
            dimensions: snapshot.dimensions(),
        }
    }
}
