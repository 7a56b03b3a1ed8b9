//! Store snapshot value objects
//!
//! A snapshot is a consistent, immutable view of a store at one instant.
//! Readers iterate it without holding any store lock.

use crate::entities::Place;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Value Object: Place Snapshot
///
/// Cloning is cheap; the underlying record list is shared.
#[derive(Debug, Clone, Default)]
pub struct PlaceSnapshot {
    places: Arc<Vec<Arc<Place>>>,
    dimensions: Option<usize>,
}

impl PlaceSnapshot {
    /// Create a snapshot over a shared record list
    pub fn new(places: Arc<Vec<Arc<Place>>>, dimensions: Option<usize>) -> Self {
        Self { places, dimensions }
    }

    /// Dimensionality established when the snapshot was taken
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the snapshot holds no record
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Record at an insertion position
    pub fn get(&self, position: usize) -> Option<&Arc<Place>> {
        self.places.get(position)
    }

    /// Records in insertion order
    pub fn as_slice(&self) -> &[Arc<Place>] {
        &self.places
    }

    /// Borrowing iterator in insertion order; call again to restart
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Place>> {
        self.places.iter()
    }
}

impl IntoIterator for PlaceSnapshot {
    type Item = Arc<Place>;
    type IntoIter = PlaceScan;

    fn into_iter(self) -> PlaceScan {
        PlaceScan {
            snapshot: self,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for &'a PlaceSnapshot {
    type Item = &'a Arc<Place>;
    type IntoIter = std::slice::Iter<'a, Arc<Place>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning, lazy iterator over a snapshot in insertion order
#[derive(Debug, Clone)]
pub struct PlaceScan {
    snapshot: PlaceSnapshot,
    position: usize,
}

impl PlaceScan {
    /// Rewind to the first record
    pub fn restart(&mut self) {
        self.position = 0;
    }
}

impl Iterator for PlaceScan {
    type Item = Arc<Place>;

    fn next(&mut self) -> Option<Arc<Place>> {
        let place = self.snapshot.get(self.position).cloned()?;
        self.position += 1;
        Some(place)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlaceScan {}

/// Value Object: Store Statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Provider name of the backend
    pub provider: String,
    /// Number of stored places
    pub places: usize,
    /// Established dimensionality
    pub dimensions: Option<usize>,
}
