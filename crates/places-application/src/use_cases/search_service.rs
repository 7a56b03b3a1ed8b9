//! Search Service Use Case
//!
//! Similarity queries over a store through a pluggable [`SimilarityIndex`].

use std::sync::Arc;
use std::time::Instant;

use places_domain::error::{Error, Result};
use places_domain::ports::providers::{PlaceStore, SimilarityIndex};
use places_domain::value_objects::ScoredPlace;
use tracing::debug;

/// Search service implementation - ranks stored places by similarity
pub struct SearchService {
    store: Arc<dyn PlaceStore>,
    index: Arc<dyn SimilarityIndex>,
    default_k: usize,
}

impl SearchService {
    /// Create new search service with injected dependencies
    pub fn new(store: Arc<dyn PlaceStore>, index: Arc<dyn SimilarityIndex>, default_k: usize) -> Self {
        Self {
            store,
            index,
            default_k,
        }
    }

    /// Result count used when a query gives none
    pub fn default_k(&self) -> usize {
        self.default_k
    }

    /// Top `k` places for a query vector (`default_k` when `k` is `None`)
    pub fn search(&self, vector: &[f32], k: Option<usize>) -> Result<Vec<ScoredPlace>> {
        let k = k.unwrap_or(self.default_k);
        let started = Instant::now();
        let results = self.index.query(vector, k)?;
        debug!(
            index = self.index.provider_name(),
            k,
            results = results.len(),
            elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            "Similarity query"
        );
        Ok(results)
    }

    /// Places most similar to a stored place, excluding that place
    ///
    /// The anchor is resolved with [`PlaceStore::get`], so the latest insert
    /// for the key is used. Fails with `NotFound` when no place has the key.
    pub fn similar_to(
        &self,
        state_name: &str,
        city_name: &str,
        k: Option<usize>,
    ) -> Result<Vec<ScoredPlace>> {
        let k = k.unwrap_or(self.default_k);
        if k == 0 {
            return Err(Error::invalid_argument("k must be at least 1"));
        }
        let anchor = self
            .store
            .get(state_name, city_name)
            .ok_or_else(|| Error::not_found(format!("place {city_name}, {state_name}")))?;

        let mut results = self.search(anchor.embedding(), Some(k.saturating_add(1)))?;
        results.retain(|scored| !Arc::ptr_eq(&scored.place, &anchor));
        results.truncate(k);
        Ok(results)
    }
}
