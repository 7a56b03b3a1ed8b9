//! Linear-scan similarity index
//!
//! Exact cosine ranking over a store snapshot. Every place is scored, and a
//! bounded heap keeps the best `k`, so a query costs O(n log k). Stores at or
//! above the parallel threshold are scored on the rayon pool.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use places_domain::constants::SIMILARITY_EPSILON;
use places_domain::entities::Place;
use places_domain::error::{Error, Result};
use places_domain::ports::providers::{PlaceStore, SimilarityIndex};
use places_domain::value_objects::ScoredPlace;
use rayon::prelude::*;

use crate::constants::{LINEAR_INDEX_PROVIDER, PARALLEL_THRESHOLD_DEFAULT};

/// Linear-scan similarity index over a place store
pub struct LinearScanIndex {
    store: Arc<dyn PlaceStore>,
    parallel_threshold: usize,
}

impl LinearScanIndex {
    /// Create an index over a store
    pub fn new(store: Arc<dyn PlaceStore>) -> Self {
        Self {
            store,
            parallel_threshold: PARALLEL_THRESHOLD_DEFAULT,
        }
    }

    /// Set the store size from which scoring runs in parallel
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Store size from which scoring runs in parallel
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl SimilarityIndex for LinearScanIndex {
    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredPlace>> {
        if k < 1 {
            return Err(Error::invalid_argument("k must be at least 1"));
        }
        let snapshot = self.store.snapshot();
        if snapshot.is_empty() {
            return Err(Error::invalid_argument("cannot query an empty store"));
        }
        if let Some(position) = vector.iter().position(|v| !v.is_finite()) {
            return Err(Error::invalid_argument(format!(
                "query component {position} is not finite"
            )));
        }
        if let Some(expected) = snapshot.dimensions() {
            if vector.len() != expected {
                return Err(Error::dimension_mismatch(expected, vector.len()));
            }
        }

        let places = snapshot.as_slice();
        let query_norm = compute_norm(vector);
        let score =
            |place: &Arc<Place>| cosine_similarity_with_norm(vector, place.embedding(), query_norm);

        let scores: Vec<f64> = if places.len() >= self.parallel_threshold {
            places.par_iter().map(score).collect()
        } else {
            places.iter().map(score).collect()
        };

        let results = top_k(&scores, k)
            .into_iter()
            .map(|item| ScoredPlace {
                place: Arc::clone(&places[item.index]),
                score: item.score,
                position: item.index,
            })
            .collect();
        Ok(results)
    }

    fn provider_name(&self) -> &str {
        LINEAR_INDEX_PROVIDER
    }
}

/// Scored item for heap-based top-k selection
///
/// Orders worse items as greater (lower score, then later insertion) so the
/// top of the max-heap is the weakest kept item.
#[derive(Debug, Clone, Copy)]
struct ScoredItem {
    score: f64,
    index: usize,
}

impl PartialEq for ScoredItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best `k` items, best first
fn top_k(scores: &[f64], k: usize) -> Vec<ScoredItem> {
    let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(k.min(scores.len()) + 1);

    for (index, &score) in scores.iter().enumerate() {
        // -0.0 + 0.0 is 0.0, so signed zeros tie and fall back to insertion order
        let item = ScoredItem {
            score: score + 0.0,
            index,
        };
        if heap.len() < k {
            heap.push(item);
        } else if let Some(worst) = heap.peek() {
            // Only add if better than the weakest kept item
            if item < *worst {
                heap.pop();
                heap.push(item);
            }
        }
    }

    heap.into_sorted_vec()
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity with precomputed query norm, stabilized by epsilon
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f64) -> f64 {
    let dot_product: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();
    dot_product / (norm_a * compute_norm(b) + SIMILARITY_EPSILON)
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use places_application::ports::registry::{
    SIMILARITY_INDEX_PROVIDERS, SimilarityIndexProviderConfig, SimilarityIndexProviderEntry,
};

/// Factory function for creating linear-scan index instances.
fn linear_index_factory(
    config: &SimilarityIndexProviderConfig,
    store: Arc<dyn PlaceStore>,
) -> std::result::Result<Arc<dyn SimilarityIndex>, String> {
    let index = LinearScanIndex::new(store)
        .with_parallel_threshold(config.parallel_threshold.unwrap_or(PARALLEL_THRESHOLD_DEFAULT));
    Ok(Arc::new(index))
}

#[linkme::distributed_slice(SIMILARITY_INDEX_PROVIDERS)]
static LINEAR_PROVIDER: SimilarityIndexProviderEntry = SimilarityIndexProviderEntry {
    name: LINEAR_INDEX_PROVIDER,
    description: "Exact linear scan with heap top-k selection",
    factory: linear_index_factory,
};
