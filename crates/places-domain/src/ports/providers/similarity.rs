use crate::error::Result;
use crate::value_objects::ScoredPlace;

/// Similarity Search Interface
///
/// Ranks the places of a store against a query vector by cosine similarity
/// `dot(a, b) / (|a| * |b| + 1e-9)`, descending, with ties broken by
/// insertion order. Any indexing strategy is allowed as long as the ranking
/// equals that of an exact linear scan.
pub trait SimilarityIndex: Send + Sync {
    /// Top `k` places for `vector`
    ///
    /// # Returns
    /// `min(k, store size)` results. Fails with `InvalidArgument` when
    /// `k < 1`, the store is empty or the vector has non-finite components,
    /// and with `DimensionMismatch` when the vector length differs from the
    /// store's dimensionality.
    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredPlace>>;

    /// Name of this index (e.g. "linear")
    fn provider_name(&self) -> &str;
}
