//! Search-Related Value Objects

use crate::entities::Place;
use std::sync::Arc;

/// Value Object: Scored Place
///
/// One ranked result of a similarity query.
///
/// ## Business Rules
///
/// - Score is the ε-stabilized cosine similarity, in `[-1, 1]`
/// - Results are ordered by descending score, ties by insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlace {
    /// Matched place
    pub place: Arc<Place>,
    /// Cosine similarity to the query
    pub score: f64,
    /// Insertion position of the place in the store
    pub position: usize,
}
