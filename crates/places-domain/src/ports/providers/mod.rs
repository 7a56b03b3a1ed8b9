//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | PlaceStore | Ordered, append-only place storage |
//! | SimilarityIndex | Cosine-similarity ranking over a store |
//! | RowSource | Lazy sequence of raw rows |
//! | RowSink | Consumer of encoded rows |

/// Place store port
pub mod place_store;
/// Row source and sink ports
pub mod rows;
/// Similarity index port
pub mod similarity;

pub use place_store::PlaceStore;
pub use rows::{RowSink, RowSource};
pub use similarity::SimilarityIndex;
