//! Similarity Index Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | LinearScanIndex | Exact | Heap top-k over every stored place, optionally parallel |

pub mod linear;

pub use linear::LinearScanIndex;
