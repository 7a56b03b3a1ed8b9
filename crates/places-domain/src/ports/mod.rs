//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the layers that implement them.
//!
//! ## Organization
//!
//! - **providers/** - storage, search and row IO ports
//! - **infrastructure/** - reporting ports

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::ValidationReporter;
pub use providers::{PlaceStore, RowSink, RowSource, SimilarityIndex};
