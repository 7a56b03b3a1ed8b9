//! # Places Dataset - Provider Implementations
//!
//! Every user-selectable backend lives here. Each provider implements a port
//! (trait) defined in `places-domain`; stores and indexes also register
//! themselves in the `places-application` registries.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Place Store | `PlaceStore` | InMemory (`memory`) |
//! | Similarity Index | `SimilarityIndex` | LinearScan (`linear`) |
//! | Row IO | `RowSource` / `RowSink` | Csv, JsonLines |
//! | Reporting | `ValidationReporter` | Tracing, Collecting |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! places-providers = { version = "0.1", default-features = false, features = ["rows-jsonl"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use places_providers::place_store::InMemoryPlaceStore;
//! use places_providers::similarity::LinearScanIndex;
//! use places_providers::rows::CsvRowSource;
//! ```

// Re-export places-domain types commonly used with providers
pub use places_domain::error::{Error, Result};
pub use places_domain::ports::infrastructure::ValidationReporter;
pub use places_domain::ports::providers::{PlaceStore, RowSink, RowSource, SimilarityIndex};

/// Provider-specific constants
pub mod constants;

/// Place store implementations
///
/// Implements `PlaceStore` for storage backends.
pub mod place_store;

/// Similarity index implementations
///
/// Implements `SimilarityIndex` over any `PlaceStore`.
pub mod similarity;

/// Row source and sink implementations
pub mod rows;

/// Validation reporter implementations
pub mod reporting;

pub use place_store::InMemoryPlaceStore;
pub use reporting::{CollectingReporter, TracingValidationReporter};
pub use similarity::LinearScanIndex;
