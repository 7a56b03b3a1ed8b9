//! # Places
//!
//! Schema-validating ingestion and similarity search for the places dataset:
//! flat rows with JSON-bearing sub-fields and fixed-length embeddings.
//!
//! ## Features
//!
//! - **Row Codec**: CSV text rows and JSON Lines rows to typed [`Place`]s and back
//! - **Schema Validator**: every rule checked, every issue reported in column order
//! - **Dataset Store**: append-only, one dimensionality per store, consistent snapshots
//! - **Similarity Search**: exact cosine ranking with insertion-order tie-break
//!
//! ## Example
//!
//! ```ignore
//! use places::prelude::*;
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(config.logging.clone())?;
//! let context = bootstrap(&config)?;
//!
//! let source = CsvRowSource::from_path("places.csv", config.io.csv_options()?)?;
//! let summary = context.ingestion().ingest(source);
//! println!("{} of {} rows accepted", summary.accepted, summary.total);
//!
//! for hit in context.search().similar_to("Rajasthan", "Jaipur", Some(5))? {
//!     println!("{:.3} {}", hit.score, hit.place.city_name);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, errors and port traits
//! - `application` - row codec, schema validator, use cases, provider registries
//! - `providers` - in-memory store, linear index, CSV/JSONL rows, reporters
//! - `infrastructure` - configuration, logging and bootstrap

/// Domain layer - entities, value objects, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use places_domain::*;
}

/// Application layer - domain services, use cases and registries
pub mod application {
    pub use places_application::*;
}

/// Provider implementations
pub mod providers {
    pub use places_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use places_infrastructure::*;
}

/// Everything a typical caller needs
pub mod prelude {
    pub use places_application::domain_services::{RowCodec, RowFormat, SchemaValidator};
    pub use places_application::use_cases::{
        ExportService, IngestionService, SearchService, WarningPolicy,
    };
    pub use places_domain::ports::infrastructure::ValidationReporter;
    pub use places_domain::ports::providers::{PlaceStore, RowSink, RowSource, SimilarityIndex};
    pub use places_domain::{
        Error, IngestionSummary, Listing, Place, RawRow, RawValue, ReasonCode, Result,
        ScoredPlace, Severity, ValidationIssue, ValidationResult,
    };
    pub use places_infrastructure::{
        AppConfig, ConfigLoader, PlacesContext, bootstrap, bootstrap_with_reporter, init_logging,
    };
    pub use places_providers::place_store::InMemoryPlaceStore;
    pub use places_providers::reporting::{CollectingReporter, TracingValidationReporter};
    pub use places_providers::rows::{
        CsvOptions, CsvRowSink, CsvRowSource, JsonLinesRowSink, JsonLinesRowSource,
    };
    pub use places_providers::similarity::LinearScanIndex;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the composition root at the crate root
pub use infrastructure::{PlacesContext, bootstrap};
