//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`RawRow`] | Undecoded flat or columnar record |
//! | [`ValidationResult`] | Ordered schema issues of one place |
//! | [`ScoredPlace`] | Ranked result of a similarity query |
//! | [`PlaceSnapshot`] | Consistent view of a store |
//! | [`IngestionSummary`] | Per-batch accounting of rows |

/// Ingestion outcome value objects
pub mod ingestion;
/// Raw row value objects
pub mod raw_row;
/// Search-related value objects
pub mod search;
/// Store snapshot value objects
pub mod snapshot;
/// Validation value objects
pub mod validation;

pub use ingestion::{FailureKind, IngestionSummary, RowFailure};
pub use raw_row::{RawRow, RawValue};
pub use search::ScoredPlace;
pub use snapshot::{PlaceScan, PlaceSnapshot, StoreStats};
pub use validation::{ReasonCode, Severity, ValidationIssue, ValidationResult};
