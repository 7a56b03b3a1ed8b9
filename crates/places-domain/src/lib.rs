//! # Places Domain
//!
//! Core types of the places dataset: the [`Place`](entities::Place) record and
//! its nested [`Listing`](entities::Listing)s, the value objects exchanged
//! between layers, the domain [`Error`], and the port traits that providers
//! implement.
//!
//! This crate has no knowledge of file formats, configuration or logging.

/// Domain layer constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error handling types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::{Listing, Place};
pub use error::{Error, Result};
pub use value_objects::{
    IngestionSummary, PlaceSnapshot, RawRow, RawValue, ReasonCode, ScoredPlace, Severity,
    ValidationIssue, ValidationResult,
};
