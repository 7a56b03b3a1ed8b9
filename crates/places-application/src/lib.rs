//! Application Layer - Places Dataset
//!
//! Turns raw rows into validated places and orchestrates the stores and
//! indexes that hold and rank them.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the pure domain services (row codec, schema validator)
//! - Contains use case implementations (ingestion, search, export)
//! - Declares the provider registries that backends register into
//! - Has no dependency on file formats, configuration or concrete backends
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `places-domain`: entities, value objects and port traits
//! - Pure Rust libraries for serialization, URI parsing and text handling

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
