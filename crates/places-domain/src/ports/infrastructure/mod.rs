//! Infrastructure Ports
//!
//! Contracts for cross-cutting collaborators such as result reporting.

/// Validation reporting port
pub mod reporting;

pub use reporting::ValidationReporter;
