//! Ingestion outcome value objects

use crate::value_objects::ValidationIssue;
use serde::{Deserialize, Serialize};

/// Why a row did not make it into the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The raw row could not be decoded
    Decode,
    /// The decoded place violated the schema
    Validation,
    /// The store refused the place (dimension mismatch at insert time)
    Rejected,
}

/// Value Object: Row Failure
///
/// Accounts for one row that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowFailure {
    /// Position of the row in its source
    pub row: usize,
    /// Failure stage
    pub kind: FailureKind,
    /// Human-readable reason
    pub message: String,
    /// Schema issues, for validation failures
    pub issues: Vec<ValidationIssue>,
}

/// Value Object: Ingestion Summary
///
/// Every processed row is counted exactly once in `accepted`,
/// `decode_failed`, `validation_failed` or `rejected`. `warned` counts the
/// accepted rows that carried warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestionSummary {
    /// Rows read from the source
    pub total: usize,
    /// Rows inserted into the store
    pub accepted: usize,
    /// Accepted rows with warnings
    pub warned: usize,
    /// Rows that failed to decode
    pub decode_failed: usize,
    /// Rows that failed validation
    pub validation_failed: usize,
    /// Rows refused by the store
    pub rejected: usize,
    /// Details of every skipped row, in source order
    pub failures: Vec<RowFailure>,
}

impl IngestionSummary {
    /// Rows that did not reach the store
    pub fn skipped(&self) -> usize {
        self.decode_failed + self.validation_failed + self.rejected
    }

    /// Whether every row was accepted
    pub fn is_clean(&self) -> bool {
        self.skipped() == 0
    }

    /// Record a skipped row
    pub fn record_failure(&mut self, failure: RowFailure) {
        match failure.kind {
            FailureKind::Decode => self.decode_failed += 1,
            FailureKind::Validation => self.validation_failed += 1,
            FailureKind::Rejected => self.rejected += 1,
        }
        self.failures.push(failure);
    }
}
