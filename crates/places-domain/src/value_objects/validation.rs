//! Validation value objects
//!
//! Structured outcome of checking a place against the schema. Violations are
//! data, not errors, so a batch can collect every per-row result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks insertion into the store
    Error,
    /// Reported alongside a successful insertion
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// Reason a field was flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Required field is absent or blank
    MissingField,
    /// Number outside its allowed range, or not finite
    OutOfRange,
    /// Not an absolute URI with scheme and host
    MalformedUri,
    /// Embedding shorter than the minimum length
    VectorTooShort,
    /// Embedding length differs from the expected dimensionality
    DimensionMismatch,
    /// Embedding holds NaN or infinite components
    NonFiniteVector,
    /// Listing id repeated within the same place
    DuplicateId,
    /// Text longer than the soft limit
    TextTooLong,
}

impl ReasonCode {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::OutOfRange => "out_of_range",
            Self::MalformedUri => "malformed_uri",
            Self::VectorTooShort => "vector_too_short",
            Self::DimensionMismatch => "dimension_mismatch",
            Self::NonFiniteVector => "non_finite_vector",
            Self::DuplicateId => "duplicate_id",
            Self::TextTooLong => "text_too_long",
        }
    }

    /// Severity attached to the reason
    pub fn severity(self) -> Severity {
        match self {
            Self::TextTooLong => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Value Object: Validation Issue
///
/// One violated rule. `field` is a path such as `latitude` or
/// `airbnb_listings[2].rating`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Offending field path
    pub field: String,
    /// Rule that was violated
    pub reason: ReasonCode,
    /// Blocking or not
    pub severity: Severity,
    /// Human-readable detail
    pub message: String,
}

impl ValidationIssue {
    /// Create an issue whose severity follows from its reason
    pub fn new(field: impl Into<String>, reason: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason,
            severity: reason.severity(),
            message: message.into(),
        }
    }

    /// Whether the issue blocks insertion
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.severity, self.field, self.message, self.reason
        )
    }
}

/// Value Object: Validation Result
///
/// Ordered issues found for one place. A result with only warnings is still
/// valid; only error-severity issues block insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a result from collected issues
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// No error-severity issue
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(ValidationIssue::is_error)
    }

    /// No issue at all, warnings included
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether any warning was raised
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// All issues in rule order
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Error-severity issues
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    /// Warning-severity issues
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    /// Consume the result, yielding the issues
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}
