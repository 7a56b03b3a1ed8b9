use crate::value_objects::ValidationIssue;

/// Validation Reporting Interface
///
/// Receives the outcome of each row that did not pass cleanly. Reporters must
/// not fail: a broken sink cannot abort a batch.
pub trait ValidationReporter: Send + Sync {
    /// Ordered schema issues of one row (errors and warnings)
    fn report_issues(&self, row: usize, issues: &[ValidationIssue]);

    /// A row that never became a record, or that the store refused
    fn report_failure(&self, row: usize, message: &str);
}
