//! Validation reporter backed by `tracing`
//!
//! Schema errors and failed rows are logged at `warn`, warnings at `info`.

use places_domain::ports::infrastructure::ValidationReporter;
use places_domain::value_objects::ValidationIssue;
use tracing::{info, warn};

/// Reporter emitting one structured event per issue
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingValidationReporter;

impl TracingValidationReporter {
    /// Create a reporter
    pub fn new() -> Self {
        Self
    }
}

impl ValidationReporter for TracingValidationReporter {
    fn report_issues(&self, row: usize, issues: &[ValidationIssue]) {
        for issue in issues {
            if issue.is_error() {
                warn!(
                    row,
                    field = %issue.field,
                    reason = issue.reason.code(),
                    message = %issue.message,
                    "Schema error"
                );
            } else {
                info!(
                    row,
                    field = %issue.field,
                    reason = issue.reason.code(),
                    message = %issue.message,
                    "Schema warning"
                );
            }
        }
    }

    fn report_failure(&self, row: usize, message: &str) {
        warn!(row, message, "Row skipped");
    }
}
