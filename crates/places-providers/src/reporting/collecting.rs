//! Validation reporter that keeps every report in memory

use parking_lot::Mutex;
use places_domain::ports::infrastructure::ValidationReporter;
use places_domain::value_objects::ValidationIssue;

/// One call received by a [`CollectingReporter`]
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Schema issues of a row
    Issues {
        /// Row position in its source
        row: usize,
        /// Issues in column order
        issues: Vec<ValidationIssue>,
    },
    /// A row that was skipped before or at insertion
    Failure {
        /// Row position in its source
        row: usize,
        /// Failure description
        message: String,
    },
}

impl Report {
    /// Row the report is about
    pub fn row(&self) -> usize {
        match self {
            Self::Issues { row, .. } | Self::Failure { row, .. } => *row,
        }
    }
}

/// Reporter collecting reports in arrival order
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Mutex<Vec<Report>>,
}

impl CollectingReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every report so far
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Issues reported for a row
    pub fn issues_for(&self, row: usize) -> Vec<ValidationIssue> {
        self.reports
            .lock()
            .iter()
            .filter_map(|report| match report {
                Report::Issues { row: r, issues } if *r == row => Some(issues.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Failures as (row, message) pairs
    pub fn failures(&self) -> Vec<(usize, String)> {
        self.reports
            .lock()
            .iter()
            .filter_map(|report| match report {
                Report::Failure { row, message } => Some((*row, message.clone())),
                Report::Issues { .. } => None,
            })
            .collect()
    }

    /// Number of reports
    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    /// Whether nothing was reported
    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Drop every report
    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl ValidationReporter for CollectingReporter {
    fn report_issues(&self, row: usize, issues: &[ValidationIssue]) {
        self.reports.lock().push(Report::Issues {
            row,
            issues: issues.to_vec(),
        });
    }

    fn report_failure(&self, row: usize, message: &str) {
        self.reports.lock().push(Report::Failure {
            row,
            message: message.to_string(),
        });
    }
}
