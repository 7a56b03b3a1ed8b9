//! Ingestion Service Use Case
//!
//! Batch ingestion of raw rows: decode, validate, insert. A bad row never
//! aborts the batch; it is reported and counted in the [`IngestionSummary`].

use std::sync::Arc;

use places_domain::entities::Place;
use places_domain::ports::infrastructure::ValidationReporter;
use places_domain::ports::providers::{PlaceStore, RowSource};
use places_domain::value_objects::{FailureKind, IngestionSummary, RowFailure, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain_services::{RowCodec, SchemaValidator};

/// What to do with a row whose only issues are warnings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningPolicy {
    /// Insert the row and count it as warned
    #[default]
    Accept,
    /// Skip the row as a validation failure
    Reject,
}

/// Outcome of one row, before it is folded into the summary
enum RowOutcome {
    Accepted { warned: bool },
    Failed(RowFailure),
}

/// Ingestion service implementation - decodes, validates and stores rows
pub struct IngestionService {
    store: Arc<dyn PlaceStore>,
    codec: RowCodec,
    validator: SchemaValidator,
    reporter: Arc<dyn ValidationReporter>,
    warning_policy: WarningPolicy,
}

impl IngestionService {
    /// Create new ingestion service with injected dependencies
    pub fn new(
        store: Arc<dyn PlaceStore>,
        validator: SchemaValidator,
        reporter: Arc<dyn ValidationReporter>,
    ) -> Self {
        Self {
            store,
            codec: RowCodec::new(),
            validator,
            reporter,
            warning_policy: WarningPolicy::default(),
        }
    }

    /// Set the warning policy
    pub fn with_warning_policy(mut self, policy: WarningPolicy) -> Self {
        self.warning_policy = policy;
        self
    }

    /// Active warning policy
    pub fn warning_policy(&self) -> WarningPolicy {
        self.warning_policy
    }

    /// Store the service writes into
    pub fn store(&self) -> &Arc<dyn PlaceStore> {
        &self.store
    }

    /// Ingest every row of a source
    ///
    /// Rows are numbered from 0 in source order. Unreadable rows count as
    /// decode failures.
    pub fn ingest<S: RowSource>(&self, source: S) -> IngestionSummary {
        let mut summary = IngestionSummary::default();

        for (row, item) in source.enumerate() {
            summary.total += 1;
            let outcome = match item.and_then(|raw| self.codec.decode_at(row, &raw)) {
                Ok(place) => self.admit(row, place),
                Err(e) => {
                    let message = e.at_row(row).to_string();
                    self.reporter.report_failure(row, &message);
                    RowOutcome::Failed(RowFailure {
                        row,
                        kind: FailureKind::Decode,
                        message,
                        issues: Vec::new(),
                    })
                }
            };
            record(&mut summary, outcome);
        }

        log_summary(&summary);
        summary
    }

    /// Ingest already-typed places
    pub fn ingest_places<I>(&self, places: I) -> IngestionSummary
    where
        I: IntoIterator<Item = Place>,
    {
        let mut summary = IngestionSummary::default();

        for (row, place) in places.into_iter().enumerate() {
            summary.total += 1;
            let outcome = self.admit(row, place);
            record(&mut summary, outcome);
        }

        log_summary(&summary);
        summary
    }

    /// Validate a single place against the current store, without inserting
    pub fn check(&self, place: &Place) -> ValidationResult {
        self.validator.validate(place, self.store.dimensions())
    }

    /// Validate and insert one decoded place
    fn admit(&self, row: usize, place: Place) -> RowOutcome {
        let result = self.check(&place);
        if !result.issues().is_empty() {
            self.reporter.report_issues(row, result.issues());
        }

        let blocked_by_policy =
            self.warning_policy == WarningPolicy::Reject && result.has_warnings();
        if !result.is_valid() || blocked_by_policy {
            let message = match result.errors().count() {
                0 => "rejected for warnings".to_string(),
                n => format!("{n} schema error(s)"),
            };
            debug!(row, %message, "Row failed validation");
            return RowOutcome::Failed(RowFailure {
                row,
                kind: FailureKind::Validation,
                message,
                issues: result.into_issues(),
            });
        }

        let warned = result.has_warnings();
        match self.store.insert(place) {
            Ok(_) => RowOutcome::Accepted { warned },
            Err(e) => {
                let message = e.to_string();
                self.reporter.report_failure(row, &message);
                RowOutcome::Failed(RowFailure {
                    row,
                    kind: FailureKind::Rejected,
                    message,
                    issues: Vec::new(),
                })
            }
        }
    }
}

fn record(summary: &mut IngestionSummary, outcome: RowOutcome) {
    match outcome {
        RowOutcome::Accepted { warned } => {
            summary.accepted += 1;
            if warned {
                summary.warned += 1;
            }
        }
        RowOutcome::Failed(failure) => summary.record_failure(failure),
    }
}

fn log_summary(summary: &IngestionSummary) {
    info!(
        total = summary.total,
        accepted = summary.accepted,
        warned = summary.warned,
        decode_failed = summary.decode_failed,
        validation_failed = summary.validation_failed,
        rejected = summary.rejected,
        "Ingestion finished"
    );
}
