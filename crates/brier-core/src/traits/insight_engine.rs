use chrono::{DateTime, Utc};

use crate::models::{InsightOutcome, PeriodicReport, PredictionRecord, ReportPeriod};

/// Read-only analytics over a snapshot of predictions.
pub trait IInsightEngine: Send + Sync {
    /// Run the gated insights pipeline.
    fn analyze(&self, records: &[PredictionRecord]) -> InsightOutcome;

    /// Score the predictions created in the trailing `period` before `now`.
    fn periodic_report(
        &self,
        records: &[PredictionRecord],
        period: ReportPeriod,
        now: DateTime<Utc>,
    ) -> PeriodicReport;
}
