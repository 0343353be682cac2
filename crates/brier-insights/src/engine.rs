//! InsightEngine: implements IInsightEngine, runs the gated pipeline.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use brier_core::config::{BrierConfig, InsightsConfig, ReportConfig};
use brier_core::models::{
    ChallengeProgress, InsightOutcome, InsightReport, PeriodicReport, PredictionRecord,
    ReportPeriod,
};
use brier_core::traits::IInsightEngine;
use brier_core::{insights_span, report_span};

use crate::{bias, calibration, challenges, gate, patterns, recommendations, report, scoring};

/// The insights engine.
///
/// Pipeline: gate → calibration → bias → patterns → recommendations.
/// Holds only configuration, so one engine can serve any number of
/// snapshots concurrently.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    insights: InsightsConfig,
    report: ReportConfig,
}

impl InsightEngine {
    /// Create an engine with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from the insights and report sections of a config.
    pub fn with_config(config: &BrierConfig) -> Self {
        Self {
            insights: config.insights.clone(),
            report: config.report.clone(),
        }
    }

    pub fn insights_config(&self) -> &InsightsConfig {
        &self.insights
    }

    pub fn report_config(&self) -> &ReportConfig {
        &self.report
    }

    /// Run every analyzer without consulting the gate.
    pub fn build_report(&self, records: &[PredictionRecord]) -> InsightReport {
        let calibration = calibration::analyze(records);
        let bias = bias::detect(records, &self.insights);
        let patterns = patterns::mine(records, &self.insights);
        let recommendations =
            recommendations::generate(&calibration, &bias, &patterns, &self.insights);

        let report = InsightReport {
            resolved: records.iter().filter(|r| r.is_resolved()).count(),
            brier_score: scoring::brier_score(records),
            accuracy: scoring::accuracy(records),
            calibration,
            bias,
            patterns,
            recommendations,
        };

        debug!(
            brier_score = ?report.brier_score,
            accuracy = report.accuracy,
            calibration_score = ?report.calibration.score,
            overconfident = report.bias.overconfident,
            underconfident = report.bias.underconfident,
            patterns = report.patterns.len(),
            "insights computed"
        );
        report
    }

    /// Weekly report at `now`.
    pub fn weekly_report(&self, records: &[PredictionRecord], now: DateTime<Utc>) -> PeriodicReport {
        self.periodic_report(records, ReportPeriod::Week, now)
    }

    /// Monthly report at `now`.
    pub fn monthly_report(
        &self,
        records: &[PredictionRecord],
        now: DateTime<Utc>,
    ) -> PeriodicReport {
        self.periodic_report(records, ReportPeriod::Month, now)
    }

    /// Challenge progress over the last week.
    pub fn challenges(
        &self,
        records: &[PredictionRecord],
        now: DateTime<Utc>,
        streak: u32,
    ) -> ChallengeProgress {
        let progress = challenges::check_progress(records, now, streak);
        debug!(total_xp = progress.total_xp, "challenge progress");
        progress
    }
}

impl IInsightEngine for InsightEngine {
    fn analyze(&self, records: &[PredictionRecord]) -> InsightOutcome {
        let span = insights_span!(records.len());
        let _guard = span.enter();

        if let Some(locked) = gate::check(records, self.insights.min_resolved) {
            info!(
                resolved = locked.resolved,
                remaining = locked.remaining,
                "insights locked"
            );
            return InsightOutcome::Locked(locked);
        }

        info!("insights unlocked");
        InsightOutcome::Ready(Box::new(self.build_report(records)))
    }

    fn periodic_report(
        &self,
        records: &[PredictionRecord],
        period: ReportPeriod,
        now: DateTime<Utc>,
    ) -> PeriodicReport {
        let span = report_span!(period);
        let _guard = span.enter();

        let report = report::build_periodic(records, period, now, &self.report);
        debug!(
            total = report.total,
            resolved = report.resolved,
            brier_score = ?report.brier_score,
            "periodic report built"
        );
        report
    }
}
