use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::bias::ConfidenceBias;
use super::calibration::CalibrationSummary;
use super::pattern::PatternInsight;
use super::recommendation::Recommendation;

/// Full output of the insights pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsightReport {
    /// Number of resolved predictions analyzed.
    pub resolved: usize,
    pub brier_score: Option<f64>,
    /// Percent of resolved predictions that were correct.
    pub accuracy: f64,
    pub calibration: CalibrationSummary,
    pub bias: ConfidenceBias,
    pub patterns: Vec<PatternInsight>,
    pub recommendations: Vec<Recommendation>,
}

/// Returned instead of a report while too few predictions are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LockedInsights {
    pub resolved: usize,
    pub required: usize,
    pub remaining: usize,
    pub message: String,
}

/// Result of running the gated insights pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum InsightOutcome {
    Locked(LockedInsights),
    Ready(Box<InsightReport>),
}

impl InsightOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, InsightOutcome::Ready(_))
    }

    pub fn report(&self) -> Option<&InsightReport> {
        match self {
            InsightOutcome::Ready(report) => Some(report),
            InsightOutcome::Locked(_) => None,
        }
    }

    pub fn locked(&self) -> Option<&LockedInsights> {
        match self {
            InsightOutcome::Locked(locked) => Some(locked),
            InsightOutcome::Ready(_) => None,
        }
    }
}
