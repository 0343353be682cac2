use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use super::category::Category;

/// Length of a periodic report window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Week,
    Month,
}

impl ReportPeriod {
    pub fn label(self) -> &'static str {
        match self {
            ReportPeriod::Week => "Week",
            ReportPeriod::Month => "Month",
        }
    }
}

/// Scoring over a trailing window of recently created predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodicReport {
    pub period: ReportPeriod,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub total: usize,
    pub resolved: usize,
    pub pending: usize,
    pub brier_score: Option<f64>,
    pub accuracy: f64,
    pub by_category: BTreeMap<Category, usize>,
    pub insights: Vec<String>,
}
