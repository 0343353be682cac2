use serde::{Deserialize, Serialize};

use super::defaults;

/// Periodic report windows and insight thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub weekly_window_days: i64,
    pub monthly_window_days: i64,
    /// Brier scores below this earn a celebratory insight.
    pub celebrate_below: f64,
    /// Brier scores above this earn a cautionary insight.
    pub caution_above: f64,
    /// A category with more records than this gets called out.
    pub busy_category_count: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            weekly_window_days: defaults::DEFAULT_WEEKLY_WINDOW_DAYS,
            monthly_window_days: defaults::DEFAULT_MONTHLY_WINDOW_DAYS,
            celebrate_below: defaults::DEFAULT_CELEBRATE_BELOW,
            caution_above: defaults::DEFAULT_CAUTION_ABOVE,
            busy_category_count: defaults::DEFAULT_BUSY_CATEGORY_COUNT,
        }
    }
}
