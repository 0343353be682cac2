use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the gated insights pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Resolved predictions required before insights unlock.
    pub min_resolved: usize,
    /// Probabilities at or above this count as high confidence.
    pub high_confidence_threshold: u8,
    /// Probabilities at or below this count as low confidence.
    pub low_confidence_threshold: u8,
    /// Accuracy fraction separating biased from calibrated subsets.
    pub bias_accuracy_threshold: f64,
    /// Minimum subset size before a bias flag may be raised.
    pub bias_min_sample: usize,
    /// Size of the recent and prior windows for drift detection.
    pub drift_window: usize,
    /// Both drift windows need at least this many records.
    pub drift_min_window: usize,
    /// Mean-probability shift (points) that counts as drift.
    pub drift_delta: f64,
    /// Resolved predictions a category needs before it is judged.
    pub category_min_sample: usize,
    /// Category accuracy (percent) at or above which it is a strength.
    pub strong_category_accuracy: f64,
    /// Category accuracy (percent) at or below which it is a weakness.
    pub weak_category_accuracy: f64,
    /// Calibration scores below this trigger a warning.
    pub calibration_warning_score: u8,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            min_resolved: defaults::DEFAULT_MIN_RESOLVED,
            high_confidence_threshold: defaults::DEFAULT_HIGH_CONFIDENCE_THRESHOLD,
            low_confidence_threshold: defaults::DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            bias_accuracy_threshold: defaults::DEFAULT_BIAS_ACCURACY_THRESHOLD,
            bias_min_sample: defaults::DEFAULT_BIAS_MIN_SAMPLE,
            drift_window: defaults::DEFAULT_DRIFT_WINDOW,
            drift_min_window: defaults::DEFAULT_DRIFT_MIN_WINDOW,
            drift_delta: defaults::DEFAULT_DRIFT_DELTA,
            category_min_sample: defaults::DEFAULT_CATEGORY_MIN_SAMPLE,
            strong_category_accuracy: defaults::DEFAULT_STRONG_CATEGORY_ACCURACY,
            weak_category_accuracy: defaults::DEFAULT_WEAK_CATEGORY_ACCURACY,
            calibration_warning_score: defaults::DEFAULT_CALIBRATION_WARNING_SCORE,
        }
    }
}
