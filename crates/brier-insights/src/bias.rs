//! Over/underconfidence over the extreme-probability subsets.

use brier_core::config::InsightsConfig;
use brier_core::models::{BiasVerdict, ConfidenceBias, PredictionRecord};

/// Correct fraction of a subset, `None` when it is empty.
fn correct_fraction(subset: &[&PredictionRecord]) -> Option<f64> {
    if subset.is_empty() {
        return None;
    }
    let correct = subset.iter().filter(|r| r.is_correct()).count();
    Some(correct as f64 / subset.len() as f64)
}

/// Compare the accuracy of high- and low-confidence calls against the
/// configured threshold.
///
/// Flags need a minimum subset size. The verdict follows the accuracy
/// threshold alone, so a small high subset that did badly still reads as
/// overconfident without raising the flag.
pub fn detect(records: &[PredictionRecord], config: &InsightsConfig) -> ConfidenceBias {
    let resolved: Vec<&PredictionRecord> = records.iter().filter(|r| r.is_resolved()).collect();

    let high: Vec<&PredictionRecord> = resolved
        .iter()
        .copied()
        .filter(|r| r.probability.percent() >= config.high_confidence_threshold)
        .collect();
    let low: Vec<&PredictionRecord> = resolved
        .iter()
        .copied()
        .filter(|r| r.probability.percent() <= config.low_confidence_threshold)
        .collect();

    let high_accuracy = correct_fraction(&high).unwrap_or(1.0);
    let low_accuracy = correct_fraction(&low).unwrap_or(0.0);

    let threshold = config.bias_accuracy_threshold;
    let overconfident = high_accuracy < threshold && high.len() >= config.bias_min_sample;
    let underconfident = low_accuracy > threshold && low.len() >= config.bias_min_sample;

    let verdict = if high_accuracy < threshold {
        BiasVerdict::Overconfident
    } else if low_accuracy > threshold {
        BiasVerdict::Underconfident
    } else {
        BiasVerdict::WellCalibrated
    };

    ConfidenceBias {
        overconfident,
        underconfident,
        high_accuracy,
        low_accuracy,
        high_accuracy_pct: (high_accuracy * 100.0).round() as u8,
        high_count: high.len(),
        low_count: low.len(),
        verdict,
        message: verdict.message().to_string(),
    }
}
