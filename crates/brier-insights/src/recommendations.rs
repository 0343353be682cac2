//! Advisory messages derived from the calibration, bias and pattern results.
//!
//! Every matching rule fires, in a fixed order, and the list always ends
//! with the "keep tracking" action.

use brier_core::config::InsightsConfig;
use brier_core::models::{
    CalibrationSummary, ConfidenceBias, PatternInsight, Recommendation, Severity,
};

pub const LOW_CALIBRATION: &str =
    "Your predictions don't match reality well. Try being less certain.";
pub const OVERCONFIDENT: &str =
    "High confidence predictions often fail. Consider lowering them.";
pub const UNDERCONFIDENT: &str = "You're more accurate than you think. Trust yourself more!";
pub const FEARS_UNREALIZED: &str =
    "Recent fears haven't materialized. You might be overly worried.";
pub const KEEP_TRACKING: &str = "Continue tracking to get more accurate AI insights";

/// Generate recommendations from the analyzer results.
pub fn generate(
    calibration: &CalibrationSummary,
    bias: &ConfidenceBias,
    patterns: &[PatternInsight],
    config: &InsightsConfig,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if calibration
        .score
        .is_some_and(|score| score < config.calibration_warning_score)
    {
        recs.push(Recommendation::new(Severity::Warning, LOW_CALIBRATION));
    }

    if bias.overconfident {
        recs.push(Recommendation::new(Severity::Warning, OVERCONFIDENT));
    }

    if bias.underconfident {
        recs.push(Recommendation::new(Severity::Tip, UNDERCONFIDENT));
    }

    if patterns.iter().any(PatternInsight::is_pessimistic) {
        recs.push(Recommendation::new(Severity::Tip, FEARS_UNREALIZED));
    }

    recs.push(Recommendation::new(Severity::Action, KEEP_TRACKING));
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use brier_core::models::{BiasVerdict, PatternKind};

    fn calibration(score: Option<u8>) -> CalibrationSummary {
        CalibrationSummary {
            buckets: Vec::new(),
            score,
        }
    }

    fn bias(overconfident: bool, underconfident: bool) -> ConfidenceBias {
        ConfidenceBias {
            overconfident,
            underconfident,
            high_accuracy: 1.0,
            low_accuracy: 0.0,
            high_accuracy_pct: 100,
            high_count: 0,
            low_count: 0,
            verdict: BiasVerdict::WellCalibrated,
            message: BiasVerdict::WellCalibrated.message().to_string(),
        }
    }

    #[test]
    fn healthy_results_only_keep_tracking() {
        let recs = generate(
            &calibration(Some(90)),
            &bias(false, false),
            &[],
            &InsightsConfig::default(),
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Action);
        assert_eq!(recs[0].message, KEEP_TRACKING);
    }

    #[test]
    fn every_rule_fires_in_order() {
        let pessimistic = PatternInsight::new(PatternKind::MorePessimistic {
            recent_mean: 80.0,
            prior_mean: 40.0,
        });
        let recs = generate(
            &calibration(Some(59)),
            &bias(true, true),
            &[pessimistic],
            &InsightsConfig::default(),
        );
        let messages: Vec<&str> = recs.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                LOW_CALIBRATION,
                OVERCONFIDENT,
                UNDERCONFIDENT,
                FEARS_UNREALIZED,
                KEEP_TRACKING
            ]
        );
        let severities: Vec<Severity> = recs.iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Warning,
                Severity::Warning,
                Severity::Tip,
                Severity::Tip,
                Severity::Action
            ]
        );
    }

    #[test]
    fn warning_threshold_is_exclusive() {
        let recs = generate(
            &calibration(Some(60)),
            &bias(false, false),
            &[],
            &InsightsConfig::default(),
        );
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn missing_score_does_not_warn() {
        let recs = generate(
            &calibration(None),
            &bias(false, false),
            &[],
            &InsightsConfig::default(),
        );
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn optimistic_drift_is_not_a_fear_tip() {
        let optimistic = PatternInsight::new(PatternKind::MoreOptimistic {
            recent_mean: 20.0,
            prior_mean: 60.0,
        });
        let recs = generate(
            &calibration(Some(90)),
            &bias(false, false),
            &[optimistic],
            &InsightsConfig::default(),
        );
        assert_eq!(recs.len(), 1);
    }
}
