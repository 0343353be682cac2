//! Temporal drift and per-category strengths/weaknesses.

use brier_core::config::InsightsConfig;
use brier_core::models::{Category, PatternInsight, PatternKind, PredictionRecord};
use tracing::debug;

use crate::scoring::accuracy_of;

/// Resolved records in the order they were supplied. Callers hand records
/// over most-recent-first, as [`IPredictionStore::snapshot`] does.
///
/// [`IPredictionStore::snapshot`]: brier_core::traits::IPredictionStore::snapshot
fn resolved_in_order(records: &[PredictionRecord]) -> Vec<&PredictionRecord> {
    records.iter().filter(|r| r.is_resolved()).collect()
}

fn mean_probability(window: &[&PredictionRecord]) -> f64 {
    let sum: f64 = window
        .iter()
        .map(|r| f64::from(r.probability.percent()))
        .sum();
    sum / window.len() as f64
}

/// Compare the mean stated probability of the latest window against the
/// window before it.
fn temporal_drift(ordered: &[&PredictionRecord], config: &InsightsConfig) -> Option<PatternKind> {
    let window = config.drift_window;
    let recent = &ordered[..ordered.len().min(window)];
    let prior = &ordered[recent.len()..ordered.len().min(window * 2)];
    if recent.len() < config.drift_min_window || prior.len() < config.drift_min_window {
        return None;
    }

    let recent_mean = mean_probability(recent);
    let prior_mean = mean_probability(prior);
    debug!(recent_mean, prior_mean, "temporal drift windows");

    if recent_mean > prior_mean + config.drift_delta {
        Some(PatternKind::MorePessimistic {
            recent_mean,
            prior_mean,
        })
    } else if recent_mean < prior_mean - config.drift_delta {
        Some(PatternKind::MoreOptimistic {
            recent_mean,
            prior_mean,
        })
    } else {
        None
    }
}

fn category_patterns<'a>(
    ordered: &'a [&'a PredictionRecord],
    config: &InsightsConfig,
) -> impl Iterator<Item = PatternKind> + 'a {
    let strong = config.strong_category_accuracy;
    let weak = config.weak_category_accuracy;
    let min_sample = config.category_min_sample;

    Category::ALL.into_iter().filter_map(move |category| {
        let in_category: Vec<&PredictionRecord> = ordered
            .iter()
            .copied()
            .filter(|r| r.category == category)
            .collect();
        if in_category.len() < min_sample {
            return None;
        }
        let accuracy = accuracy_of(in_category.into_iter())?;
        if accuracy >= strong {
            Some(PatternKind::CategoryStrength { category, accuracy })
        } else if accuracy <= weak {
            Some(PatternKind::CategoryWeakness { category, accuracy })
        } else {
            None
        }
    })
}

/// Mine behavioural patterns from resolved predictions.
///
/// `records` must be ordered most-recent-first; the temporal windows are
/// cut from that order as given. The temporal pattern (at most one) comes
/// first, then category notes in category definition order.
pub fn mine(records: &[PredictionRecord], config: &InsightsConfig) -> Vec<PatternInsight> {
    let ordered = resolved_in_order(records);

    temporal_drift(&ordered, config)
        .into_iter()
        .chain(category_patterns(&ordered, config))
        .map(PatternInsight::new)
        .collect()
}
