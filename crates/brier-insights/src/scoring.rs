//! Brier score, accuracy, and collection statistics.

use std::collections::BTreeMap;

use brier_core::models::{Category, CategoryStats, PredictionRecord, PredictionStats};

/// Mean of `(p/100 - outcome)^2` over resolved records.
///
/// `None` when nothing is resolved. Always within [0, 1].
pub fn brier_score(records: &[PredictionRecord]) -> Option<f64> {
    brier_of(records.iter())
}

/// Percent of resolved records that are correct, 0.0 when none are resolved.
pub fn accuracy(records: &[PredictionRecord]) -> f64 {
    accuracy_of(records.iter()).unwrap_or(0.0)
}

pub(crate) fn brier_of<'a>(records: impl Iterator<Item = &'a PredictionRecord>) -> Option<f64> {
    let (sum, count) = records
        .filter_map(PredictionRecord::squared_error)
        .fold((0.0, 0usize), |(sum, count), err| (sum + err, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Percent correct over the resolved subset, `None` when it is empty.
pub(crate) fn accuracy_of<'a>(records: impl Iterator<Item = &'a PredictionRecord>) -> Option<f64> {
    let (correct, resolved) = records
        .filter(|r| r.is_resolved())
        .fold((0usize, 0usize), |(correct, resolved), r| {
            (correct + usize::from(r.is_correct()), resolved + 1)
        });
    (resolved > 0).then(|| correct as f64 / resolved as f64 * 100.0)
}

/// Record count per category. Only categories that occur get an entry.
pub fn count_by_category(records: &[PredictionRecord]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.category).or_insert(0) += 1;
    }
    counts
}

/// Headline counts over every record, resolved or not.
pub fn summarize(records: &[PredictionRecord]) -> PredictionStats {
    let resolved = records.iter().filter(|r| r.is_resolved()).count();
    PredictionStats {
        total: records.len(),
        resolved,
        pending: records.len() - resolved,
        accuracy: accuracy(records),
        by_category: count_by_category(records),
    }
}

/// Per-category scoring for every category, in definition order.
pub fn category_breakdown(records: &[PredictionRecord]) -> Vec<CategoryStats> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let in_category = || records.iter().filter(move |r| r.category == category);
            CategoryStats {
                category,
                total: in_category().count(),
                resolved: in_category().filter(|r| r.is_resolved()).count(),
                accuracy: accuracy_of(in_category()),
                brier: brier_of(in_category()),
            }
        })
        .collect()
}
