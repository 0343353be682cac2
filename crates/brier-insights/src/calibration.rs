//! Calibration curve over five fixed probability buckets.
//!
//! Each bucket compares a reference accuracy (`lower + 10`) against the
//! observed accuracy of the resolved predictions that fall into it. The
//! score is 100 minus the mean absolute gap over non-empty buckets.

use brier_core::models::{BucketResult, CalibrationSummary, PredictionRecord, Probability};

/// Inclusive bucket bounds, ascending.
pub const BUCKETS: [(u8, u8); 5] = [(0, 20), (21, 40), (41, 60), (61, 80), (81, 100)];

/// Index into [`BUCKETS`]: the first bucket whose upper bound is >= `p`.
pub fn bucket_for(p: Probability) -> usize {
    let p = p.percent();
    BUCKETS
        .iter()
        .position(|&(_, upper)| p <= upper)
        .unwrap_or(BUCKETS.len() - 1)
}

/// Display label of a bucket, e.g. `"21-40"`.
pub fn bucket_label(index: usize) -> String {
    let (lower, upper) = BUCKETS[index];
    format!("{lower}-{upper}")
}

/// Build the calibration curve and its score.
///
/// Pending records are skipped. The result does not depend on input order.
pub fn analyze(records: &[PredictionRecord]) -> CalibrationSummary {
    let mut tallies = [(0usize, 0usize); BUCKETS.len()];
    for record in records.iter().filter(|r| r.is_resolved()) {
        let (correct, count) = &mut tallies[bucket_for(record.probability)];
        *count += 1;
        if record.is_correct() {
            *correct += 1;
        }
    }

    let buckets: Vec<BucketResult> = BUCKETS
        .iter()
        .zip(tallies)
        .enumerate()
        .map(|(index, (&(lower, upper), (correct, count)))| BucketResult {
            range: bucket_label(index),
            lower,
            upper,
            expected: lower + 10,
            observed: (count > 0).then(|| correct as f64 / count as f64 * 100.0),
            correct,
            count,
        })
        .collect();

    let score = score(&buckets);
    CalibrationSummary { buckets, score }
}

/// `round(max(0, 100 - mean error))` over non-empty buckets.
fn score(buckets: &[BucketResult]) -> Option<u8> {
    let errors: Vec<f64> = buckets.iter().filter_map(BucketResult::error).collect();
    if errors.is_empty() {
        return None;
    }
    let mean = errors.iter().sum::<f64>() / errors.len() as f64;
    Some((100.0 - mean).max(0.0).round() as u8)
}
