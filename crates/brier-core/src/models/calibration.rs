use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the calibration curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BucketResult {
    /// Display label, e.g. `"21-40"`.
    pub range: String,
    pub lower: u8,
    pub upper: u8,
    /// Reference accuracy for the bucket: lower bound + 10.
    pub expected: u8,
    /// Observed accuracy in percent; `None` for an empty bucket.
    pub observed: Option<f64>,
    pub correct: usize,
    pub count: usize,
}

impl BucketResult {
    /// |expected - observed|, `None` for an empty bucket.
    pub fn error(&self) -> Option<f64> {
        self.observed
            .map(|observed| (f64::from(self.expected) - observed).abs())
    }
}

/// Calibration curve plus its aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalibrationSummary {
    pub buckets: Vec<BucketResult>,
    /// 0–100, higher is better; `None` when no bucket has data.
    pub score: Option<u8>,
}
