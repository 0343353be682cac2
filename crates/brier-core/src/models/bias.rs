use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which advisory the bias detector settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BiasVerdict {
    Overconfident,
    Underconfident,
    WellCalibrated,
}

impl BiasVerdict {
    pub fn message(self) -> &'static str {
        match self {
            BiasVerdict::Overconfident => "You often predict high confidence but are wrong",
            BiasVerdict::Underconfident => "You're underconfident - trust your gut more!",
            BiasVerdict::WellCalibrated => "Your confidence matches your accuracy",
        }
    }
}

/// Over/underconfidence analysis over the extreme-probability subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceBias {
    pub overconfident: bool,
    pub underconfident: bool,
    /// Correct fraction of high-confidence calls, 1.0 when there are none.
    pub high_accuracy: f64,
    /// Correct fraction of low-confidence calls, 0.0 when there are none.
    pub low_accuracy: f64,
    /// `high_accuracy` as a rounded percentage.
    pub high_accuracy_pct: u8,
    pub high_count: usize,
    pub low_count: usize,
    pub verdict: BiasVerdict,
    pub message: String,
}
