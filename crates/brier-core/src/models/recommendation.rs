use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Presentation class of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Tip,
    Action,
}

/// An advisory message surfaced with the insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
}

impl Recommendation {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}
