use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// What a mined pattern is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternKind {
    /// Recent stated probabilities are noticeably higher than before.
    MorePessimistic { recent_mean: f64, prior_mean: f64 },
    /// Recent stated probabilities are noticeably lower than before.
    MoreOptimistic { recent_mean: f64, prior_mean: f64 },
    CategoryStrength { category: Category, accuracy: f64 },
    CategoryWeakness { category: Category, accuracy: f64 },
}

/// A mined pattern with its display message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternInsight {
    pub kind: PatternKind,
    pub message: String,
}

impl PatternInsight {
    pub fn new(kind: PatternKind) -> Self {
        let message = match &kind {
            PatternKind::MorePessimistic { .. } => {
                "You've become more pessimistic recently".to_string()
            }
            PatternKind::MoreOptimistic { .. } => {
                "You've become more optimistic recently".to_string()
            }
            PatternKind::CategoryStrength { category, .. } => {
                format!("You're great at {category} predictions")
            }
            PatternKind::CategoryWeakness { category, .. } => {
                format!("You struggle with {category} predictions")
            }
        };
        Self { kind, message }
    }

    pub fn is_pessimistic(&self) -> bool {
        matches!(self.kind, PatternKind::MorePessimistic { .. })
    }
}
