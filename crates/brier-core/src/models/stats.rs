use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use super::category::Category;

/// Headline counts over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionStats {
    pub total: usize,
    pub resolved: usize,
    pub pending: usize,
    /// Percent correct among resolved predictions, 0 when none.
    pub accuracy: f64,
    /// Record count per category, resolved or not.
    pub by_category: BTreeMap<Category, usize>,
}

/// Per-category scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryStats {
    pub category: Category,
    pub total: usize,
    pub resolved: usize,
    /// `None` until the category has a resolved prediction.
    pub accuracy: Option<f64>,
    pub brier: Option<f64>,
}
