//! Minimum-data gate in front of the insights pipeline.

use brier_core::models::{LockedInsights, PredictionRecord};

/// `Some(locked)` while fewer than `required` records are resolved.
pub fn check(records: &[PredictionRecord], required: usize) -> Option<LockedInsights> {
    let resolved = records.iter().filter(|r| r.is_resolved()).count();
    if resolved >= required {
        return None;
    }
    let remaining = required - resolved;
    let noun = if remaining == 1 { "prediction" } else { "predictions" };
    Some(LockedInsights {
        resolved,
        required,
        remaining,
        message: format!(
            "Resolve at least {required} predictions to unlock AI insights ({remaining} more {noun} to go)"
        ),
    })
}
