use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::probability::Probability;
use crate::errors::{StoreError, ValidationError};

/// Lifecycle state of a prediction.
///
/// Resolution data only exists on the `Resolved` variant, so a pending
/// record can never carry an outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionStatus {
    Pending,
    Resolved {
        /// `true` when the feared outcome happened.
        outcome: bool,
        notes: Option<String>,
        resolved_at: DateTime<Utc>,
    },
}

/// User input for a new prediction, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPrediction {
    /// What the user is about to do.
    pub event: String,
    /// What they are afraid will happen.
    pub fear: String,
    pub probability: Probability,
    pub category: Category,
}

impl NewPrediction {
    pub fn new(
        event: impl Into<String>,
        fear: impl Into<String>,
        probability: Probability,
        category: Category,
    ) -> Self {
        Self {
            event: event.into(),
            fear: fear.into(),
            probability,
            category,
        }
    }

    /// Reject blank `event` or `fear` text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.event.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "event".to_string(),
            });
        }
        if self.fear.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "fear".to_string(),
            });
        }
        Ok(())
    }
}

/// A logged prediction about a feared outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionRecord {
    /// UUID v4 identifier.
    pub id: String,
    pub event: String,
    pub fear: String,
    pub probability: Probability,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub status: PredictionStatus,
}

impl PredictionRecord {
    /// Build a pending record from validated input.
    pub fn new(
        id: impl Into<String>,
        input: NewPrediction,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        input.validate()?;
        Ok(Self {
            id: id.into(),
            event: input.event,
            fear: input.fear,
            probability: input.probability,
            category: input.category,
            created_at,
            status: PredictionStatus::Pending,
        })
    }

    /// Build a pending record with a freshly generated id.
    pub fn create(input: NewPrediction, created_at: DateTime<Utc>) -> Result<Self, ValidationError> {
        Self::new(uuid::Uuid::new_v4().to_string(), input, created_at)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.status, PredictionStatus::Resolved { .. })
    }

    pub fn is_pending(&self) -> bool {
        !self.is_resolved()
    }

    /// Outcome of a resolved record, `None` while pending.
    pub fn outcome(&self) -> Option<bool> {
        match self.status {
            PredictionStatus::Resolved { outcome, .. } => Some(outcome),
            PredictionStatus::Pending => None,
        }
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            PredictionStatus::Resolved { resolved_at, .. } => Some(resolved_at),
            PredictionStatus::Pending => None,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        match &self.status {
            PredictionStatus::Resolved { notes, .. } => notes.as_deref(),
            PredictionStatus::Pending => None,
        }
    }

    /// Whether the stated probability pointed the right way.
    ///
    /// A call is correct when the fear happened and was rated above 50, or
    /// did not happen and was rated below 50. A 50 is never correct, and a
    /// pending record is never correct.
    pub fn is_correct(&self) -> bool {
        let p = self.probability.percent();
        match self.outcome() {
            Some(true) => p > Probability::EVEN,
            Some(false) => p < Probability::EVEN,
            None => false,
        }
    }

    /// `(p - o)^2` for a resolved record.
    pub fn squared_error(&self) -> Option<f64> {
        self.outcome().map(|outcome| {
            let o = if outcome { 1.0 } else { 0.0 };
            (self.probability.fraction() - o).powi(2)
        })
    }

    /// Apply the one-way pending → resolved transition.
    /// Blank notes are stored as `None`.
    pub fn resolve(
        &mut self,
        outcome: bool,
        notes: Option<String>,
        resolved_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        if self.is_resolved() {
            return Err(StoreError::AlreadyResolved {
                id: self.id.clone(),
            });
        }
        self.status = PredictionStatus::Resolved {
            outcome,
            notes: notes.filter(|n| !n.trim().is_empty()),
            resolved_at,
        };
        Ok(())
    }
}
