use serde::{Deserialize, Serialize};
use std::ops::Deref;
use ts_rs::TS;

use super::prediction::PredictionRecord;

/// Immutable, versioned view of the prediction collection.
///
/// The store publishes a new snapshot on every mutation; analytics only
/// ever borrow one. Records are ordered most-recent-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionSnapshot {
    /// Incremented on every store mutation.
    pub version: u64,
    pub records: Vec<PredictionRecord>,
}

impl PredictionSnapshot {
    pub fn new(version: u64, records: Vec<PredictionRecord>) -> Self {
        Self { version, records }
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn resolved(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter().filter(|r| r.is_resolved())
    }

    pub fn pending(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter().filter(|r| r.is_pending())
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved().count()
    }

    pub fn get(&self, id: &str) -> Option<&PredictionRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl Deref for PredictionSnapshot {
    type Target = [PredictionRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}
