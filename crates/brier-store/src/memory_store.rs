//! Versioned in-memory prediction store.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use brier_core::errors::{BrierResult, StoreError};
use brier_core::models::{Category, NewPrediction, PredictionRecord, PredictionSnapshot};
use brier_core::store_span;
use brier_core::traits::IPredictionStore;

/// In-memory store that swaps in a fresh `Arc<PredictionSnapshot>` on each
/// mutation. Records are kept newest-first.
///
/// Readers clone the `Arc` and never block writers for longer than the swap.
#[derive(Debug, Default)]
pub struct InMemoryPredictionStore {
    current: RwLock<Arc<PredictionSnapshot>>,
}

impl InMemoryPredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a store from exported records.
    ///
    /// Records are re-sorted newest-first by `created_at`. Duplicate ids are
    /// rejected.
    pub fn from_records(mut records: Vec<PredictionRecord>) -> BrierResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId {
                    id: record.id.clone(),
                }
                .into());
            }
        }
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        info!(count = records.len(), "store restored from records");
        Ok(Self {
            current: RwLock::new(Arc::new(PredictionSnapshot::new(0, records))),
        })
    }

    /// Version of the current snapshot.
    pub fn version(&self) -> BrierResult<u64> {
        Ok(self.snapshot()?.version)
    }

    /// Pending predictions, newest-first.
    pub fn pending(&self) -> BrierResult<Vec<PredictionRecord>> {
        Ok(self.snapshot()?.pending().cloned().collect())
    }

    /// Predictions in `category`, newest-first.
    pub fn by_category(&self, category: Category) -> BrierResult<Vec<PredictionRecord>> {
        Ok(self
            .snapshot()?
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }

    /// Apply `f` to a copy of the current records and publish the result as
    /// the next snapshot. Nothing is published when `f` fails.
    fn mutate<F, T>(&self, op: &str, f: F) -> BrierResult<T>
    where
        F: FnOnce(&mut Vec<PredictionRecord>) -> BrierResult<T>,
    {
        let span = store_span!(op);
        let _guard = span.enter();

        let mut current = self.current.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut records = current.records.clone();
        let out = f(&mut records)?;
        let version = current.version + 1;
        *current = Arc::new(PredictionSnapshot::new(version, records));
        debug!(version, "snapshot published");
        Ok(out)
    }
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound { id: id.to_string() }
}

impl IPredictionStore for InMemoryPredictionStore {
    fn add_at(&self, input: NewPrediction, now: DateTime<Utc>) -> BrierResult<PredictionRecord> {
        let record = PredictionRecord::create(input, now)?;
        self.mutate("add", |records| {
            records.insert(0, record.clone());
            Ok(())
        })?;
        info!(id = %record.id, category = %record.category, "prediction added");
        Ok(record)
    }

    fn resolve_at(
        &self,
        id: &str,
        outcome: bool,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> BrierResult<PredictionRecord> {
        let record = self.mutate("resolve", |records| {
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| not_found(id))?;
            record.resolve(outcome, notes, now)?;
            Ok(record.clone())
        })?;
        info!(id, outcome, "prediction resolved");
        Ok(record)
    }

    fn delete(&self, id: &str) -> BrierResult<()> {
        self.mutate("delete", |records| {
            let index = records
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| not_found(id))?;
            records.remove(index);
            Ok(())
        })?;
        info!(id, "prediction deleted");
        Ok(())
    }

    fn clear(&self) -> BrierResult<()> {
        self.mutate("clear", |records| {
            records.clear();
            Ok(())
        })?;
        info!("store cleared");
        Ok(())
    }

    fn get(&self, id: &str) -> BrierResult<Option<PredictionRecord>> {
        Ok(self.snapshot()?.get(id).cloned())
    }

    fn snapshot(&self) -> BrierResult<Arc<PredictionSnapshot>> {
        let current = self.current.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(Arc::clone(&current))
    }
}
