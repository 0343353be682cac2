use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::errors::BrierResult;
use crate::models::{NewPrediction, PredictionRecord, PredictionSnapshot};

/// Owner of the prediction collection.
///
/// Every mutation publishes a new [`PredictionSnapshot`]; readers hold on to
/// whichever snapshot they were handed.
pub trait IPredictionStore: Send + Sync {
    /// Append a pending prediction created at `now`.
    fn add_at(&self, input: NewPrediction, now: DateTime<Utc>) -> BrierResult<PredictionRecord>;

    /// Resolve a pending prediction at `now`. Fails if missing or already resolved.
    fn resolve_at(
        &self,
        id: &str,
        outcome: bool,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> BrierResult<PredictionRecord>;

    fn delete(&self, id: &str) -> BrierResult<()>;

    fn clear(&self) -> BrierResult<()>;

    fn get(&self, id: &str) -> BrierResult<Option<PredictionRecord>>;

    /// Current snapshot, most-recent-first.
    fn snapshot(&self) -> BrierResult<Arc<PredictionSnapshot>>;

    /// [`add_at`](Self::add_at) stamped with the wall clock.
    fn add(&self, input: NewPrediction) -> BrierResult<PredictionRecord> {
        self.add_at(input, Utc::now())
    }

    /// [`resolve_at`](Self::resolve_at) stamped with the wall clock.
    fn resolve(
        &self,
        id: &str,
        outcome: bool,
        notes: Option<String>,
    ) -> BrierResult<PredictionRecord> {
        self.resolve_at(id, outcome, notes, Utc::now())
    }
}
