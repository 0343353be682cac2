//! # brier-store
//!
//! Reference [`IPredictionStore`](brier_core::traits::IPredictionStore):
//! an in-memory collection that publishes a new immutable snapshot on every
//! mutation, plus JSON/CSV export and JSON backup restore.

pub mod export;
pub mod memory_store;

pub use memory_store::InMemoryPredictionStore;
