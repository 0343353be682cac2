//! # brier-core
//!
//! Foundation crate for the Brier calibration tracker.
//! Defines the prediction record model, the analytics result models,
//! errors, config, tracing setup, and the store trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BrierConfig;
pub use errors::{BrierError, BrierResult};
pub use models::{
    Category, NewPrediction, PredictionRecord, PredictionSnapshot, PredictionStatus, Probability,
};
