//! # brier-insights
//!
//! Pure analytics over prediction snapshots: Brier scoring, the calibration
//! curve, confidence bias, pattern mining, recommendations, the gated
//! insights pipeline, periodic reports, and weekly challenges.
//!
//! Nothing here reads the clock; windowed functions take `now` explicitly.

pub mod bias;
pub mod calibration;
pub mod challenges;
pub mod engine;
pub mod gate;
pub mod patterns;
pub mod recommendations;
pub mod report;
pub mod scoring;

pub use engine::InsightEngine;
pub use scoring::{accuracy, brier_score, category_breakdown, summarize};
