pub mod insight_engine;
pub mod store;

pub use insight_engine::IInsightEngine;
pub use store::IPredictionStore;
