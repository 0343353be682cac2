//! Configuration system for Brier.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod brier_config;
pub mod defaults;
pub mod insights_config;
pub mod observability_config;
pub mod report_config;

pub use brier_config::BrierConfig;
pub use insights_config::InsightsConfig;
pub use observability_config::ObservabilityConfig;
pub use report_config::ReportConfig;
