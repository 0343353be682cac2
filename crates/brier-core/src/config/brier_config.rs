//! Top-level Brier configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{InsightsConfig, ObservabilityConfig, ReportConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BRIER_*`)
/// 2. Config file (`brier.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BrierConfig {
    pub insights: InsightsConfig,
    pub report: ReportConfig,
    pub observability: ObservabilityConfig,
}

impl BrierConfig {
    /// Load configuration from an optional TOML file, then apply
    /// environment overrides and validate.
    ///
    /// An explicitly given path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate(&config)?;

        Ok(config)
    }

    /// Parse a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BrierConfig) -> Result<(), ConfigError> {
        let insights = &config.insights;
        if insights.min_resolved == 0 {
            return Err(invalid("insights.min_resolved", "must be greater than 0"));
        }
        if insights.high_confidence_threshold > 100 {
            return Err(invalid(
                "insights.high_confidence_threshold",
                "must be between 0 and 100",
            ));
        }
        if insights.low_confidence_threshold >= insights.high_confidence_threshold {
            return Err(invalid(
                "insights.low_confidence_threshold",
                "must be below insights.high_confidence_threshold",
            ));
        }
        if !(0.0..=1.0).contains(&insights.bias_accuracy_threshold) {
            return Err(invalid(
                "insights.bias_accuracy_threshold",
                "must be between 0.0 and 1.0",
            ));
        }
        if insights.drift_min_window == 0 || insights.drift_min_window > insights.drift_window {
            return Err(invalid(
                "insights.drift_min_window",
                "must be between 1 and insights.drift_window",
            ));
        }
        if insights.drift_delta < 0.0 {
            return Err(invalid("insights.drift_delta", "must not be negative"));
        }
        if !(0.0..=100.0).contains(&insights.strong_category_accuracy)
            || !(0.0..=100.0).contains(&insights.weak_category_accuracy)
        {
            return Err(invalid(
                "insights.strong_category_accuracy",
                "category accuracies must be between 0 and 100",
            ));
        }
        if insights.weak_category_accuracy >= insights.strong_category_accuracy {
            return Err(invalid(
                "insights.weak_category_accuracy",
                "must be below insights.strong_category_accuracy",
            ));
        }
        if insights.calibration_warning_score > 100 {
            return Err(invalid(
                "insights.calibration_warning_score",
                "must be between 0 and 100",
            ));
        }

        let report = &config.report;
        if report.weekly_window_days <= 0 || report.monthly_window_days <= 0 {
            return Err(invalid("report.weekly_window_days", "windows must be positive"));
        }
        if !(0.0..=1.0).contains(&report.celebrate_below)
            || !(0.0..=1.0).contains(&report.caution_above)
        {
            return Err(invalid(
                "report.celebrate_below",
                "Brier thresholds must be between 0.0 and 1.0",
            ));
        }
        if report.celebrate_below > report.caution_above {
            return Err(invalid(
                "report.celebrate_below",
                "must not exceed report.caution_above",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides read through `lookup`.
    /// Pattern: `BRIER_INSIGHTS_MIN_RESOLVED`, `BRIER_LOG_LEVEL`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(config: &mut BrierConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, "BRIER_INSIGHTS_MIN_RESOLVED") {
            config.insights.min_resolved = v;
        }
        if let Some(v) = parse_var(&lookup, "BRIER_INSIGHTS_HIGH_CONFIDENCE") {
            config.insights.high_confidence_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "BRIER_INSIGHTS_LOW_CONFIDENCE") {
            config.insights.low_confidence_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "BRIER_INSIGHTS_CALIBRATION_WARNING") {
            config.insights.calibration_warning_score = v;
        }
        if let Some(v) = parse_var(&lookup, "BRIER_REPORT_WEEKLY_WINDOW_DAYS") {
            config.report.weekly_window_days = v;
        }
        if let Some(v) = parse_var(&lookup, "BRIER_REPORT_MONTHLY_WINDOW_DAYS") {
            config.report.monthly_window_days = v;
        }
        if let Some(v) = lookup("BRIER_LOG_LEVEL") {
            config.observability.log_level = v;
        }
        if let Some(v) = parse_var(&lookup, "BRIER_LOG_JSON") {
            config.observability.json = v;
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|val| val.trim().parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
