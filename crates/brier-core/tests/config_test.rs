use std::collections::HashMap;
use std::io::Write;

use brier_core::config::BrierConfig;
use brier_core::errors::ConfigError;

#[test]
fn defaults_match_documented_thresholds() {
    let config = BrierConfig::default();
    assert_eq!(config.insights.min_resolved, 5);
    assert_eq!(config.insights.high_confidence_threshold, 80);
    assert_eq!(config.insights.low_confidence_threshold, 20);
    assert!((config.insights.bias_accuracy_threshold - 0.7).abs() < f64::EPSILON);
    assert_eq!(config.insights.drift_window, 7);
    assert_eq!(config.insights.calibration_warning_score, 60);
    assert_eq!(config.report.weekly_window_days, 7);
    assert_eq!(config.report.monthly_window_days, 30);
    assert!(BrierConfig::validate(&config).is_ok());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = BrierConfig::from_toml(
        r#"
        [insights]
        min_resolved = 10

        [observability]
        json = true
        "#,
    )
    .unwrap();
    assert_eq!(config.insights.min_resolved, 10);
    assert_eq!(config.insights.high_confidence_threshold, 80);
    assert!(config.observability.json);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = BrierConfig::from_toml("[insights\nmin_resolved = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn toml_round_trips() {
    let mut config = BrierConfig::default();
    config.report.caution_above = 0.5;
    let text = config.to_toml().unwrap();
    assert_eq!(BrierConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn env_overrides_win_over_file_values() {
    let mut config = BrierConfig::from_toml("[insights]\nmin_resolved = 10").unwrap();
    let env: HashMap<&str, &str> = [
        ("BRIER_INSIGHTS_MIN_RESOLVED", "3"),
        ("BRIER_LOG_LEVEL", "debug"),
        ("BRIER_REPORT_WEEKLY_WINDOW_DAYS", "not-a-number"),
    ]
    .into_iter()
    .collect();

    BrierConfig::apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.insights.min_resolved, 3);
    assert_eq!(config.observability.log_level, "debug");
    // Unparseable values leave the previous value in place.
    assert_eq!(config.report.weekly_window_days, 7);
}

#[test]
fn inverted_confidence_thresholds_fail_validation() {
    let mut config = BrierConfig::default();
    config.insights.low_confidence_threshold = 90;
    let err = BrierConfig::validate(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "insights.low_confidence_threshold"
    ));
}

#[test]
fn zero_min_resolved_fails_validation() {
    let mut config = BrierConfig::default();
    config.insights.min_resolved = 0;
    assert!(BrierConfig::validate(&config).is_err());
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[report]\ncelebrate_below = 0.1").unwrap();
    let config = BrierConfig::from_file(file.path()).unwrap();
    assert!((config.report.celebrate_below - 0.1).abs() < f64::EPSILON);
}

#[test]
fn load_with_missing_file_fails() {
    let err = BrierConfig::load(Some(std::path::Path::new("/nonexistent/brier.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
