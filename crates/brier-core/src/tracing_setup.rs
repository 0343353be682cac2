//! Tracing initialization and span helpers.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-target log directives.
pub const LOG_ENV: &str = "BRIER_LOG";

/// Initialize the Brier tracing/logging system.
///
/// Reads `BRIER_LOG` for per-target levels, e.g.
/// `BRIER_LOG=brier_insights=debug,brier_store=warn`.
/// Falls back to `info` if `BRIER_LOG` is not set or is invalid.
///
/// Idempotent; only the first call installs a subscriber.
pub fn init_tracing() {
    init_with(&ObservabilityConfig::default());
}

/// Same as [`init_tracing`] but emits structured JSON lines.
pub fn init_tracing_json() {
    init_with(&ObservabilityConfig {
        json: true,
        ..ObservabilityConfig::default()
    });
}

/// Initialize tracing from an [`ObservabilityConfig`].
/// `BRIER_LOG` still takes precedence over `log_level`.
pub fn init_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        if config.json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Create a span around one run of the insights pipeline.
#[macro_export]
macro_rules! insights_span {
    ($record_count:expr) => {
        tracing::info_span!("brier.insights", record_count = $record_count)
    };
}

/// Create a span around periodic report generation.
#[macro_export]
macro_rules! report_span {
    ($period:expr) => {
        tracing::info_span!("brier.report", period = ?$period)
    };
}

/// Create a span around a store mutation.
#[macro_export]
macro_rules! store_span {
    ($op:expr) => {
        tracing::debug_span!("brier.store", op = %$op)
    };
}
