//! Error handling for Brier.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The analytics themselves never fail: empty inputs map to sentinel
//! values. Errors only come from record construction, store mutations,
//! config loading, and export/import.

pub mod config_error;
pub mod store_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;
pub use validation_error::ValidationError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum BrierError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type BrierResult<T> = Result<T, BrierError>;
