/// Prediction store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("prediction not found: {id}")]
    NotFound { id: String },

    #[error("prediction {id} is already resolved")]
    AlreadyResolved { id: String },

    #[error("duplicate prediction id: {id}")]
    DuplicateId { id: String },

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("serialization failed: {reason}")]
    SerializationFailed { reason: String },

    #[error("i/o error on {path}: {reason}")]
    Io { path: String, reason: String },
}
