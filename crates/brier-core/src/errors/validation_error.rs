/// Record validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("probability {value} is outside [0, 100]")]
    ProbabilityOutOfRange { value: i64 },

    #[error("unknown category: {value}")]
    UnknownCategory { value: String },
}
