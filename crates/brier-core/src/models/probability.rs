use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::errors::ValidationError;

/// Stated probability that the feared outcome happens, in whole percent.
/// Always within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Probability(u8);

impl Probability {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    /// Coin-flip probability. Never counts as a correct call.
    pub const EVEN: u8 = 50;

    /// Create a probability, rejecting values outside [0, 100].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            return Err(ValidationError::ProbabilityOutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    /// Create a probability, clamping to [0, 100].
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    /// Whole-percent value.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Value as a fraction in [0.0, 1.0].
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for Probability {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for u8 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl<'de> Deserialize<'de> for Probability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
