use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::ValidationError;

/// Life area a prediction belongs to.
///
/// Declaration order is the canonical order used by every per-category
/// breakdown and pattern scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Social,
    Work,
    Dating,
    Health,
    Finance,
    Other,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 6] = [
        Category::Social,
        Category::Work,
        Category::Dating,
        Category::Health,
        Category::Finance,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Work => "work",
            Category::Dating => "dating",
            Category::Health => "health",
            Category::Finance => "finance",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ValidationError::UnknownCategory {
                value: s.to_string(),
            })
    }
}
