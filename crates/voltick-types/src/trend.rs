//! Trend label derived from the last two closes.

use serde::{Deserialize, Serialize};

/// Three-way trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Last close more than 0.05% above the previous close.
    Up,
    /// Last close more than 0.05% below the previous close.
    Down,
    /// Within the noise band, or not enough data to tell.
    #[default]
    Flat,
}

impl Trend {
    /// Returns the trend as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
