//! Bar interval definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bar interval requested from the data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// Daily bars.
    #[default]
    Daily,
    /// Hourly (60-minute) bars.
    Hourly,
}

impl Interval {
    /// Returns the provider interval code ("1d" or "60m").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Daily => "1d",
            Self::Hourly => "60m",
        }
    }

    /// Returns the human-readable label used in output artifacts.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    /// Returns the default lookback in calendar days for this interval.
    ///
    /// Hourly history availability is shorter than daily at most
    /// providers, hence the smaller window.
    #[must_use]
    pub const fn default_lookback_days(&self) -> u32 {
        match self {
            Self::Daily => 60,
            Self::Hourly => 30,
        }
    }

    /// Returns both intervals in snapshot processing order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Daily, Self::Hourly]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1d" | "d1" | "daily" | "day" => Ok(Self::Daily),
            "60m" | "1h" | "h1" | "hourly" | "hour" => Ok(Self::Hourly),
            _ => Err(IntervalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: daily, 1d, hourly, 60m",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}
