//! OHLC price bar.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One period's open/high/low/close price summary.
///
/// Timestamps are timezone-naive: daily bars carry the session date at
/// midnight, hourly bars the hour start. A bar sequence for one
/// instrument and interval is ordered ascending by timestamp with no
/// duplicates; gaps are expected (weekends, holidays).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time (start of the period).
    pub timestamp: NaiveDateTime,
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if every field is finite and the OHLC shape holds:
    /// high >= low, high >= max(open, close), low <= min(open, close).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let finite = self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite();
        finite
            && self.high >= self.low
            && self.high >= self.open.max(self.close)
            && self.low <= self.open.min(self.close)
    }

    /// Returns the bar's session date.
    #[must_use]
    pub const fn date(&self) -> chrono::NaiveDate {
        self.timestamp.date()
    }
}
