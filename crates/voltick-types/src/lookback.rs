//! Lookback specification and date ranges.

use chrono::NaiveDate;

use crate::DateRangeError;

/// A range of dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range ending today (UTC) and starting `days` earlier.
    #[must_use]
    pub fn trailing_days(days: u32) -> Self {
        let end = chrono::Utc::now().date_naive();
        let start = end - chrono::TimeDelta::days(i64::from(days));
        Self { start, end }
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// How far back to request bars from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    /// Trailing window of calendar days ending now.
    Days(u32),
    /// Explicit date range.
    Range(DateRange),
}

impl Lookback {
    /// Resolves the lookback into a concrete date range.
    #[must_use]
    pub fn resolve(&self) -> DateRange {
        match self {
            Self::Days(days) => DateRange::trailing_days(*days),
            Self::Range(range) => *range,
        }
    }
}

impl From<DateRange> for Lookback {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

impl std::fmt::Display for Lookback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days}d"),
            Self::Range(range) => write!(f, "{range}"),
        }
    }
}
