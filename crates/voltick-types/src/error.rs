//! Error types for voltick.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for voltick operations.
pub type Result<T> = std::result::Result<T, VoltickError>;

/// Errors raised at the user-input boundary.
///
/// Per-instrument pipeline failures are not errors here; they are
/// contained as omissions and never abort a batch run. The fetch and
/// artifact layers carry their own error types.
#[derive(Error, Debug)]
pub enum VoltickError {
    /// Instrument not found in the registry.
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// Category filter did not match any known category.
    #[error(
        "Unknown category: {0}. Valid options: index, metal, energy, rates, agriculture, currency"
    )]
    UnknownCategory(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
