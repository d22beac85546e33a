//! Per-instrument omission records.

use voltick_types::Interval;

/// Why an instrument produced no entry for an interval.
///
/// These are expected, routine conditions modeled as data rather than
/// errors; a recorded omission is the only trace a failed instrument
/// leaves in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OmitReason {
    /// The provider returned no usable bars.
    NoData,
    /// The fetch failed after retries.
    FetchFailed(String),
    /// Fewer valid bars than the indicator needs.
    InsufficientHistory {
        /// Minimum bar count required.
        needed: usize,
        /// Bars actually available.
        got: usize,
    },
}

impl std::fmt::Display for OmitReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "no data"),
            Self::FetchFailed(msg) => write!(f, "fetch failed: {msg}"),
            Self::InsufficientHistory { needed, got } => {
                write!(f, "insufficient history: needed {needed}, got {got}")
            }
        }
    }
}

/// An instrument+interval the pipeline skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Omission {
    /// Instrument symbol.
    pub symbol: String,
    /// Interval the omission applies to.
    pub interval: Interval,
    /// Why the instrument was skipped.
    pub reason: OmitReason,
}

impl std::fmt::Display for Omission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.symbol, self.interval, self.reason)
    }
}
