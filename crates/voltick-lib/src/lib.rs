//! Rust library for building futures ATR volatility datasets.
//!
//! This is a facade crate that re-exports functionality from the voltick
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use voltick_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = InstrumentRegistry::global();
//!     let client = YahooChartClient::with_defaults()?;
//!
//!     let builder = SnapshotBuilder::new(registry, PipelineConfig::default());
//!     let snapshot = builder.build(&client).await;
//!
//!     JsonWriter::new().write_snapshot(&snapshot, std::io::stdout())?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltick/voltick/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use voltick_types::*;

// Re-export instrument registry
pub use voltick_instruments::InstrumentRegistry;

// Re-export indicator math
pub use voltick_indicators::{
    Smoothing, SmoothingParseError, TickUnit, TrendChange, atr, classify_trend, latest_atr,
    to_ticks, true_range,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use voltick_fetch::{BarProvider, ClientConfig, FetchError, YahooChartClient};

// Re-export pipeline builders
#[cfg(feature = "pipeline")]
pub use voltick_pipeline::{
    AuditRow, History, HistoryBuilder, HistoryPoint, Meta, OmitReason, Omission, PipelineConfig,
    Snapshot, SnapshotBuilder, SnapshotEntry, SymbolSeries,
};

// Re-export artifact writers
#[cfg(feature = "format")]
pub use voltick_format::{CsvWriter, FormatError, JsonWriter};

/// Prelude module for convenient imports.
///
/// ```
/// use voltick_lib::prelude::*;
/// ```
pub mod prelude {
    pub use voltick_types::{
        Bar, Category, DateRange, Instrument, Interval, Lookback, Result, Trend, VoltickError,
    };

    pub use voltick_instruments::InstrumentRegistry;

    pub use voltick_indicators::{Smoothing, TickUnit};

    #[cfg(feature = "fetch")]
    pub use voltick_fetch::{BarProvider, ClientConfig, YahooChartClient};

    #[cfg(feature = "pipeline")]
    pub use voltick_pipeline::{
        History, HistoryBuilder, PipelineConfig, Snapshot, SnapshotBuilder,
    };

    #[cfg(feature = "format")]
    pub use voltick_format::{CsvWriter, JsonWriter};
}
