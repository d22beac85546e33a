//! Core types for the voltick futures volatility pipeline.
//!
//! This crate provides the fundamental data structures used throughout voltick:
//!
//! - [`Bar`] - A single OHLC price bar
//! - [`Interval`] - Bar interval (daily or hourly)
//! - [`Lookback`] - How far back to request bars
//! - [`DateRange`] - Explicit date range for data retrieval
//! - [`Instrument`] - Futures instrument with tick metadata
//! - [`Trend`] - Three-way trend label derived from closes

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltick/voltick/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod instrument;
mod interval;
mod lookback;
mod trend;

pub use bar::Bar;
pub use error::{DateRangeError, Result, VoltickError};
pub use instrument::{Category, Instrument};
pub use interval::{Interval, IntervalParseError};
pub use lookback::{DateRange, Lookback};
pub use trend::Trend;
