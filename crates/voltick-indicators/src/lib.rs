//! Indicator math for the voltick volatility pipeline.
//!
//! - [`true_range`] - True Range sequence over an ordered bar slice
//! - [`atr`] / [`latest_atr`] - ATR smoothing with an explicit [`Smoothing`] variant
//! - [`to_ticks`] - price-point values expressed in instrument tick units
//! - [`classify_trend`] - three-way trend from the last two closes
//!
//! All functions are pure; none rounds intermediate values. Rounding to
//! presentation precision happens at the serialization boundary only.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltick/voltick/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod atr;
mod convert;
mod trend;
mod true_range;

pub use atr::{Smoothing, SmoothingParseError, atr, latest_atr};
pub use convert::{TickUnit, to_ticks};
pub use trend::{TrendChange, classify_trend};
pub use true_range::true_range;
