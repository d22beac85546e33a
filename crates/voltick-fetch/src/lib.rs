//! Bar fetching for the voltick volatility pipeline.
//!
//! This crate provides the data-ingestion boundary:
//!
//! - [`BarProvider`] - async trait the pipeline builders consume
//! - [`YahooChartClient`] - HTTP implementation against the Yahoo chart API
//! - [`url::chart_url`] - chart API URL construction
//! - [`parse`] - payload parsing and bar sanitization

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltick/voltick/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod parse;
mod provider;
pub mod url;

pub use client::{ClientConfig, FetchError, YahooChartClient};
pub use provider::BarProvider;
