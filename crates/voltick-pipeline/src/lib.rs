//! Pipeline orchestration for voltick.
//!
//! Two builders assemble the output datasets:
//!
//! - [`SnapshotBuilder`] - latest ATR, trend, and percent change per
//!   instrument for both intervals
//! - [`HistoryBuilder`] - trailing tick-converted ATR series per
//!   instrument for the daily interval
//!
//! Both iterate the registry in sorted-symbol order and contain every
//! per-instrument failure as an [`Omission`] in the output value.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltick/voltick/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod dataset;
mod history;
mod outcome;
mod snapshot;

pub use config::PipelineConfig;
pub use dataset::{AuditRow, History, HistoryPoint, Meta, Snapshot, SnapshotEntry, SymbolSeries};
pub use history::HistoryBuilder;
pub use outcome::{OmitReason, Omission};
pub use snapshot::SnapshotBuilder;

#[cfg(test)]
mod test_provider;
