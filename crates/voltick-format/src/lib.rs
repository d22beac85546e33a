//! Artifact writers for voltick datasets.
//!
//! This crate serializes the pipeline's output datasets:
//!
//! - [`JsonWriter`] - snapshot and history JSON artifacts
//! - [`CsvWriter`] - per-symbol audit table

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltick/voltick/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod error;
mod json;

pub use crate::csv::CsvWriter;
pub use error::FormatError;
pub use json::JsonWriter;
