//! Output dataset structures.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use voltick_indicators::TickUnit;
use voltick_types::Trend;

use crate::Omission;

/// Run metadata attached to every artifact under the `_meta` key.
///
/// `_meta` is never an instrument symbol; consumers iterate symbols
/// from the dataset maps, which exclude it by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    /// Artifact build time (UTC).
    pub updated_utc: DateTime<Utc>,
    /// Data source name.
    pub source: String,
    /// ATR smoothing period used for the run.
    pub atr_period: usize,
}

/// Latest volatility reading for one instrument and interval.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotEntry {
    /// Trend label from the last two closes.
    pub trend: Trend,
    /// Latest ATR expressed in tick units (or price points when the
    /// instrument has no usable tick size; see `unit`).
    pub pips: Option<f64>,
    /// Currency value of the move. Reserved: always `None` until the
    /// USD column ships; the registry carries tick values so this can
    /// be finished without a data migration.
    pub usd: Option<f64>,
    /// Percent change between the last two closes.
    pub pct: Option<f64>,
    /// Unit of `pips`, so price-scale passthrough is never misread as
    /// tick units.
    pub unit: TickUnit,
}

/// Consolidated snapshot dataset: one entry per instrument per
/// interval, plus run metadata.
///
/// Symbols that failed to produce an entry are absent from the maps
/// (never present with a null value) and recorded in `omissions`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Daily entries keyed by symbol.
    pub daily: BTreeMap<String, SnapshotEntry>,
    /// Hourly entries keyed by symbol.
    pub hourly: BTreeMap<String, SnapshotEntry>,
    /// Instruments skipped this run, with reasons.
    pub omissions: Vec<Omission>,
    /// Run metadata.
    pub meta: Meta,
}

/// One dated point of a historical ATR series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPoint {
    /// Session date.
    pub date: NaiveDate,
    /// ATR value, unit-converted per the series' `unit`.
    pub value: f64,
}

/// A single instrument's trailing ATR series.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSeries {
    /// Chronologically ascending points, one per trading day, bounded
    /// by the configured trailing window.
    pub points: Vec<HistoryPoint>,
    /// Unit of every value in `points`.
    pub unit: TickUnit,
    /// Audit rows pairing each point with its source bar.
    pub audit: Vec<AuditRow>,
}

/// Historical dataset: trailing series per symbol plus run metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Series keyed by symbol; symbols with fewer than two surviving
    /// points are absent.
    pub series: BTreeMap<String, SymbolSeries>,
    /// Instruments skipped this run, with reasons.
    pub omissions: Vec<Omission>,
    /// Run metadata.
    pub meta: Meta,
}

impl History {
    /// Returns the unit shared by all emitted series: `Ticks` when
    /// every series is tick-converted, `Price` otherwise. Used for the
    /// `_meta.unit` honesty tag; per-series units stay authoritative.
    #[must_use]
    pub fn overall_unit(&self) -> TickUnit {
        if self
            .series
            .values()
            .all(|series| series.unit == TickUnit::Ticks)
        {
            TickUnit::Ticks
        } else {
            TickUnit::Price
        }
    }
}

/// One row of the per-symbol audit table: the source bar alongside the
/// derived values, the raw-data escape hatch for verifying a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditRow {
    /// Session date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// ATR in price points.
    pub atr: f64,
    /// ATR in tick units (equal to `atr` for price-unit series).
    pub atr_ticks: f64,
}
