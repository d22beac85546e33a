//! JSON artifacts.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::SecondsFormat;
use serde_json::{json, Map, Value};

use voltick_pipeline::{History, Meta, Snapshot, SnapshotEntry};

use crate::FormatError;

/// Presentation rounding, applied here and nowhere upstream.
fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn rounded(value: Option<f64>, decimals: i32) -> Value {
    match value {
        Some(v) if v.is_finite() => json!(round_dp(v, decimals)),
        _ => Value::Null,
    }
}

/// Writes the snapshot and history datasets as JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonWriter {
    /// Whether to indent output.
    pretty: bool,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWriter {
    /// Creates a writer with default settings (pretty-printed).
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Sets whether to indent output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Writes the snapshot artifact.
    ///
    /// Shape: `{ "daily": {sym: {trend,pips,usd,pct}}, "hourly": {...},
    /// "_meta": {updated_utc, source, atr_period} }`. `pips` and `pct`
    /// are rounded to 2 decimals; omitted symbols are absent keys.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_snapshot<W: Write>(
        &self,
        snapshot: &Snapshot,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let root = json!({
            "daily": entries_json(&snapshot.daily),
            "hourly": entries_json(&snapshot.hourly),
            "_meta": meta_json(&snapshot.meta),
        });
        self.emit(&root, &mut writer)
    }

    /// Writes the history artifact.
    ///
    /// Shape: `{ sym: [["YYYY-MM-DD", value], ...], "_meta": {...,
    /// unit} }`. Values are rounded to 6 decimals; the `_meta.unit`
    /// tag is `"ticks"` only when every series is tick-converted.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_history<W: Write>(
        &self,
        history: &History,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let mut root = Map::new();
        for (symbol, series) in &history.series {
            let points: Vec<Value> = series
                .points
                .iter()
                .map(|p| {
                    json!([
                        p.date.format("%Y-%m-%d").to_string(),
                        round_dp(p.value, 6)
                    ])
                })
                .collect();
            root.insert(symbol.clone(), Value::Array(points));
        }
        let mut meta = meta_json(&history.meta);
        meta.insert(
            "unit".to_string(),
            json!(history.overall_unit().as_str()),
        );
        root.insert("_meta".to_string(), Value::Object(meta));
        self.emit(&Value::Object(root), &mut writer)
    }

    fn emit<W: Write>(&self, value: &Value, writer: &mut W) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

fn entries_json(entries: &BTreeMap<String, SnapshotEntry>) -> Value {
    let mut map = Map::new();
    for (symbol, entry) in entries {
        map.insert(
            symbol.clone(),
            json!({
                "trend": entry.trend.as_str(),
                "pips": rounded(entry.pips, 2),
                "usd": rounded(entry.usd, 2),
                "pct": rounded(entry.pct, 2),
            }),
        );
    }
    Value::Object(map)
}

fn meta_json(meta: &Meta) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "updated_utc".to_string(),
        json!(meta.updated_utc.to_rfc3339_opts(SecondsFormat::Secs, true)),
    );
    map.insert("source".to_string(), json!(meta.source));
    map.insert("atr_period".to_string(), json!(meta.atr_period));
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::io::Cursor;
    use voltick_indicators::TickUnit;
    use voltick_pipeline::{HistoryPoint, SymbolSeries};
    use voltick_types::Trend;

    fn meta() -> Meta {
        Meta {
            updated_utc: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            source: "Yahoo Finance chart API".to_string(),
            atr_period: 14,
        }
    }

    fn snapshot_with_one_entry() -> Snapshot {
        let mut snapshot = Snapshot {
            daily: BTreeMap::new(),
            hourly: BTreeMap::new(),
            omissions: Vec::new(),
            meta: meta(),
        };
        snapshot.daily.insert(
            "MES".to_string(),
            SnapshotEntry {
                trend: Trend::Up,
                pips: Some(12.3456),
                usd: None,
                pct: Some(0.126),
                unit: TickUnit::Ticks,
            },
        );
        snapshot
    }

    fn render_snapshot(writer: JsonWriter, snapshot: &Snapshot) -> Value {
        let mut output = Cursor::new(Vec::new());
        writer.write_snapshot(snapshot, &mut output).unwrap();
        serde_json::from_slice(&output.into_inner()).unwrap()
    }

    #[test]
    fn test_snapshot_shape_and_rounding() {
        let value = render_snapshot(JsonWriter::new(), &snapshot_with_one_entry());

        let entry = &value["daily"]["MES"];
        assert_eq!(entry["trend"], "up");
        assert_eq!(entry["pips"], 12.35);
        assert_eq!(entry["usd"], Value::Null);
        assert_eq!(entry["pct"], 0.13);
        assert!(value["hourly"].as_object().unwrap().is_empty());

        let m = &value["_meta"];
        assert_eq!(m["updated_utc"], "2024-06-01T12:00:00Z");
        assert_eq!(m["source"], "Yahoo Finance chart API");
        assert_eq!(m["atr_period"], 14);
    }

    #[test]
    fn test_omitted_symbols_are_absent_not_null() {
        let value = render_snapshot(JsonWriter::new(), &snapshot_with_one_entry());
        let daily = value["daily"].as_object().unwrap();
        assert_eq!(daily.len(), 1);
        assert!(!daily.contains_key("CL"));
    }

    #[test]
    fn test_compact_output_has_no_indent() {
        let mut output = Cursor::new(Vec::new());
        JsonWriter::new()
            .with_pretty(false)
            .write_snapshot(&snapshot_with_one_entry(), &mut output)
            .unwrap();
        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_history_shape() {
        let mut history = History {
            series: BTreeMap::new(),
            omissions: Vec::new(),
            meta: meta(),
        };
        history.series.insert(
            "ES".to_string(),
            SymbolSeries {
                points: vec![
                    HistoryPoint {
                        date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                        value: 8.123_456_789,
                    },
                    HistoryPoint {
                        date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                        value: 8.5,
                    },
                ],
                unit: TickUnit::Ticks,
                audit: Vec::new(),
            },
        );

        let mut output = Cursor::new(Vec::new());
        JsonWriter::new()
            .write_history(&history, &mut output)
            .unwrap();
        let value: Value = serde_json::from_slice(&output.into_inner()).unwrap();

        assert_eq!(value["ES"][0][0], "2024-01-02");
        // 6 decimal places at the boundary.
        assert_eq!(value["ES"][0][1], 8.123_457);
        assert_eq!(value["ES"][1][1], 8.5);
        assert_eq!(value["_meta"]["unit"], "ticks");
        assert_eq!(value["_meta"]["atr_period"], 14);
    }

    #[test]
    fn test_history_unit_tag_downgrades_to_price() {
        let mut history = History {
            series: BTreeMap::new(),
            omissions: Vec::new(),
            meta: meta(),
        };
        for (symbol, unit) in [("ES", TickUnit::Ticks), ("6N", TickUnit::Price)] {
            history.series.insert(
                symbol.to_string(),
                SymbolSeries {
                    points: vec![
                        HistoryPoint {
                            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                            value: 1.0,
                        },
                        HistoryPoint {
                            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                            value: 1.0,
                        },
                    ],
                    unit,
                    audit: Vec::new(),
                },
            );
        }

        let mut output = Cursor::new(Vec::new());
        JsonWriter::new()
            .write_history(&history, &mut output)
            .unwrap();
        let value: Value = serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(value["_meta"]["unit"], "price");
    }
}
