//! Chart API payload parsing and bar sanitization.

use chrono::DateTime;
use serde::Deserialize;
use thiserror::Error;
use voltick_types::{Bar, Interval};

/// Errors that can occur while interpreting a chart payload.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Provider reported an error inside an HTTP 200 body.
    #[error("Provider error: {code}: {description}")]
    Provider {
        /// Machine-readable error code.
        code: String,
        /// Human-readable description.
        description: String,
    },

    /// Quote arrays disagree in length with the timestamp array.
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Top-level chart API response body.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    /// The chart envelope.
    pub chart: ChartEnvelope,
}

/// Chart envelope: exactly one of `result` and `error` is populated.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    /// Per-ticker results (a single element for single-ticker requests).
    pub result: Option<Vec<ChartResult>>,
    /// Provider-side error description.
    pub error: Option<ApiError>,
}

/// Provider-side error payload.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

/// A single ticker's chart data.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Bar open times as unix seconds.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    /// OHLC arrays.
    pub indicators: Indicators,
}

/// Indicator arrays keyed parallel to `timestamp`.
#[derive(Debug, Deserialize)]
pub struct Indicators {
    /// Quote blocks (one for single-ticker requests).
    pub quote: Vec<Quote>,
}

/// Parallel OHLC arrays; individual slots may be null.
#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    /// Opening prices.
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    /// High prices.
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    /// Low prices.
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    /// Closing prices.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

/// Converts a chart response into a clean, ascending bar sequence.
///
/// Rows with any missing or non-finite OHLC field are dropped, as are
/// rows violating the OHLC shape invariants. Duplicate timestamps keep
/// the last occurrence. An absent result block yields an empty
/// sequence; a provider error block yields [`ParseError::Provider`].
///
/// Daily bar timestamps are truncated to midnight so one bar maps to
/// one session date downstream.
///
/// # Errors
///
/// Returns an error when the payload carries a provider error or the
/// parallel arrays are inconsistent.
pub fn bars_from_chart(response: ChartResponse, interval: Interval) -> Result<Vec<Bar>, ParseError> {
    if let Some(error) = response.chart.error {
        return Err(ParseError::Provider {
            code: error.code,
            description: error.description,
        });
    }

    let Some(result) = response.chart.result.and_then(|mut r| r.pop()) else {
        return Ok(Vec::new());
    };

    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let n = result.timestamp.len();
    if quote.open.len() != n || quote.high.len() != n || quote.low.len() != n
        || quote.close.len() != n
    {
        return Err(ParseError::Malformed(format!(
            "quote arrays do not match {n} timestamps"
        )));
    }

    let mut bars: Vec<Bar> = Vec::with_capacity(n);
    for i in 0..n {
        let (Some(open), Some(high), Some(low), Some(close)) =
            (quote.open[i], quote.high[i], quote.low[i], quote.close[i])
        else {
            continue;
        };

        let Some(utc) = DateTime::from_timestamp(result.timestamp[i], 0) else {
            continue;
        };
        let timestamp = match interval {
            Interval::Daily => utc.date_naive().and_time(chrono::NaiveTime::MIN),
            Interval::Hourly => utc.naive_utc(),
        };

        let bar = Bar::new(timestamp, open, high, low, close);
        if !bar.is_valid() {
            continue;
        }
        bars.push(bar);
    }

    // Stable sort keeps payload order within equal timestamps; walking
    // the runs backwards keeps the last occurrence of each.
    bars.sort_by_key(|bar| bar.timestamp);
    bars.reverse();
    bars.dedup_by_key(|bar| bar.timestamp);
    bars.reverse();

    Ok(bars)
}
