//! In-memory bar provider for orchestration tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use voltick_fetch::{BarProvider, FetchError};
use voltick_types::{Bar, Interval, Lookback};

/// Canned-response provider keyed by (ticker, interval).
#[derive(Debug, Default)]
pub(crate) struct MockProvider {
    responses: HashMap<(String, Interval), Vec<Bar>>,
    failures: HashSet<(String, Interval)>,
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, ticker: &str, interval: Interval, bars: Vec<Bar>) {
        self.responses.insert((ticker.to_string(), interval), bars);
    }

    pub(crate) fn fail(&mut self, ticker: &str, interval: Interval) {
        self.failures.insert((ticker.to_string(), interval));
    }
}

#[async_trait]
impl BarProvider for MockProvider {
    async fn fetch_bars(
        &self,
        ticker: &str,
        interval: Interval,
        _lookback: Lookback,
    ) -> Result<Vec<Bar>, FetchError> {
        let key = (ticker.to_string(), interval);
        if self.failures.contains(&key) {
            return Err(FetchError::ServerError { status: 503 });
        }
        Ok(self.responses.get(&key).cloned().unwrap_or_default())
    }
}

/// Bars climbing 1.0 per day from `start_close`, one per calendar day.
pub(crate) fn trending_bars(count: usize, start_close: f64) -> Vec<Bar> {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let close = start_close + i as f64;
            let timestamp = (first + chrono::TimeDelta::days(i as i64))
                .and_hms_opt(0, 0, 0)
                .unwrap();
            Bar::new(timestamp, close - 0.5, close + 1.0, close - 1.0, close)
        })
        .collect()
}

/// Flat-close bars whose high-low range is exactly `range`, so every
/// True Range sample equals `range`.
pub(crate) fn constant_range_bars(count: usize, close: f64, range: f64) -> Vec<Bar> {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let timestamp = (first + chrono::TimeDelta::days(i as i64))
                .and_hms_opt(0, 0, 0)
                .unwrap();
            Bar::new(
                timestamp,
                close,
                close + range / 2.0,
                close - range / 2.0,
                close,
            )
        })
        .collect()
}
