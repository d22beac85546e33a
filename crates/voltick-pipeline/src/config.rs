//! Pipeline configuration.

use std::num::NonZeroUsize;

use voltick_indicators::Smoothing;
use voltick_types::Interval;

/// Tunables shared by both pipeline modes.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// ATR smoothing period.
    pub atr_period: NonZeroUsize,
    /// ATR smoothing variant; one per run, never mixed within a series.
    pub smoothing: Smoothing,
    /// Calendar-day lookback for daily snapshot bars.
    pub daily_lookback_days: u32,
    /// Calendar-day lookback for hourly snapshot bars.
    pub hourly_lookback_days: u32,
    /// Calendar-day lookback for the historical series. Sized so at
    /// least a year of valid points survives the smoothing warm-up.
    pub history_lookback_days: u32,
    /// Trailing window bound on emitted history points.
    pub history_max_points: usize,
    /// Data source name recorded in `_meta`.
    pub source_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            atr_period: NonZeroUsize::new(14).expect("non-zero"),
            smoothing: Smoothing::default(),
            daily_lookback_days: Interval::Daily.default_lookback_days(),
            hourly_lookback_days: Interval::Hourly.default_lookback_days(),
            history_lookback_days: 550,
            history_max_points: 365,
            source_name: "Yahoo Finance chart API".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Returns the snapshot lookback in days for the given interval.
    #[must_use]
    pub const fn lookback_days(&self, interval: Interval) -> u32 {
        match interval {
            Interval::Daily => self.daily_lookback_days,
            Interval::Hourly => self.hourly_lookback_days,
        }
    }

    /// Minimum bar count for any ATR emission: period True Range
    /// samples require period + 1 bars.
    #[must_use]
    pub const fn min_bars(&self) -> usize {
        self.atr_period.get() + 1
    }
}
