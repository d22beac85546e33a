//! ATR smoothing over a True Range sequence.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;

use voltick_types::Bar;

use crate::true_range;

/// ATR smoothing variant.
///
/// The two variants produce numerically different series from identical
/// input and are not interchangeable; callers pick exactly one per
/// output series and downstream consumers must know which one was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Smoothing {
    /// Wilder's recursive exponential smoothing with alpha = 1/period,
    /// seeded with the first True Range sample. Emits a value for every
    /// sample, initial transient included.
    #[default]
    Wilder,
    /// Plain rolling mean over the trailing `period` samples. The first
    /// `period - 1` slots are missing, not zero.
    RollingMean,
}

impl Smoothing {
    /// Returns the smoothing variant as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wilder => "wilder",
            Self::RollingMean => "rolling-mean",
        }
    }
}

impl std::fmt::Display for Smoothing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Smoothing {
    type Err = SmoothingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wilder" | "ema" => Ok(Self::Wilder),
            "rolling-mean" | "rolling_mean" | "sma" => Ok(Self::RollingMean),
            _ => Err(SmoothingParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid smoothing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothingParseError(String);

impl std::fmt::Display for SmoothingParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid smoothing '{}', expected 'wilder' or 'rolling-mean'",
            self.0
        )
    }
}

impl std::error::Error for SmoothingParseError {}

/// Smooths a True Range sequence into an ATR sequence.
///
/// The result has the same length as `tr`; slots where the variant has
/// not warmed up yet are `None`. All arithmetic runs at full f64
/// precision; values are never rounded here.
#[must_use]
pub fn atr(tr: &[f64], period: NonZeroUsize, smoothing: Smoothing) -> Vec<Option<f64>> {
    match smoothing {
        Smoothing::Wilder => wilder(tr, period.get()),
        Smoothing::RollingMean => rolling_mean(tr, period.get()),
    }
}

/// Computes the most recent ATR value for a bar sequence, or `None`
/// when the sequence is too short to produce one.
#[must_use]
pub fn latest_atr(bars: &[Bar], period: NonZeroUsize, smoothing: Smoothing) -> Option<f64> {
    let tr = true_range(bars);
    atr(&tr, period, smoothing).last().copied().flatten()
}

fn wilder(tr: &[f64], period: usize) -> Vec<Option<f64>> {
    let alpha = 1.0 / period as f64;
    let mut out = Vec::with_capacity(tr.len());
    let mut current: Option<f64> = None;

    for &sample in tr {
        let next = match current {
            None => sample,
            Some(prev) => prev + alpha * (sample - prev),
        };
        current = Some(next);
        out.push(current);
    }

    out
}

fn rolling_mean(tr: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(tr.len());
    let mut window_sum = 0.0;

    for (i, &sample) in tr.iter().enumerate() {
        window_sum += sample;
        if i >= period {
            window_sum -= tr[i - period];
        }
        if i + 1 >= period {
            out.push(Some(window_sum / period as f64));
        } else {
            out.push(None);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn period(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_wilder_constant_input_is_fixed_point() {
        let tr = vec![3.5; 20];
        let out = atr(&tr, period(14), Smoothing::Wilder);
        assert_eq!(out.len(), 20);
        for value in out {
            assert_relative_eq!(value.unwrap(), 3.5);
        }
    }

    #[test]
    fn test_wilder_seeds_with_first_sample() {
        let tr = vec![2.0, 4.0];
        let out = atr(&tr, period(2), Smoothing::Wilder);
        assert_relative_eq!(out[0].unwrap(), 2.0);
        // 2 + 0.5 * (4 - 2) = 3
        assert_relative_eq!(out[1].unwrap(), 3.0);
    }

    #[test]
    fn test_wilder_recursion() {
        let tr = vec![1.0, 2.0, 3.0, 4.0];
        let out = atr(&tr, period(14), Smoothing::Wilder);
        let alpha = 1.0 / 14.0;
        let mut expected = 1.0;
        assert_relative_eq!(out[0].unwrap(), expected);
        for (i, &sample) in tr.iter().enumerate().skip(1) {
            expected += alpha * (sample - expected);
            assert_relative_eq!(out[i].unwrap(), expected);
        }
    }

    #[test]
    fn test_rolling_mean_warm_up_is_missing() {
        let tr = vec![2.0; 20];
        let out = atr(&tr, period(14), Smoothing::RollingMean);
        assert_eq!(out.len(), 20);
        for value in &out[..13] {
            assert!(value.is_none());
        }
        for value in &out[13..] {
            assert_relative_eq!(value.unwrap(), 2.0);
        }
    }

    #[test]
    fn test_rolling_mean_window() {
        let tr = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let out = atr(&tr, period(3), Smoothing::RollingMean);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_relative_eq!(out[2].unwrap(), 2.0);
        assert_relative_eq!(out[3].unwrap(), 3.0);
        assert_relative_eq!(out[4].unwrap(), 4.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(atr(&[], period(14), Smoothing::Wilder).is_empty());
        assert!(atr(&[], period(14), Smoothing::RollingMean).is_empty());
    }

    #[test]
    fn test_variants_disagree_on_same_input() {
        let tr: Vec<f64> = (1..=30).map(|i| f64::from(i) * 0.3).collect();
        let wilder = atr(&tr, period(14), Smoothing::Wilder);
        let rolling = atr(&tr, period(14), Smoothing::RollingMean);
        let last_w = wilder.last().unwrap().unwrap();
        let last_r = rolling.last().unwrap().unwrap();
        assert!((last_w - last_r).abs() > 1e-9);
    }

    #[test]
    fn test_latest_atr_worked_example() {
        // Bars (H=10,L=8,C=9), (H=11,L=9,C=10), (H=12,L=10,C=11) with
        // period 2: TR = [2, 2], Wilder ATR ends at 2.
        fn bar(day: u32, h: f64, l: f64, c: f64) -> Bar {
            let timestamp = NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            Bar::new(timestamp, c, h, l, c)
        }
        let bars = vec![
            bar(1, 10.0, 8.0, 9.0),
            bar(2, 11.0, 9.0, 10.0),
            bar(3, 12.0, 10.0, 11.0),
        ];
        let value = latest_atr(&bars, period(2), Smoothing::Wilder).unwrap();
        assert_relative_eq!(value, 2.0);
    }

    #[test]
    fn test_latest_atr_too_short() {
        assert_eq!(latest_atr(&[], period(14), Smoothing::Wilder), None);
        // Rolling mean over period 14 needs 15 bars.
        fn bar(day: u32) -> Bar {
            let timestamp = NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            Bar::new(timestamp, 10.0, 11.0, 9.0, 10.0)
        }
        let bars: Vec<Bar> = (1..=10).map(bar).collect();
        assert_eq!(latest_atr(&bars, period(14), Smoothing::RollingMean), None);
        // Wilder emits from the very first True Range sample.
        assert!(latest_atr(&bars, period(14), Smoothing::Wilder).is_some());
    }

    #[test]
    fn test_smoothing_parse() {
        assert_eq!("wilder".parse::<Smoothing>().unwrap(), Smoothing::Wilder);
        assert_eq!(
            "rolling-mean".parse::<Smoothing>().unwrap(),
            Smoothing::RollingMean
        );
        assert_eq!("SMA".parse::<Smoothing>().unwrap(), Smoothing::RollingMean);
        assert!("median".parse::<Smoothing>().is_err());
    }
}
