//! Trend classification from the last two closes.

use voltick_types::{Bar, Trend};

/// Trend label with the percent change that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendChange {
    /// Direction label.
    pub trend: Trend,
    /// Percent change between the last two closes, when computable.
    pub pct: Option<f64>,
}

impl TrendChange {
    const fn flat() -> Self {
        Self {
            trend: Trend::Flat,
            pct: None,
        }
    }
}

/// The noise band: moves of 0.05% or less in either direction are flat.
const FLAT_BAND_PCT: f64 = 0.05;

/// Classifies the trend from the two most recent closes of a bar
/// sequence.
///
/// Fails closed to flat with no percent when fewer than two bars exist,
/// when either close is non-finite, or when the previous close is
/// exactly zero. Otherwise `pct = (last - prev) / |prev| * 100`, up
/// above the band, down below it, flat inside it (band edges included).
#[must_use]
pub fn classify_trend(bars: &[Bar]) -> TrendChange {
    let [.., prev_bar, last_bar] = bars else {
        return TrendChange::flat();
    };

    let prev = prev_bar.close;
    let last = last_bar.close;
    if !prev.is_finite() || !last.is_finite() || prev == 0.0 {
        return TrendChange::flat();
    }

    let pct = (last - prev) / prev.abs() * 100.0;
    let trend = if pct > FLAT_BAND_PCT {
        Trend::Up
    } else if pct < -FLAT_BAND_PCT {
        Trend::Down
    } else {
        Trend::Flat
    };

    TrendChange {
        trend,
        pct: Some(pct),
    }
}
