//! Historical series assembly across all registered instruments.

use chrono::Utc;

use voltick_fetch::BarProvider;
use voltick_indicators::{atr, to_ticks, true_range, TickUnit};
use voltick_instruments::InstrumentRegistry;
use voltick_types::{Bar, Instrument, Interval, Lookback};

use crate::config::PipelineConfig;
use crate::dataset::{AuditRow, History, HistoryPoint, Meta, SymbolSeries};
use crate::outcome::{OmitReason, Omission};

/// Assembles the trailing daily ATR series for every instrument.
///
/// The lookback is fetched long so at least a year of points survives
/// the smoothing warm-up; the emitted window is then bounded to the
/// last `history_max_points` points. Failures are contained per
/// instrument, same as the snapshot path.
#[derive(Debug)]
pub struct HistoryBuilder<'a> {
    registry: &'a InstrumentRegistry,
    config: PipelineConfig,
}

impl<'a> HistoryBuilder<'a> {
    /// Creates a builder over the given registry and configuration.
    #[must_use]
    pub const fn new(registry: &'a InstrumentRegistry, config: PipelineConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the builder's configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pipeline against the provider and assembles the
    /// historical dataset.
    pub async fn build<P>(&self, provider: &P) -> History
    where
        P: BarProvider + ?Sized,
    {
        self.build_with_progress(provider, |_| {}).await
    }

    /// Like [`build`](Self::build), invoking the callback with each
    /// instrument's symbol as it completes.
    pub async fn build_with_progress<P, F>(&self, provider: &P, mut on_instrument: F) -> History
    where
        P: BarProvider + ?Sized,
        F: FnMut(&str),
    {
        let mut history = History {
            series: Default::default(),
            omissions: Vec::new(),
            meta: Meta {
                updated_utc: Utc::now(),
                source: self.config.source_name.clone(),
                atr_period: self.config.atr_period.get(),
            },
        };

        let lookback = Lookback::Days(self.config.history_lookback_days);
        for instrument in self.registry.sorted() {
            let fetched = provider
                .fetch_bars(instrument.provider_ticker(), Interval::Daily, lookback)
                .await;

            match self.series_from_bars(instrument, fetched) {
                Ok(series) => {
                    history
                        .series
                        .insert(instrument.symbol().to_string(), series);
                }
                Err(reason) => history.omissions.push(Omission {
                    symbol: instrument.symbol().to_string(),
                    interval: Interval::Daily,
                    reason,
                }),
            }
            on_instrument(instrument.symbol());
        }

        history.meta.updated_utc = Utc::now();
        history
    }

    fn series_from_bars(
        &self,
        instrument: &Instrument,
        fetched: Result<Vec<Bar>, voltick_fetch::FetchError>,
    ) -> Result<SymbolSeries, OmitReason> {
        let bars = fetched.map_err(|e| OmitReason::FetchFailed(e.to_string()))?;
        if bars.is_empty() {
            return Err(OmitReason::NoData);
        }
        if bars.len() < self.config.min_bars() {
            return Err(OmitReason::InsufficientHistory {
                needed: self.config.min_bars(),
                got: bars.len(),
            });
        }

        let tr = true_range(&bars);
        let smoothed = atr(&tr, self.config.atr_period, self.config.smoothing);

        let mut unit = TickUnit::Price;
        let mut points = Vec::new();
        let mut audit = Vec::new();
        // TR sample i derives from bar i+1, so every emitted value
        // lands on the date of the bar that produced it.
        for (i, value) in smoothed.iter().enumerate() {
            let Some(value) = value else { continue };
            let bar = &bars[i + 1];
            let (converted, converted_unit) = to_ticks(*value, instrument.tick_size());
            unit = converted_unit;
            points.push(HistoryPoint {
                date: bar.date(),
                value: converted,
            });
            audit.push(AuditRow {
                date: bar.date(),
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                atr: *value,
                atr_ticks: converted,
            });
        }

        if points.len() > self.config.history_max_points {
            let drop = points.len() - self.config.history_max_points;
            points.drain(..drop);
            audit.drain(..drop);
        }

        if points.len() < 2 {
            return Err(OmitReason::InsufficientHistory {
                needed: 2,
                got: points.len(),
            });
        }

        Ok(SymbolSeries {
            points,
            unit,
            audit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_provider::{constant_range_bars, trending_bars, MockProvider};
    use approx::assert_relative_eq;
    use std::num::NonZeroUsize;
    use voltick_indicators::Smoothing;

    fn builder(config: PipelineConfig) -> HistoryBuilder<'static> {
        HistoryBuilder::new(InstrumentRegistry::global(), config)
    }

    fn seed_all(provider: &mut MockProvider, bars: Vec<Bar>) {
        for instrument in InstrumentRegistry::global().all() {
            provider.set(instrument.provider_ticker(), Interval::Daily, bars.clone());
        }
    }

    #[tokio::test]
    async fn test_all_instruments_present_when_provider_healthy() {
        let mut provider = MockProvider::new();
        seed_all(&mut provider, trending_bars(60, 100.0));

        let history = builder(PipelineConfig::default()).build(&provider).await;

        assert_eq!(history.series.len(), InstrumentRegistry::global().len());
        assert!(history.omissions.is_empty());
        assert!(!history.series.contains_key("_meta"));
    }

    #[tokio::test]
    async fn test_series_dates_and_values() {
        let mut provider = MockProvider::new();
        // Constant TR 2 and flat closes: Wilder ATR is exactly 2 at
        // every index, so each MES point is 2 / 0.25 = 8 ticks.
        seed_all(&mut provider, constant_range_bars(30, 100.0, 2.0));

        let history = builder(PipelineConfig::default()).build(&provider).await;
        let series = &history.series["MES"];

        // 30 bars produce 29 True Range samples; Wilder emits them all.
        assert_eq!(series.points.len(), 29);
        assert_eq!(series.unit, TickUnit::Ticks);
        for point in &series.points {
            assert_relative_eq!(point.value, 8.0);
        }
        // First emitted point lands on the second bar's date.
        assert_eq!(
            series.points[0].date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        // Dates ascend strictly.
        for pair in series.points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_audit_rows_pair_with_points() {
        let mut provider = MockProvider::new();
        seed_all(&mut provider, constant_range_bars(30, 100.0, 2.0));

        let history = builder(PipelineConfig::default()).build(&provider).await;
        let series = &history.series["ZN"];

        assert_eq!(series.audit.len(), series.points.len());
        for (row, point) in series.audit.iter().zip(&series.points) {
            assert_eq!(row.date, point.date);
            assert_relative_eq!(row.atr_ticks, point.value);
            assert_relative_eq!(row.atr, 2.0);
            assert_relative_eq!(row.close, 100.0);
        }
    }

    #[tokio::test]
    async fn test_window_bound() {
        let mut provider = MockProvider::new();
        seed_all(&mut provider, constant_range_bars(420, 100.0, 2.0));

        let history = builder(PipelineConfig::default()).build(&provider).await;
        let series = &history.series["ES"];

        assert_eq!(series.points.len(), 365);
        assert_eq!(series.audit.len(), 365);
        // The window keeps the most recent points: 420 bars end on day
        // 420, so the last point is the last bar's date.
        assert_eq!(
            series.points.last().unwrap().date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                + chrono::TimeDelta::days(419)
        );
    }

    #[tokio::test]
    async fn test_rolling_mean_warm_up_shortens_series() {
        let mut provider = MockProvider::new();
        seed_all(&mut provider, constant_range_bars(30, 100.0, 2.0));

        let config = PipelineConfig {
            smoothing: Smoothing::RollingMean,
            ..PipelineConfig::default()
        };
        let history = builder(config).build(&provider).await;
        let series = &history.series["ES"];

        // 29 True Range samples, first 13 still warming up.
        assert_eq!(series.points.len(), 16);
        for point in &series.points {
            assert_relative_eq!(point.value, 8.0);
        }
    }

    #[tokio::test]
    async fn test_failures_contained_per_instrument() {
        let mut provider = MockProvider::new();
        seed_all(&mut provider, trending_bars(60, 100.0));
        provider.fail("GC=F", Interval::Daily);
        provider.set("NG=F", Interval::Daily, Vec::new());

        let history = builder(PipelineConfig::default()).build(&provider).await;

        assert!(!history.series.contains_key("GC"));
        assert!(!history.series.contains_key("MGC"));
        assert!(!history.series.contains_key("NG"));
        assert!(history.series.contains_key("ES"));
        assert!(history
            .omissions
            .iter()
            .any(|o| o.symbol == "GC" && matches!(o.reason, OmitReason::FetchFailed(_))));
        assert!(history
            .omissions
            .iter()
            .any(|o| o.symbol == "NG" && o.reason == OmitReason::NoData));
    }

    #[tokio::test]
    async fn test_too_few_surviving_points_omits() {
        let mut provider = MockProvider::new();
        // 15 bars clear the min-bars gate but leave only one rolling
        // mean point after warm-up.
        seed_all(&mut provider, constant_range_bars(15, 100.0, 2.0));

        let config = PipelineConfig {
            smoothing: Smoothing::RollingMean,
            ..PipelineConfig::default()
        };
        let history = builder(config).build(&provider).await;

        assert!(history.series.is_empty());
        assert!(history.omissions.iter().all(|o| matches!(
            o.reason,
            OmitReason::InsufficientHistory { needed: 2, got: 1 }
        )));
    }

    #[tokio::test]
    async fn test_registry_tick_coverage_keeps_units_uniform() {
        let mut provider = MockProvider::new();
        seed_all(&mut provider, constant_range_bars(30, 100.0, 2.0));

        let history = builder(PipelineConfig::default()).build(&provider).await;

        // Every registered instrument carries a tick size, so a healthy
        // run never mixes units and the file-level tag stays "ticks".
        assert!(history
            .series
            .values()
            .all(|series| series.unit == TickUnit::Ticks));
        assert_eq!(history.overall_unit(), TickUnit::Ticks);
        // 6N converts like the rest: TR 2.0 at a 0.0001 tick.
        assert_relative_eq!(history.series["6N"].points[0].value, 20_000.0);
    }

    #[tokio::test]
    async fn test_custom_period() {
        let mut provider = MockProvider::new();
        seed_all(&mut provider, constant_range_bars(10, 50.0, 1.0));

        let config = PipelineConfig {
            atr_period: NonZeroUsize::new(5).unwrap(),
            ..PipelineConfig::default()
        };
        let history = builder(config).build(&provider).await;
        let series = &history.series["ES"];

        assert_eq!(series.points.len(), 9);
        for point in &series.points {
            assert_relative_eq!(point.value, 4.0);
        }
    }
}
