//! Snapshot assembly across all registered instruments.

use chrono::Utc;

use voltick_fetch::BarProvider;
use voltick_indicators::{classify_trend, latest_atr, to_ticks};
use voltick_instruments::InstrumentRegistry;
use voltick_types::{Bar, Instrument, Interval, Lookback};

use crate::config::PipelineConfig;
use crate::dataset::{Meta, Snapshot, SnapshotEntry};
use crate::outcome::{OmitReason, Omission};

/// Assembles the consolidated snapshot dataset.
///
/// Instruments are processed sequentially in sorted-symbol order; for
/// each, both intervals go through fetch -> (skip | compute -> emit).
/// A failure on one instrument+interval records an omission and the
/// run continues. Given identical provider responses, two runs differ
/// only in `meta.updated_utc`.
#[derive(Debug)]
pub struct SnapshotBuilder<'a> {
    registry: &'a InstrumentRegistry,
    config: PipelineConfig,
}

impl<'a> SnapshotBuilder<'a> {
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

    /// Runs the pipeline against the provider and assembles a snapshot.
    pub async fn build<P>(&self, provider: &P) -> Snapshot
    where
        P: BarProvider + ?Sized,
    {
        self.build_with_progress(provider, |_| {}).await
    }

    /// Like [`build`](Self::build), invoking the callback with each
    /// instrument's symbol as it completes.
    pub async fn build_with_progress<P, F>(&self, provider: &P, mut on_instrument: F) -> Snapshot
    where
        P: BarProvider + ?Sized,
        F: FnMut(&str),
    {
        let mut snapshot = Snapshot {
            daily: Default::default(),
            hourly: Default::default(),
            omissions: Vec::new(),
            meta: Meta {
                updated_utc: Utc::now(),
                source: self.config.source_name.clone(),
                atr_period: self.config.atr_period.get(),
            },
        };

        for instrument in self.registry.sorted() {
            for &interval in Interval::all() {
                let lookback = Lookback::Days(self.config.lookback_days(interval));
                let fetched = provider
                    .fetch_bars(instrument.provider_ticker(), interval, lookback)
                    .await;

                match self.entry_from_bars(instrument, fetched) {
                    Ok(entry) => {
                        let map = match interval {
                            Interval::Daily => &mut snapshot.daily,
                            Interval::Hourly => &mut snapshot.hourly,
                        };
                        map.insert(instrument.symbol().to_string(), entry);
                    }
                    Err(reason) => snapshot.omissions.push(Omission {
                        symbol: instrument.symbol().to_string(),
                        interval,
                        reason,
                    }),
                }
            }
            on_instrument(instrument.symbol());
        }

        // Stamp after all fetches so the timestamp reflects completion.
        snapshot.meta.updated_utc = Utc::now();
        snapshot
    }

    /// The compute half of the per-instrument state machine.
    fn entry_from_bars(
        &self,
        instrument: &Instrument,
        fetched: Result<Vec<Bar>, voltick_fetch::FetchError>,
    ) -> Result<SnapshotEntry, OmitReason> {
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

        let atr = latest_atr(&bars, self.config.atr_period, self.config.smoothing).ok_or(
            OmitReason::InsufficientHistory {
                needed: self.config.min_bars(),
                got: bars.len(),
            },
        )?;

        let (pips, unit) = to_ticks(atr, instrument.tick_size());
        let change = classify_trend(&bars);

        Ok(SnapshotEntry {
            trend: change.trend,
            pips: Some(pips),
            usd: None,
            pct: change.pct,
            unit,
        })
    }
}
