//! Snapshot command implementation.
//!
//! Builds the consolidated daily + hourly ATR snapshot and writes it as
//! a JSON artifact.

use crate::display::{instrument_progress, pipeline_config, report_omissions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use voltick_lib::prelude::*;

#[allow(clippy::too_many_arguments)]
pub(crate) async fn snapshot(
    out: &Path,
    period: usize,
    smoothing: Option<&str>,
    daily_lookback: u32,
    hourly_lookback: u32,
    compact: bool,
    quiet: bool,
) -> Result<()> {
    let registry = InstrumentRegistry::global();
    let config = PipelineConfig {
        daily_lookback_days: daily_lookback,
        hourly_lookback_days: hourly_lookback,
        ..pipeline_config(period, smoothing)?
    };
    let client = YahooChartClient::with_defaults().context("Failed to create HTTP client")?;

    let progress = instrument_progress(registry.len(), quiet);
    let builder = SnapshotBuilder::new(registry, config);
    let snapshot = builder
        .build_with_progress(&client, |symbol| {
            progress.set_message(symbol.to_string());
            progress.inc(1);
        })
        .await;
    progress.finish_with_message(format!(
        "{} daily / {} hourly entries",
        snapshot.daily.len(),
        snapshot.hourly.len()
    ));

    let file = File::create(out)
        .with_context(|| format!("Failed to create output file: {}", out.display()))?;
    JsonWriter::new()
        .with_pretty(!compact)
        .write_snapshot(&snapshot, BufWriter::new(file))
        .context("Failed to write snapshot artifact")?;

    report_omissions(&snapshot.omissions, quiet);
    if !quiet {
        println!("Output written to: {}", out.display());
    }

    Ok(())
}
