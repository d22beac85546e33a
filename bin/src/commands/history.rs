//! History command implementation.
//!
//! Builds the trailing daily ATR series artifact and, optionally,
//! per-symbol CSV audit tables.

use crate::display::{instrument_progress, pipeline_config, report_omissions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use voltick_lib::prelude::*;

#[allow(clippy::too_many_arguments)]
pub(crate) async fn history(
    out: &Path,
    period: usize,
    smoothing: Option<&str>,
    lookback_days: u32,
    max_points: usize,
    audit_dir: Option<&Path>,
    compact: bool,
    quiet: bool,
) -> Result<()> {
    let registry = InstrumentRegistry::global();
    let config = PipelineConfig {
        history_lookback_days: lookback_days,
        history_max_points: max_points,
        ..pipeline_config(period, smoothing)?
    };
    let client = YahooChartClient::with_defaults().context("Failed to create HTTP client")?;

    let progress = instrument_progress(registry.len(), quiet);
    let builder = HistoryBuilder::new(registry, config);
    let history = builder
        .build_with_progress(&client, |symbol| {
            progress.set_message(symbol.to_string());
            progress.inc(1);
        })
        .await;
    progress.finish_with_message(format!("{} series", history.series.len()));

    let file = File::create(out)
        .with_context(|| format!("Failed to create output file: {}", out.display()))?;
    JsonWriter::new()
        .with_pretty(!compact)
        .write_history(&history, BufWriter::new(file))
        .context("Failed to write history artifact")?;

    if let Some(dir) = audit_dir {
        write_audit_tables(&history, dir)?;
        if !quiet {
            println!("Audit tables written to: {}", dir.display());
        }
    }

    report_omissions(&history.omissions, quiet);
    if !quiet {
        println!("Output written to: {}", out.display());
    }

    Ok(())
}

/// Writes one CSV audit table per emitted series into `dir`.
fn write_audit_tables(history: &History, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create audit directory: {}", dir.display()))?;

    let writer = CsvWriter::new();
    for (symbol, series) in &history.series {
        let path = dir.join(format!("{symbol}.csv"));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create audit file: {}", path.display()))?;
        writer
            .write_audit(&series.audit, BufWriter::new(file))
            .with_context(|| format!("Failed to write audit table for {symbol}"))?;
    }

    Ok(())
}
