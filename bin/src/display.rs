//! Display utilities and shared plumbing for the voltick CLI.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use voltick_lib::prelude::*;
use voltick_lib::Omission;

/// Parse a category string into a Category enum.
pub(crate) fn parse_category(s: &str) -> Result<Category> {
    match s.to_lowercase().as_str() {
        "index" => Ok(Category::Index),
        "metal" => Ok(Category::Metal),
        "energy" => Ok(Category::Energy),
        "rates" => Ok(Category::Rates),
        "agriculture" => Ok(Category::Agriculture),
        "currency" => Ok(Category::Currency),
        _ => Err(VoltickError::UnknownCategory(s.to_string()).into()),
    }
}

/// Builds the pipeline configuration shared by both build commands.
pub(crate) fn pipeline_config(period: usize, smoothing: Option<&str>) -> Result<PipelineConfig> {
    let atr_period = NonZeroUsize::new(period).context("ATR period must be non-zero")?;
    let smoothing = match smoothing {
        Some(s) => s.parse::<Smoothing>().map_err(|e| anyhow::anyhow!("{e}"))?,
        None => Smoothing::default(),
    };
    Ok(PipelineConfig {
        atr_period,
        smoothing,
        ..PipelineConfig::default()
    })
}

/// Per-instrument progress bar, hidden in quiet mode.
pub(crate) fn instrument_progress(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} instruments {msg}",
            )
            .expect("Invalid progress template")
            .progress_chars("=>-"),
    );
    pb
}

/// Prints the omission summary after a run.
pub(crate) fn report_omissions(omissions: &[Omission], quiet: bool) {
    if quiet || omissions.is_empty() {
        return;
    }
    println!("\nSkipped {} instrument/interval pairs:", omissions.len());
    for omission in omissions {
        println!("  {omission}");
    }
}
