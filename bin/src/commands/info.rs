//! Info command implementation.
//!
//! This module handles displaying detailed information about a specific
//! instrument.

use anyhow::Result;
use voltick_lib::prelude::*;

/// Show detailed information about an instrument.
pub(crate) fn show_info(symbol: &str) -> Result<()> {
    let registry = InstrumentRegistry::global();
    let instrument = registry
        .get(symbol)
        .ok_or_else(|| VoltickError::UnknownInstrument(symbol.to_string()))?;

    println!("Instrument: {}", instrument.name());
    println!("Symbol:     {}", instrument.symbol());
    println!("Ticker:     {}", instrument.provider_ticker());
    println!("Category:   {}", instrument.category());

    match instrument.tick_size() {
        Some(ts) => println!("Tick Size:  {ts} points"),
        None => println!("Tick Size:  (none; volatility reported in price points)"),
    }
    if let Some(tv) = instrument.tick_value() {
        println!("Tick Value: ${tv}");
    }

    // Micros share a full-size provider ticker; make that visible.
    let siblings: Vec<&str> = registry
        .sorted()
        .into_iter()
        .filter(|i| {
            i.provider_ticker() == instrument.provider_ticker() && i.symbol() != instrument.symbol()
        })
        .map(Instrument::symbol)
        .collect();
    if !siblings.is_empty() {
        println!("Shares bar data with: {}", siblings.join(", "));
    }

    Ok(())
}
