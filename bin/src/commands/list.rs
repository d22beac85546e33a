//! List command implementation.
//!
//! This module handles listing supported instruments with optional filtering.

use crate::display::parse_category;
use anyhow::Result;
use voltick_lib::prelude::*;

/// List supported instruments with optional category filter or search pattern.
pub(crate) fn list_instruments(category: Option<&str>, search: Option<&str>) -> Result<()> {
    let registry = InstrumentRegistry::global();

    let instruments: Vec<_> = match (category, search) {
        (Some(cat), _) => {
            let category = parse_category(cat)?;
            registry.by_category(category)
        }
        (_, Some(pattern)) => registry.search(pattern),
        (None, None) => registry.sorted(),
    };

    if instruments.is_empty() {
        println!("No instruments found.");
        return Ok(());
    }

    println!(
        "{:<8} {:<28} {:<10} {:<12} {:<10}",
        "SYMBOL", "NAME", "TICKER", "CATEGORY", "TICK SIZE"
    );
    println!("{}", "-".repeat(72));

    for instrument in &instruments {
        let tick_size = instrument
            .tick_size()
            .map_or_else(|| "-".to_string(), |ts| ts.to_string());
        println!(
            "{:<8} {:<28} {:<10} {:<12} {:<10}",
            instrument.symbol(),
            instrument.name(),
            instrument.provider_ticker(),
            instrument.category(),
            tick_size
        );
    }

    println!("\nTotal: {} instruments", instruments.len());
    Ok(())
}
