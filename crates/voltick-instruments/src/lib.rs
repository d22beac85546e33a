//! Futures instrument registry for the voltick volatility pipeline.
//!
//! This crate provides the static table of supported futures contracts
//! with their provider tickers and tick metadata.
//!
//! # Example
//!
//! ```
//! use voltick_instruments::InstrumentRegistry;
//!
//! let registry = InstrumentRegistry::global();
//!
//! // Lookup by symbol
//! if let Some(instrument) = registry.get("mes") {
//!     println!("{}: tick size {:?}", instrument.name(), instrument.tick_size());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltick/voltick/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use voltick_types::{Category, Instrument};

/// The instrument metadata JSON embedded at compile time.
const INSTRUMENTS_JSON: &str = include_str!("../data/instruments.json");

/// Global instrument registry instance.
static REGISTRY: OnceLock<InstrumentRegistry> = OnceLock::new();

/// Registry of all supported futures instruments.
#[derive(Debug)]
pub struct InstrumentRegistry {
    instruments: HashMap<String, Instrument>,
}

impl InstrumentRegistry {
    /// Returns the global instrument registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads instruments from the embedded JSON data.
    fn load() -> Self {
        let instruments: HashMap<String, Instrument> =
            serde_json::from_str(INSTRUMENTS_JSON).expect("Invalid instruments.json");
        Self { instruments }
    }

    /// Looks up an instrument by symbol (case-insensitive).
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.get(&symbol.to_uppercase())
    }

    /// Returns all instruments as an iterator (no guaranteed order).
    pub fn all(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.values()
    }

    /// Returns all symbols sorted alphabetically.
    ///
    /// This is the deterministic iteration order used by the pipeline
    /// builders.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.instruments.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Returns all instruments sorted by symbol.
    pub fn sorted(&self) -> Vec<&Instrument> {
        let mut instruments: Vec<&Instrument> = self.instruments.values().collect();
        instruments.sort_unstable_by_key(|i| i.symbol());
        instruments
    }

    /// Returns the total number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Returns instruments matching the given category, sorted by symbol.
    pub fn by_category(&self, category: Category) -> Vec<&Instrument> {
        let mut instruments: Vec<&Instrument> = self
            .instruments
            .values()
            .filter(|i| i.category() == category)
            .collect();
        instruments.sort_unstable_by_key(|i| i.symbol());
        instruments
    }

    /// Searches instruments by symbol or name pattern (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&Instrument> {
        let pattern = pattern.to_lowercase();
        let mut instruments: Vec<&Instrument> = self
            .instruments
            .values()
            .filter(|i| {
                i.symbol().to_lowercase().contains(&pattern)
                    || i.name().to_lowercase().contains(&pattern)
            })
            .collect();
        instruments.sort_unstable_by_key(|i| i.symbol());
        instruments
    }
}
