//! Futures instrument definitions.

use serde::{Deserialize, Serialize};

/// Instrument category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Equity index futures.
    Index,
    /// Metals (gold, silver, copper, platinum).
    Metal,
    /// Energy (crude, natural gas, refined products).
    Energy,
    /// Interest rate futures (treasury notes and bonds).
    Rates,
    /// Agricultural futures (grains, oilseeds).
    Agriculture,
    /// Currency futures.
    Currency,
}

impl Category {
    /// Returns the category as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Metal => "metal",
            Self::Energy => "energy",
            Self::Rates => "rates",
            Self::Agriculture => "agriculture",
            Self::Currency => "currency",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A futures instrument with the metadata needed to fetch its bars and
/// express its volatility in native tick units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique symbol (e.g., "MES", "CL").
    symbol: String,
    /// Human-readable name (e.g., "Micro E-mini S&P 500").
    name: String,
    /// Ticker used when requesting bars from the data provider.
    provider_ticker: String,
    /// Instrument category.
    category: Category,
    /// Smallest price increment, in price points. Absent or non-positive
    /// means volatility is reported in price points instead of ticks.
    tick_size: Option<f64>,
    /// Currency value of one tick, where defined. Carried for a future
    /// USD column; nothing computes with it yet.
    tick_value: Option<f64>,
}

impl Instrument {
    /// Creates a new instrument.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        provider_ticker: impl Into<String>,
        category: Category,
        tick_size: Option<f64>,
        tick_value: Option<f64>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            provider_ticker: provider_ticker.into(),
            category,
            tick_size,
            tick_value,
        }
    }

    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the provider ticker.
    #[must_use]
    pub fn provider_ticker(&self) -> &str {
        &self.provider_ticker
    }

    /// Returns the instrument category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the tick size, filtering out zero, negative, and
    /// non-finite configured values so it is safe as a divisor.
    #[must_use]
    pub fn tick_size(&self) -> Option<f64> {
        self.tick_size.filter(|ts| ts.is_finite() && *ts > 0.0)
    }

    /// Returns the currency value of one tick, if defined.
    #[must_use]
    pub fn tick_value(&self) -> Option<f64> {
        self.tick_value.filter(|tv| tv.is_finite() && *tv > 0.0)
    }

    /// Returns true if this is an equity index instrument.
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self.category, Category::Index)
    }

    /// Returns true if this is a metals instrument.
    #[must_use]
    pub const fn is_metal(&self) -> bool {
        matches!(self.category, Category::Metal)
    }

    /// Returns true if this is an energy instrument.
    #[must_use]
    pub const fn is_energy(&self) -> bool {
        matches!(self.category, Category::Energy)
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
