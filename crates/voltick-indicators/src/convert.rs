//! Conversion of price-scale values to instrument tick units.

use serde::{Deserialize, Serialize};

/// Unit of a converted volatility value.
///
/// Consumers must not silently misread scale: a value that could not be
/// converted stays in price points and is tagged as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickUnit {
    /// Instrument-native tick units.
    #[default]
    Ticks,
    /// Raw price points (no usable tick size).
    Price,
}

impl TickUnit {
    /// Returns the unit as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ticks => "ticks",
            Self::Price => "price",
        }
    }
}

impl std::fmt::Display for TickUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Converts a price-scale value to tick units.
///
/// Divides by `tick_size` when it is a positive finite number and
/// passes the value through unchanged (tagged [`TickUnit::Price`])
/// otherwise, so a zero or absent tick size never reaches a divisor.
/// The quotient is exact; presentation rounding happens at the
/// serialization boundary.
#[must_use]
pub fn to_ticks(value: f64, tick_size: Option<f64>) -> (f64, TickUnit) {
    match tick_size {
        Some(ts) if ts.is_finite() && ts > 0.0 => (value / ts, TickUnit::Ticks),
        _ => (value, TickUnit::Price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_conversion() {
        let (ticks, unit) = to_ticks(2.0, Some(0.5));
        assert_relative_eq!(ticks, 4.0);
        assert_eq!(unit, TickUnit::Ticks);
    }

    #[test]
    fn test_linearity() {
        let (a, _) = to_ticks(1.37, Some(0.25));
        let (b, _) = to_ticks(2.74, Some(0.25));
        assert_relative_eq!(b, 2.0 * a);
    }

    #[test]
    fn test_absent_tick_size_passes_through() {
        let (value, unit) = to_ticks(1.37, None);
        assert_relative_eq!(value, 1.37);
        assert_eq!(unit, TickUnit::Price);
    }

    #[test]
    fn test_zero_tick_size_never_divides() {
        let (value, unit) = to_ticks(1.37, Some(0.0));
        assert_relative_eq!(value, 1.37);
        assert_eq!(unit, TickUnit::Price);
    }

    #[test]
    fn test_negative_and_non_finite_tick_size() {
        assert_eq!(to_ticks(1.0, Some(-0.25)).1, TickUnit::Price);
        assert_eq!(to_ticks(1.0, Some(f64::NAN)).1, TickUnit::Price);
        assert_eq!(to_ticks(1.0, Some(f64::INFINITY)).1, TickUnit::Price);
    }
}
