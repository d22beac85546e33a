//! The bar source adapter trait.

use async_trait::async_trait;
use voltick_types::{Bar, Interval, Lookback};

use crate::FetchError;

/// External source of OHLC bars.
///
/// Returning an empty vector means "no data exists for this request"
/// and is not an error. Errors signal transient failures; callers are
/// expected to contain them at the per-instrument boundary rather than
/// abort a batch run.
#[async_trait]
pub trait BarProvider: Send + Sync {
    /// Fetches an ordered, sanitized bar sequence for a provider ticker.
    async fn fetch_bars(
        &self,
        ticker: &str,
        interval: Interval,
        lookback: Lookback,
    ) -> Result<Vec<Bar>, FetchError>;
}
