//! HTTP client for the chart API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use voltick_types::{Bar, Interval, Lookback};

use crate::parse::{self, ChartResponse};
use crate::provider::BarProvider;
use crate::url::chart_url;

/// Configuration for the chart client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
            user_agent: format!("voltick/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching bars.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status after all retries.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Payload could not be interpreted.
    #[error(transparent)]
    Parse(#[from] parse::ParseError),
}

/// Chart API client with connection pooling and retry logic.
#[derive(Debug, Clone)]
pub struct YahooChartClient {
    client: Client,
    config: ClientConfig,
}

impl YahooChartClient {
    /// Creates a new chart client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Requests a chart payload, returning `Ok(None)` when the ticker
    /// has no data (404).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries.
    async fn fetch_chart(&self, url: &str) -> Result<Option<ChartResponse>, FetchError> {
        let mut attempts = 0;

        loop {
            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Ok(None);
                    }

                    // Retry on server errors (5xx) and rate limiting (429)
                    if response.status().is_server_error()
                        || response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            let delay = self.calculate_backoff_delay(attempts);
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                        return Err(FetchError::ServerError {
                            status: response.status().as_u16(),
                        });
                    }

                    response.error_for_status_ref()?;
                    return Ok(Some(response.json::<ChartResponse>().await?));
                }
                Err(e) if self.is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter (±25%) keyed on the attempt number; avoids
        // pulling in a random number generator for this alone.
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            ((u64::from(attempt) * 17) % (jitter_range * 2)) as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(&self, error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect() || error.is_request()
    }
}

#[async_trait]
impl BarProvider for YahooChartClient {
    async fn fetch_bars(
        &self,
        ticker: &str,
        interval: Interval,
        lookback: Lookback,
    ) -> Result<Vec<Bar>, FetchError> {
        let url = chart_url(ticker, interval, lookback.resolve());
        match self.fetch_chart(&url).await? {
            Some(response) => Ok(parse::bars_from_chart(response, interval)?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_delay_ms, 500);
        assert_eq!(config.max_delay_ms, 10_000);
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = YahooChartClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_backoff_delay_calculation() {
        let client = YahooChartClient::with_defaults().unwrap();

        // First attempt: base_delay * 2 = 1000ms (plus jitter)
        let delay1 = client.calculate_backoff_delay(1);
        assert!(delay1.as_millis() >= 750 && delay1.as_millis() <= 1250);

        // Second attempt: base_delay * 4 = 2000ms (plus jitter)
        let delay2 = client.calculate_backoff_delay(2);
        assert!(delay2.as_millis() >= 1500 && delay2.as_millis() <= 2500);

        // High attempt should be capped at max_delay
        let delay_high = client.calculate_backoff_delay(20);
        assert!(delay_high.as_millis() <= 12_500); // max_delay + 25% jitter
    }

    #[test]
    fn test_backoff_jitter_offsets_the_exponential_delay() {
        let client = YahooChartClient::with_defaults().unwrap();

        // 1000ms base, jitter range 250: offset 17 lands at -233.
        assert_eq!(client.calculate_backoff_delay(1).as_millis(), 767);
        // 2000ms base, jitter range 500: offset 34 lands at -466.
        assert_eq!(client.calculate_backoff_delay(2).as_millis(), 1534);
        // The same attempt never resolves to the unjittered delay.
        for attempt in 1..=3 {
            let unjittered = 500u64 << attempt;
            assert_ne!(
                client.calculate_backoff_delay(attempt).as_millis(),
                u128::from(unjittered)
            );
        }
    }
}
