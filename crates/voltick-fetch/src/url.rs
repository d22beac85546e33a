//! Chart API URL construction.

use chrono::{NaiveTime, TimeZone, Utc};
use voltick_types::{DateRange, Interval};

/// Base endpoint for the Yahoo chart API.
const CHART_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Builds the chart API URL for a ticker, interval, and date range.
///
/// The range is expressed as inclusive unix-second bounds; the end date
/// extends to the end of its day so the final session is included.
#[must_use]
pub fn chart_url(ticker: &str, interval: Interval, range: DateRange) -> String {
    let period1 = Utc
        .from_utc_datetime(&range.start.and_time(NaiveTime::MIN))
        .timestamp();
    let period2 = Utc
        .from_utc_datetime(
            &range
                .end
                .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()),
        )
        .timestamp();

    format!(
        "{CHART_BASE}/{ticker}?interval={}&period1={period1}&period2={period2}&includePrePost=false",
        interval.code()
    )
}
