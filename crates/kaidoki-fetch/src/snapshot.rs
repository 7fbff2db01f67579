//! Market snapshot: everything known about a symbol before scoring.

use crate::{
    Result,
    error::FetchError,
    fmp::{FmpClient, api_key_from_env},
    types::Fundamentals,
    yahoo::{Chart, Dividend, YahooClient},
};
use chrono::{Days, Utc};
use kaidoki_traits::{Date, PriceHistory, Symbol};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Days of dividends counted toward the trailing yield.
const DIVIDEND_LOOKBACK_DAYS: u64 = 365;

/// Data-source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Yahoo chart range (default: "180d")
    pub range: String,
    /// Yahoo chart interval (default: "1d")
    pub interval: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            range: "180d".to_string(),
            interval: "1d".to_string(),
            timeout_secs: 10,
        }
    }
}

impl FetchConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Prices, meta data and fundamentals for one symbol.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    /// Normalised symbol.
    pub symbol: Symbol,
    /// Company name, or the symbol when unknown.
    pub company_name: String,
    /// Trading currency.
    pub currency: Option<String>,
    /// Daily closes, ascending.
    pub history: PriceHistory,
    /// Latest close.
    pub close: f64,
    /// Close of the session before.
    pub previous_close: f64,
    /// Highest close in the fetched window.
    pub high_52w: Option<f64>,
    /// Lowest close in the fetched window.
    pub low_52w: Option<f64>,
    /// Trailing twelve-month dividend yield in percent.
    pub dividend_yield: Option<f64>,
    /// Fundamentals from FMP.
    pub fundamentals: Fundamentals,
}

impl MarketSnapshot {
    /// Assemble a snapshot from a parsed chart.
    ///
    /// `as_of` anchors the trailing-year dividend window.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InsufficientHistory`] with fewer than two sessions.
    pub fn from_chart(
        symbol: &str,
        chart: &Chart,
        fundamentals: Fundamentals,
        as_of: Date,
    ) -> Result<Self> {
        let history = PriceHistory::from_points(&chart.dates, &chart.closes)?;

        let (Some(close), Some(previous_close)) = (history.last_close(), history.previous_close())
        else {
            return Err(FetchError::InsufficientHistory(symbol.to_string()));
        };

        Ok(Self {
            symbol: symbol.to_string(),
            company_name: chart.company_name(symbol),
            currency: chart.currency.clone(),
            high_52w: history.max_close(),
            low_52w: history.min_close(),
            dividend_yield: dividend_yield(&chart.dividends, close, as_of),
            history,
            close,
            previous_close,
            fundamentals,
        })
    }

    /// Latest close minus the previous close.
    #[must_use]
    pub fn change(&self) -> f64 {
        self.close - self.previous_close
    }

    /// Day change in percent, `None` when the previous close is 0.
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        (self.previous_close != 0.0).then(|| self.change() / self.previous_close * 100.0)
    }
}

/// Trailing dividend yield in percent.
///
/// Sums dividends dated on or after `as_of` minus 365 days. `None` when
/// nothing was paid in that year or `close` is not positive.
#[must_use]
pub fn dividend_yield(dividends: &[Dividend], close: f64, as_of: Date) -> Option<f64> {
    if close <= 0.0 {
        return None;
    }
    let since = as_of.checked_sub_days(Days::new(DIVIDEND_LOOKBACK_DAYS))?;
    let recent: Vec<f64> = dividends
        .iter()
        .filter(|d| d.date >= since)
        .map(|d| d.amount)
        .collect();
    if recent.is_empty() {
        return None;
    }
    Some(recent.iter().sum::<f64>() / close * 100.0)
}

/// Fetches market snapshots from Yahoo (prices) and FMP (fundamentals).
#[derive(Debug, Clone)]
pub struct DataFetcher {
    yahoo: YahooClient,
    fmp: Option<FmpClient>,
    config: FetchConfig,
}

impl DataFetcher {
    /// Create a fetcher, reading `FMP_API_KEY` from the environment.
    ///
    /// A missing key is not an error: fundamentals are then left unset.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let fmp = match api_key_from_env() {
            Ok(key) => Some(FmpClient::with_timeout(key, config.timeout())?),
            Err(_) => {
                warn!("FMP_API_KEY is not set; PER, PBR, ROE and other fundamentals will be unavailable");
                None
            }
        };
        Ok(Self::with_clients(YahooClient::new(config.timeout())?, fmp, config))
    }

    /// Create a fetcher from explicit clients.
    #[must_use]
    pub const fn with_clients(
        yahoo: YahooClient,
        fmp: Option<FmpClient>,
        config: FetchConfig,
    ) -> Self {
        Self { yahoo, fmp, config }
    }

    /// Whether fundamentals will be fetched.
    #[must_use]
    pub const fn has_fundamentals(&self) -> bool {
        self.fmp.is_some()
    }

    /// Fetch prices and fundamentals for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error when the price history cannot be fetched or has fewer
    /// than two sessions. Fundamentals failures only log.
    pub async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot> {
        info!(%symbol, range = %self.config.range, "fetching market data");

        let chart_request = self
            .yahoo
            .chart(symbol, &self.config.range, &self.config.interval);

        let (chart, fundamentals) = match &self.fmp {
            Some(fmp) => {
                let (chart, fundamentals) = tokio::join!(chart_request, fmp.fundamentals(symbol));
                (chart?, fundamentals)
            }
            None => (chart_request.await?, Fundamentals::default()),
        };

        debug!(%symbol, sessions = chart.closes.len(), dividends = chart.dividends.len(), "chart received");
        MarketSnapshot::from_chart(symbol, &chart, fundamentals, Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn chart() -> Chart {
        Chart {
            symbol: "7203.T".into(),
            long_name: None,
            short_name: Some("TOYOTA MOTOR CORP".into()),
            currency: Some("JPY".into()),
            dates: vec![date(2024, 7, 1), date(2024, 7, 2), date(2024, 7, 3)],
            closes: vec![3000.0, 3200.0, 3100.0],
            dividends: vec![
                Dividend {
                    date: date(2023, 6, 30),
                    amount: 30.0,
                },
                Dividend {
                    date: date(2023, 9, 28),
                    amount: 30.0,
                },
                Dividend {
                    date: date(2024, 3, 28),
                    amount: 32.0,
                },
            ],
        }
    }

    #[test]
    fn test_dividend_yield() {
        let c = chart();
        // 2023-09-28 and 2024-03-28 fall within a year of 2024-07-03.
        let y = dividend_yield(&c.dividends, 3100.0, date(2024, 7, 3)).unwrap();
        assert_relative_eq!(y, 62.0 / 3100.0 * 100.0, epsilon = 1e-12);

        assert_eq!(dividend_yield(&c.dividends, 3100.0, date(2026, 1, 1)), None);
        assert_eq!(dividend_yield(&c.dividends, 0.0, date(2024, 7, 3)), None);
        assert_eq!(dividend_yield(&[], 3100.0, date(2024, 7, 3)), None);
    }

    #[test]
    fn test_snapshot_from_chart() {
        let snapshot =
            MarketSnapshot::from_chart("7203.T", &chart(), Fundamentals::default(), date(2024, 7, 3))
                .unwrap();

        assert_eq!(snapshot.company_name, "TOYOTA MOTOR CORP");
        assert_relative_eq!(snapshot.close, 3100.0);
        assert_relative_eq!(snapshot.previous_close, 3200.0);
        assert_eq!(snapshot.high_52w, Some(3200.0));
        assert_eq!(snapshot.low_52w, Some(3000.0));
        assert_relative_eq!(snapshot.change(), -100.0);
        assert_relative_eq!(snapshot.change_percent().unwrap(), -3.125);
        assert!(snapshot.dividend_yield.is_some());
        assert_eq!(snapshot.history.len(), 3);
    }

    #[test]
    fn test_snapshot_single_session() {
        let mut c = chart();
        c.dates.truncate(1);
        c.closes.truncate(1);
        let result = MarketSnapshot::from_chart("7203.T", &c, Fundamentals::default(), date(2024, 7, 3));
        assert!(matches!(result, Err(FetchError::InsufficientHistory(_))));
    }

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.range, "180d");
        assert_eq!(config.interval, "1d");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
