//! Yahoo Finance chart client: daily closes, dividends and the company name.

use crate::{Result, error::FetchError};
use chrono::DateTime;
use kaidoki_traits::Date;
use reqwest::Client;
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};
use tracing::debug;

/// Base URL for the Yahoo chart API.
const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) kaidoki";

/// A dividend payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dividend {
    /// Payment (ex-) date.
    pub date: Date,
    /// Amount per share.
    pub amount: f64,
}

/// Parsed chart response for one symbol.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    /// Symbol as reported by Yahoo.
    pub symbol: String,
    /// Long company name.
    pub long_name: Option<String>,
    /// Short company name.
    pub short_name: Option<String>,
    /// Trading currency.
    pub currency: Option<String>,
    /// Session dates, ascending.
    pub dates: Vec<Date>,
    /// Closing prices aligned with `dates`.
    pub closes: Vec<f64>,
    /// Dividends, ascending by date.
    pub dividends: Vec<Dividend>,
}

impl Chart {
    /// Long name, else short name, else `fallback`.
    #[must_use]
    pub fn company_name(&self, fallback: &str) -> String {
        fn present(name: Option<&str>) -> Option<&str> {
            name.filter(|name| !name.trim().is_empty())
        }
        present(self.long_name.as_deref())
            .or_else(|| present(self.short_name.as_deref()))
            .unwrap_or(fallback)
            .to_string()
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: ChartIndicators,
    #[serde(default)]
    events: Option<ChartEvents>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartEvents {
    #[serde(default)]
    dividends: HashMap<String, DividendEvent>,
}

#[derive(Debug, Deserialize)]
struct DividendEvent {
    amount: f64,
    date: i64,
}

fn timestamp_to_date(ts: i64) -> Option<Date> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

/// Parse a chart response body for `symbol`.
///
/// Sessions with a null close are dropped.
///
/// # Errors
///
/// - [`FetchError::Json`] for a malformed body
/// - [`FetchError::SymbolNotFound`] for an error object or an empty result
/// - [`FetchError::NoData`] when no session has a close
pub fn parse_chart(symbol: &str, body: &str) -> Result<Chart> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;

    if let Some(err) = envelope.chart.error {
        debug!(%symbol, code = %err.code, description = %err.description, "chart error");
        return Err(FetchError::SymbolNotFound(format!(
            "{symbol} ({}: {})",
            err.code, err.description
        )));
    }

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| FetchError::SymbolNotFound(symbol.to_string()))?;

    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    let (dates, closes): (Vec<Date>, Vec<f64>) = result
        .timestamp
        .iter()
        .zip(closes)
        .filter_map(|(ts, close)| Some((timestamp_to_date(*ts)?, close?)))
        .unzip();

    if closes.is_empty() {
        return Err(FetchError::NoData(symbol.to_string()));
    }

    let mut dividends: Vec<Dividend> = result
        .events
        .map(|events| events.dividends.into_values().collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .filter_map(|event| {
            Some(Dividend {
                date: timestamp_to_date(event.date)?,
                amount: event.amount,
            })
        })
        .collect();
    dividends.sort_by_key(|d| d.date);

    Ok(Chart {
        symbol: if result.meta.symbol.is_empty() {
            symbol.to_string()
        } else {
            result.meta.symbol
        },
        long_name: result.meta.long_name,
        short_name: result.meta.short_name,
        currency: result.meta.currency,
        dates,
        closes,
        dividends,
    })
}

/// Yahoo Finance chart client.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
}

impl YahooClient {
    /// Create a client whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    fn url(symbol: &str, range: &str, interval: &str) -> String {
        format!("{YAHOO_CHART_URL}/{symbol}?range={range}&interval={interval}&events=div")
    }

    /// Fetch daily closes and dividends for `symbol` over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response holds no sessions.
    pub async fn chart(&self, symbol: &str, range: &str, interval: &str) -> Result<Chart> {
        let url = Self::url(symbol, range, interval);
        debug!(%symbol, %range, %interval, "fetching chart");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimitExceeded);
        }

        let text = response.text().await?;

        // Unknown symbols come back as 404 with a chart error object.
        if !status.is_success() && !text.contains("\"chart\"") {
            return Err(FetchError::Api(format!("HTTP {status}: {text}")));
        }

        parse_chart(symbol, &text)
    }
}
