//! FMP API client implementation.

use crate::{
    Result,
    error::FetchError,
    types::{AnalystEstimate, BalanceSheet, Fundamentals, IncomeStatement, Period},
};
use reqwest::Client;
use std::{env, time::Duration};
use tracing::{debug, warn};

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Environment variable holding the API key.
pub const FMP_API_KEY_VAR: &str = "FMP_API_KEY";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a client whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key: api_key.into(),
        })
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = api_key_from_env()?;
        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        parse_body(&text)
    }

    fn statement_endpoint(path: &str, symbol: &str, period: Period, limit: Option<u32>) -> String {
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        format!(
            "{path}?symbol={}&period={}{}",
            symbol.to_uppercase(),
            period.as_str(),
            limit_param
        )
    }

    /// Get income statements for a symbol, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<IncomeStatement>> {
        self.get(&Self::statement_endpoint("income-statement", symbol, period, limit))
            .await
    }

    /// Get balance sheets for a symbol, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<BalanceSheet>> {
        self.get(&Self::statement_endpoint("balance-sheet-statement", symbol, period, limit))
            .await
    }

    /// Get analyst EPS estimates for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn analyst_estimates(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<AnalystEstimate>> {
        self.get(&Self::statement_endpoint("analyst-estimates", symbol, period, limit))
            .await
    }

    /// Fetch the latest annual statements in parallel and derive fundamentals.
    ///
    /// A failing endpoint is logged and leaves its fields unset; this never
    /// fails as a whole.
    pub async fn fundamentals(&self, symbol: &str) -> Fundamentals {
        let (income, balance, estimates) = tokio::join!(
            self.income_statement(symbol, Period::Annual, Some(1)),
            self.balance_sheet(symbol, Period::Annual, Some(1)),
            self.analyst_estimates(symbol, Period::Annual, Some(1)),
        );

        let income = first_row(symbol, "income-statement", income);
        let balance = first_row(symbol, "balance-sheet-statement", balance);
        let estimate = first_row(symbol, "analyst-estimates", estimates);

        let fundamentals =
            Fundamentals::from_statements(income.as_ref(), balance.as_ref(), estimate.as_ref());
        debug!(%symbol, ?fundamentals, "derived fundamentals");
        fundamentals
    }
}

/// Read the API key from the environment, loading `.env` first.
pub(crate) fn api_key_from_env() -> Result<String> {
    // Try to load .env file (ignore errors if not found)
    let _ = dotenvy::dotenv();
    env::var(FMP_API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(FetchError::MissingApiKey)
}

/// Parse a response body, surfacing error payloads as [`FetchError::Api`].
fn parse_body<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    // Check for error responses
    if text.contains("\"Error Message\"") || text.contains("\"error\"") {
        return Err(FetchError::Api(text.to_string()));
    }

    serde_json::from_str(text).map_err(|e| {
        FetchError::Json(serde_json::Error::io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to parse: {e}. Response: {text}"),
        )))
    })
}

fn first_row<T>(symbol: &str, endpoint: &str, rows: Result<Vec<T>>) -> Option<T> {
    match rows {
        Ok(rows) => {
            let row = rows.into_iter().next();
            if row.is_none() {
                warn!(%symbol, endpoint, "FMP returned no rows");
            }
            row
        }
        Err(e) => {
            warn!(%symbol, endpoint, error = %e, "FMP request failed, leaving fields unset");
            None
        }
    }
}
