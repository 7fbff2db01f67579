//! Error types for the data clients.

use kaidoki_traits::KaidokiError;
use thiserror::Error;

/// Errors that can occur while fetching market data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Missing API key.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed. The request URL is stripped, as it carries the API key.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Free tier allows 250 requests/day.")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No data available.
    #[error("No data available for {0}")]
    NoData(String),

    /// Too few sessions to compare against the previous close.
    #[error("Insufficient history for {0}: fewer than two sessions")]
    InsufficientHistory(String),

    /// Building the price frame failed.
    #[error(transparent)]
    Frame(#[from] KaidokiError),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

impl From<FetchError> for KaidokiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Frame(inner) => inner,
            other => Self::DataFetch(other.to_string()),
        }
    }
}
