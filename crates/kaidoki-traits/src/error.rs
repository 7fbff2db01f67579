//! Error types for the kaidoki workspace.
//!
//! Every library crate funnels its failures into [`KaidokiError`] so the
//! pipeline and the CLI deal with a single error type.

use thiserror::Error;

/// The main error type for kaidoki operations.
#[derive(Debug, Error)]
pub enum KaidokiError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when data is insufficient for the requested computation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error when a required column is missing from a price frame.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error when a date is out of range or invalid.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error loading or validating configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a scoring component is not known.
    #[error("Score not found: {0}")]
    ScoreNotFound(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for KaidokiError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for KaidokiError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for kaidoki operations.
pub type Result<T> = std::result::Result<T, KaidokiError>;
