//! Market data clients for kaidoki.
//!
//! Prices, dividends and company names come from the Yahoo Finance chart API;
//! EPS, BPS, forward EPS and the profitability ratios come from
//! [Financial Modeling Prep](https://financialmodelingprep.com/).
//!
//! # Usage
//!
//! ```rust,ignore
//! use kaidoki_fetch::{DataFetcher, FetchConfig, normalize_ticker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = DataFetcher::new(FetchConfig::default())?;
//!     let symbol = normalize_ticker("7203").unwrap();
//!
//!     let snapshot = fetcher.snapshot(&symbol).await?;
//!     println!("{} closed at {}", snapshot.company_name, snapshot.close);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file. Without it the
//! snapshot still carries prices, but every fundamental is unset:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod error;
mod fmp;
mod snapshot;
mod ticker;
mod types;
mod yahoo;

pub use error::FetchError;
pub use fmp::{FMP_API_KEY_VAR, FmpClient};
pub use snapshot::{DataFetcher, FetchConfig, MarketSnapshot, dividend_yield};
pub use ticker::{TOKYO_SUFFIX, normalize_ticker, parse_ticker_list};
pub use types::*;
pub use yahoo::{Chart, Dividend, YahooClient, parse_chart};

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
