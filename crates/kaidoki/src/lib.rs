#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kaidoki-rs/kaidoki/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ## Quick Start
//!
//! ```ignore
//! use kaidoki::{KaidokiConfig, analyze};
//! use kaidoki::fetch::{DataFetcher, normalize_ticker};
//!
//! # async fn example() -> kaidoki::Result<()> {
//! let config = KaidokiConfig::load(None)?;
//! let fetcher = DataFetcher::new(config.fetch.clone())?;
//!
//! let symbol = normalize_ticker("7203").unwrap();
//! let snapshot = fetcher.snapshot(&symbol).await?;
//! let analysis = analyze(&snapshot, &config, None)?;
//!
//! println!("QVT {:.1}: {}", analysis.final_qvt(), analysis.verdict);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Error type, price history and the [`Scorer`] trait
//! - [`indicators`] - Moving averages, Bollinger Bands, RSI and slope
//! - [`signals`] - T logic, Q and V scorers, sector correction and QVT
//! - [`fetch`] - Yahoo and FMP clients producing a [`MarketSnapshot`]
//!
//! ## Pipeline
//!
//! 1. **Fetch** prices, dividends and fundamentals for a ticker
//! 2. **Compute** indicators, then T, Q, V and QVT
//! 3. **Correct** Q against sector values when given
//! 4. **Render** the result (see the `kaidoki` binary)

/// Version information for the kaidoki crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod analysis;
mod config;

pub use analysis::{Analysis, PriceBlock, Scores, analyze};
pub use config::{CONFIG_ENV_VAR, KaidokiConfig, ScoringConfig};

/// Core types and traits.
pub mod traits {
    pub use kaidoki_traits::*;
}

/// Technical indicators.
pub mod indicators {
    pub use kaidoki_indicators::*;
}

/// Scoring components.
///
/// ## T (timing)
///
/// Bollinger position, RSI, 52-week position, MA structure and 25MA slope
/// combine into a 0–100 score with a label, a trend / contrarian mode and a
/// buy range.
///
/// ## Q (quality)
///
/// ROE, ROA and equity ratio through a tiered (default) or linear scorer,
/// optionally shifted by a sector correction.
///
/// ## V (valuation)
///
/// PER, PBR and dividend yield through a tiered (default) or linear scorer.
pub mod signals {
    pub use kaidoki_signals::*;
}

/// Market data clients.
pub mod fetch {
    pub use kaidoki_fetch::*;
}

// Re-export error types
pub use kaidoki_traits::{KaidokiError, Result};

// Re-export common types
pub use kaidoki_fetch::MarketSnapshot;
pub use kaidoki_signals::{QvtVerdict, quality::SectorInputs};
pub use kaidoki_traits::{Date, PriceHistory, Scorer, Symbol};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{Analysis, KaidokiConfig, analyze};
    pub use crate::{KaidokiError, Result};
    pub use crate::{MarketSnapshot, QvtVerdict, Scorer, SectorInputs};
}
