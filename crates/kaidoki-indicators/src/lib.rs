//! Technical indicators for the kaidoki buy-signal checker.
//!
//! This crate computes the raw numbers the timing logic interprets:
//! - Simple moving averages (25 / 50 / 75 sessions by default)
//! - Bollinger Bands at ±1σ and ±2σ around a 20-session mean
//! - RSI over 14 sessions using simple rolling means
//! - Percentage slope and direction arrow of a series
//!
//! Series are `Vec<Option<f64>>` aligned with the input closes; `None` marks
//! sessions inside an indicator's warmup.
//!
//! # Example
//!
//! ```ignore
//! use kaidoki_indicators::{IndicatorConfig, IndicatorSnapshot};
//!
//! let snapshot = IndicatorSnapshot::compute(&history, &IndicatorConfig::default())?;
//! println!("RSI {:.1}, 25MA {:.2}", snapshot.rsi, snapshot.ma.short);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bollinger;
pub mod config;
pub mod moving_average;
pub mod rsi;
pub mod slope;
pub mod snapshot;

pub use bollinger::{BandSeries, Bands, bollinger_bands};
pub use config::IndicatorConfig;
pub use moving_average::{rolling_mean, rolling_std};
pub use rsi::rsi;
pub use slope::{SlopeArrow, slope_arrow, slope_percent};
pub use snapshot::{IndicatorSeries, IndicatorSnapshot, MaSet};
