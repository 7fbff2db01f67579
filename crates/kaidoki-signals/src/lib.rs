//! Scoring components for the kaidoki buy-signal checker.
//!
//! This crate turns indicator values and fundamentals into the four numbers
//! kaidoki reports for a symbol:
//! - T (timing): Bollinger position, RSI, 52-week position, MA structure and slope
//! - Q (quality): ROE, ROA and equity ratio, with an optional sector correction
//! - V (valuation): PER, PBR and dividend yield
//! - QVT: the mean of the three, with a verdict
//!
//! Every score lives in `[0, 100]`; higher is more attractive.
//!
//! # Example
//!
//! ```ignore
//! use kaidoki_signals::quality::{QualityInputs, TieredQuality};
//! use kaidoki_traits::Scorer;
//!
//! let q = TieredQuality.score(&QualityInputs::new(Some(12.0), Some(5.0), Some(45.0)));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod composite;
pub mod quality;
pub mod registry;
pub mod timing;
pub mod value;

/// `Some(x)` when `x` is known and non-zero.
///
/// Several thresholds only apply when a reference value such as the 52-week
/// high is both present and non-zero.
pub(crate) fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

// Re-export key types
pub use composite::{QvtVerdict, qvt_score};
pub use registry::{ScoreCategory, ScoreInfo};
