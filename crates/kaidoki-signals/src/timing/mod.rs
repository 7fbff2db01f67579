//! Timing (T) logic: how the technical picture is read.
//!
//! The indicator crate supplies the numbers; this module interprets them:
//! - Bollinger position judgement
//! - High-price-zone and low-price-zone checklists
//! - Pullback ("dip") signal
//! - The T score and its label
//! - Trend / contrarian mode, condition checklists and buy range

mod band;
mod dip;
mod metrics;
mod range;
mod score;
mod zones;

pub use band::BandPosition;
pub use dip::DipSignal;
pub use metrics::{ConditionCheck, Stance, TimingMetrics, TimingMode};
pub use range::BuyRange;
pub use score::{TimingLabel, timing_score};
pub use zones::{high_price_alert, high_price_zone_score, is_flat_ma, low_price_zone_score};

use kaidoki_indicators::{Bands, IndicatorSnapshot, MaSet};
use serde::{Deserialize, Serialize};

/// Everything the timing logic reads for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingInputs {
    /// Latest close.
    pub price: f64,
    /// Moving averages (short / mid / long).
    pub ma: MaSet<f64>,
    /// Bollinger Bands.
    pub bands: Bands,
    /// RSI, if known.
    pub rsi: Option<f64>,
    /// Percentage slope of the short moving average.
    pub slope_short: f64,
    /// 52-week high.
    pub high_52w: Option<f64>,
    /// 52-week low.
    pub low_52w: Option<f64>,
    /// Trailing PER.
    pub per: Option<f64>,
    /// Trailing PBR.
    pub pbr: Option<f64>,
}

impl TimingInputs {
    /// Build inputs from an indicator snapshot and 52-week extremes.
    #[must_use]
    pub fn from_snapshot(
        snapshot: &IndicatorSnapshot,
        high_52w: Option<f64>,
        low_52w: Option<f64>,
    ) -> Self {
        Self {
            price: snapshot.price,
            ma: snapshot.ma,
            bands: snapshot.bands,
            rsi: Some(snapshot.rsi),
            slope_short: snapshot.slopes.short,
            high_52w,
            low_52w,
            per: None,
            pbr: None,
        }
    }

    /// Attach valuation ratios.
    #[must_use]
    pub const fn with_ratios(mut self, per: Option<f64>, pbr: Option<f64>) -> Self {
        self.per = per;
        self.pbr = pbr;
        self
    }
}
