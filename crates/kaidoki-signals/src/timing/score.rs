//! The T score and its label.

use super::TimingInputs;
use crate::nonzero;
use derive_more::Display;
use kaidoki_traits::{clamp_score, round_to};
use serde::{Deserialize, Serialize};

/// Weight applied to the RSI distance from 50.
const RSI_WEIGHT: f64 = 0.6;

/// Weight applied to the distance from the middle of the 52-week range.
const RANGE_WEIGHT: f64 = 40.0;

/// Timing score in `[0, 100]`, one decimal. Higher means a better entry.
///
/// Built up from 50:
/// - RSI: (50 − RSI) × 0.6
/// - Bollinger: +20 at or below −2σ, +10 at or below −1σ, −20 at or above
///   +2σ, −10 at or above +1σ
/// - 52-week position: (0.5 − pos) × 40 when both extremes are usable
/// - +5 for every moving average the price is below
/// - short-MA slope: −15 at −1% or steeper, −5 when negative, +5 at +1% or more
///
/// An unknown RSI contributes nothing.
#[must_use]
pub fn timing_score(inputs: &TimingInputs) -> f64 {
    let TimingInputs {
        price, ma, bands, ..
    } = *inputs;
    let mut score = 50.0;

    if let Some(rsi) = inputs.rsi {
        score += (50.0 - rsi) * RSI_WEIGHT;
    }

    if price <= bands.minus2 {
        score += 20.0;
    } else if price <= bands.minus1 {
        score += 10.0;
    } else if price >= bands.plus2 {
        score -= 20.0;
    } else if price >= bands.plus1 {
        score -= 10.0;
    }

    if let (Some(high), Some(low)) = (nonzero(inputs.high_52w), nonzero(inputs.low_52w))
        && high > low
    {
        let position = (price - low) / (high - low);
        score += (0.5 - position) * RANGE_WEIGHT;
    }

    for level in [ma.short, ma.mid, ma.long] {
        if price < level {
            score += 5.0;
        }
    }

    let slope = inputs.slope_short;
    if slope <= -1.0 {
        score -= 15.0;
    } else if slope < 0.0 {
        score -= 5.0;
    } else if slope >= 1.0 {
        score += 5.0;
    }

    clamp_score(round_to(score, 1))
}

/// Plain-language reading of the T score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingLabel {
    /// Low score in a falling market.
    #[display("falling knife: wait for the bottom")]
    FallingKnife,
    /// Low score because the price is near a top.
    #[display("high-price zone: caution")]
    HighZoneCaution,
    /// Low score without a clear cause.
    #[display("conditions deteriorating")]
    Deteriorating,
    /// 30 < T ≤ 50.
    #[display("wait and see")]
    Wait,
    /// 50 < T ≤ 80.
    #[display("moderate dip")]
    ModerateDip,
    /// T > 80.
    #[display("bargain level")]
    Bargain,
}

impl TimingLabel {
    /// Label for score `t`.
    ///
    /// Scores of 30 or less are split by cause: a downtrend comes first, then a
    /// high-price alert.
    #[must_use]
    pub fn from_score(t: f64, is_downtrend: bool, high_price_alert: bool) -> Self {
        if t <= 30.0 {
            if is_downtrend {
                Self::FallingKnife
            } else if high_price_alert {
                Self::HighZoneCaution
            } else {
                Self::Deteriorating
            }
        } else if t <= 50.0 {
            Self::Wait
        } else if t <= 80.0 {
            Self::ModerateDip
        } else {
            Self::Bargain
        }
    }

    /// Icon shown next to the label.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::FallingKnife => "🔪",
            Self::HighZoneCaution => "🔥",
            Self::Deteriorating => "⚠️",
            Self::Wait => "⏳",
            Self::ModerateDip => "🟠",
            Self::Bargain => "🔴",
        }
    }
}
