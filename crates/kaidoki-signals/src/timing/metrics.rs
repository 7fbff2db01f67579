//! Everything the T tab shows, computed in one pass.

use super::{
    BandPosition, DipSignal, TimingInputs, TimingLabel, high_price_alert, high_price_zone_score,
    is_flat_ma, low_price_zone_score, timing_score,
};
use derive_more::Display;
use kaidoki_indicators::MaSet;
use serde::{Deserialize, Serialize};

/// Tolerance used when deciding the moving averages are flat.
pub const FLAT_MA_TOLERANCE: f64 = 0.03;

/// Upper bound of a "flat to gently rising" short-MA slope, in percent.
pub const GENTLE_SLOPE_MAX: f64 = 0.3;

/// Checklist score needed for the zone row of either checklist.
pub const ZONE_SCORE_PASS: u32 = 60;

/// How the entry is approached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Buying pullbacks inside an uptrend (short > mid > long MA).
    #[display("trend following (buy the pullback in an uptrend)")]
    Trend,
    /// Buying into a correction.
    #[display("contrarian (buy the dip in a correction)")]
    Contrarian,
}

impl TimingMode {
    /// Trend when the MAs are stacked short > mid > long.
    #[must_use]
    pub fn from_ma(ma: &MaSet<f64>) -> Self {
        if ma.short > ma.mid && ma.mid > ma.long {
            Self::Trend
        } else {
            Self::Contrarian
        }
    }

    /// Icon shown next to the mode.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Trend => "📈",
            Self::Contrarian => "🧮",
        }
    }
}

/// Recommendation derived from how many checklist rows hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// No condition holds.
    #[display("Passing for now is reasonable.")]
    Pass,
    /// One condition holds.
    #[display("Consider carefully.")]
    Cautious,
    /// Two conditions hold.
    #[display("There is room to consider buying.")]
    Consider,
    /// Every condition holds.
    #[display("Very attractive as a buy candidate.")]
    Attractive,
}

impl Stance {
    /// Stance for `satisfied` conditions out of three.
    #[must_use]
    pub const fn from_count(satisfied: usize) -> Self {
        match satisfied {
            0 => Self::Pass,
            1 => Self::Cautious,
            2 => Self::Consider,
            _ => Self::Attractive,
        }
    }
}

/// The three rows of a mode checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionCheck {
    /// Medium-term MA structure.
    pub structure: bool,
    /// Short-MA slope.
    pub slope: bool,
    /// Zone checklist score of at least 60.
    pub zone: bool,
}

impl ConditionCheck {
    /// Number of rows that hold.
    #[must_use]
    pub fn satisfied(&self) -> usize {
        [self.structure, self.slope, self.zone]
            .into_iter()
            .filter(|held| *held)
            .count()
    }

    /// Stance for this checklist.
    #[must_use]
    pub fn stance(&self) -> Stance {
        Stance::from_count(self.satisfied())
    }
}

/// Full timing picture for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingMetrics {
    /// T score.
    pub score: f64,
    /// Label for the T score.
    pub label: TimingLabel,
    /// Trend or contrarian.
    pub mode: TimingMode,
    /// Falling MAs with a negative short slope.
    pub is_downtrend: bool,
    /// Risk of buying the top.
    pub high_price_alert: bool,
    /// Bollinger Band judgement.
    pub band: BandPosition,
    /// Pullback signal.
    pub dip: DipSignal,
    /// High-price-zone checklist score.
    pub high_zone_score: u32,
    /// Low-price-zone checklist score.
    pub low_zone_score: u32,
    /// Trend checklist.
    pub trend: ConditionCheck,
    /// Contrarian checklist.
    pub contrarian: ConditionCheck,
    /// Short-MA slope the metrics were computed from.
    pub slope_short: f64,
}

impl TimingMetrics {
    /// Compute every timing metric from `inputs`.
    #[must_use]
    pub fn compute(inputs: &TimingInputs) -> Self {
        let ma = inputs.ma;
        let slope = inputs.slope_short;

        let high_zone_score = high_price_zone_score(inputs);
        let low_zone_score = low_price_zone_score(inputs);
        let alert = high_price_alert(inputs);

        let rising = ma.long < ma.mid && ma.mid < ma.short;
        let falling = ma.long > ma.mid && ma.mid > ma.short;

        let trend = ConditionCheck {
            structure: rising,
            slope: (0.0..=GENTLE_SLOPE_MAX).contains(&slope),
            zone: high_zone_score >= ZONE_SCORE_PASS,
        };
        let contrarian = ConditionCheck {
            structure: falling || is_flat_ma(&ma, FLAT_MA_TOLERANCE),
            slope: slope < 0.0,
            zone: low_zone_score >= ZONE_SCORE_PASS,
        };

        let is_downtrend = falling && slope < 0.0;
        let score = timing_score(inputs);

        Self {
            score,
            label: TimingLabel::from_score(score, is_downtrend, alert),
            mode: TimingMode::from_ma(&ma),
            is_downtrend,
            high_price_alert: alert,
            band: BandPosition::judge(inputs.price, &inputs.bands),
            dip: DipSignal::judge(inputs),
            high_zone_score,
            low_zone_score,
            trend,
            contrarian,
            slope_short: slope,
        }
    }

    /// The checklist that matches the current mode.
    #[must_use]
    pub const fn active_checklist(&self) -> &ConditionCheck {
        match self.mode {
            TimingMode::Trend => &self.trend,
            TimingMode::Contrarian => &self.contrarian,
        }
    }

    /// Stance for the current mode.
    #[must_use]
    pub fn stance(&self) -> Stance {
        self.active_checklist().stance()
    }
}
