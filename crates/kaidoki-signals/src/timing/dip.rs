//! Pullback ("dip") signal.

use super::{TimingInputs, high_price_zone_score};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How attractive the current pullback is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DipSignal {
    /// RSI is not available.
    #[display("unknown")]
    Unknown,
    /// Under the long MA, RSI below 40 and at or below −1σ.
    #[display("bargain dip")]
    Bargain,
    /// Under the long MA or oversold RSI, and below −1σ.
    #[display("moderate dip")]
    Moderate,
    /// A shallow pullback from the short MA.
    #[display("light dip")]
    Light,
    /// The price is close to a top.
    #[display("high zone")]
    HighZone,
    /// Nothing to act on.
    #[display("no signal")]
    NoSignal,
}

impl DipSignal {
    /// Evaluate the dip rules in order; the first match wins.
    #[must_use]
    pub fn judge(inputs: &TimingInputs) -> Self {
        let Some(rsi) = inputs.rsi else {
            return Self::Unknown;
        };
        let price = inputs.price;
        let ma = inputs.ma;
        let minus1 = inputs.bands.minus1;

        if price <= ma.long && rsi < 40.0 && price <= minus1 {
            Self::Bargain
        } else if (price <= ma.long && price < minus1) || (rsi < 30.0 && price < minus1) {
            Self::Moderate
        } else if price < ma.short * 0.97 && rsi < 37.5 && price <= minus1 {
            Self::Light
        } else if high_price_zone_score(&inputs.with_ratios(None, None)) <= 40 {
            Self::HighZone
        } else {
            Self::NoSignal
        }
    }

    /// Icon shown next to the signal.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Unknown => "⚪️",
            Self::Bargain => "🔴",
            Self::Moderate => "🟠",
            Self::Light => "🟡",
            Self::HighZone => "🔥",
            Self::NoSignal => "🟢",
        }
    }

    /// Dip depth: 3 bargain, 2 moderate, 1 light, 0 otherwise.
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Bargain => 3,
            Self::Moderate => 2,
            Self::Light => 1,
            Self::Unknown | Self::HighZone | Self::NoSignal => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::fixtures::neutral;

    #[test]
    fn test_unknown_without_rsi() {
        let inputs = TimingInputs {
            rsi: None,
            ..neutral()
        };
        assert_eq!(DipSignal::judge(&inputs), DipSignal::Unknown);
        assert_eq!(DipSignal::Unknown.level(), 0);
    }

    #[test]
    fn test_bargain() {
        let inputs = TimingInputs {
            price: 94.0,
            rsi: Some(35.0),
            ..neutral()
        };
        let signal = DipSignal::judge(&inputs);
        assert_eq!(signal, DipSignal::Bargain);
        assert_eq!(signal.level(), 3);
        assert_eq!(signal.icon(), "🔴");
    }

    #[test]
    fn test_moderate_on_oversold_rsi() {
        // Above the long MA, so only the RSI branch applies.
        let mut inputs = TimingInputs {
            price: 94.0,
            rsi: Some(28.0),
            ..neutral()
        };
        inputs.ma.long = 90.0;
        assert_eq!(DipSignal::judge(&inputs), DipSignal::Moderate);
    }

    #[test]
    fn test_moderate_under_long_ma() {
        let inputs = TimingInputs {
            price: 94.0,
            rsi: Some(45.0),
            ..neutral()
        };
        assert_eq!(DipSignal::judge(&inputs), DipSignal::Moderate);
    }

    #[test]
    fn test_light() {
        let mut inputs = TimingInputs {
            price: 95.0,
            rsi: Some(36.0),
            ..neutral()
        };
        inputs.ma.long = 90.0;
        assert_eq!(DipSignal::judge(&inputs), DipSignal::Light);
    }

    #[test]
    fn test_high_zone() {
        let inputs = TimingInputs {
            price: 119.0,
            rsi: Some(72.0),
            ..neutral()
        };
        assert_eq!(DipSignal::judge(&inputs), DipSignal::HighZone);
    }

    #[test]
    fn test_no_signal() {
        let signal = DipSignal::judge(&neutral());
        assert_eq!(signal, DipSignal::NoSignal);
        assert_eq!(signal.to_string(), "no signal");
    }
}
