//! Discretionary buy range shown on the T tab.

use super::{TimingInputs, TimingMode};
use serde::{Deserialize, Serialize};

/// Centre price and the band around it worth buying into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuyRange {
    /// Reference price.
    pub center: f64,
    /// Bottom of the range.
    pub lower: f64,
    /// Top of the range.
    pub upper: f64,
}

impl BuyRange {
    /// Range for `mode`.
    ///
    /// Trend mode centres on the mean of the short and mid MA and never goes
    /// below −1σ. Contrarian mode centres between the short MA and −1σ.
    ///
    /// In a steep trend −1σ can sit above the centre, so `lower` may exceed
    /// `center` and even `upper`; see [`BuyRange::is_inverted`].
    #[must_use]
    pub fn for_mode(mode: TimingMode, inputs: &TimingInputs) -> Self {
        let minus1 = inputs.bands.minus1;
        match mode {
            TimingMode::Trend => {
                let center = (inputs.ma.short + inputs.ma.mid) / 2.0;
                Self {
                    center,
                    lower: (center * 0.95).max(minus1),
                    upper: center * 1.03,
                }
            }
            TimingMode::Contrarian => {
                let center = (inputs.ma.short + minus1) / 2.0;
                Self {
                    center,
                    lower: center * 0.97,
                    upper: center * 1.08,
                }
            }
        }
    }

    /// Whether the −1σ floor lies above the top of the range, leaving no price
    /// to buy at.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    /// Whether `price` falls inside the range.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        (self.lower..=self.upper).contains(&price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::fixtures::neutral;
    use approx::assert_relative_eq;

    #[test]
    fn test_trend_range() {
        let mut inputs = neutral();
        inputs.ma.short = 110.0;
        inputs.ma.mid = 100.0;
        let range = BuyRange::for_mode(TimingMode::Trend, &inputs);
        assert_relative_eq!(range.center, 105.0);
        assert_relative_eq!(range.upper, 108.15, epsilon = 1e-9);
        // 0.95 × 105 = 99.75 beats −1σ at 95.
        assert_relative_eq!(range.lower, 99.75, epsilon = 1e-9);
        assert!(range.contains(100.0));
        assert!(!range.contains(95.0));
    }

    #[test]
    fn test_trend_range_floor_at_minus_one_sigma() {
        let mut inputs = neutral();
        inputs.bands = kaidoki_indicators::Bands::new(110.0, 5.0);
        let range = BuyRange::for_mode(TimingMode::Trend, &inputs);
        assert_relative_eq!(range.center, 100.0);
        assert_relative_eq!(range.lower, 105.0);
        assert_relative_eq!(range.upper, 103.0, epsilon = 1e-9);
        assert!(range.is_inverted());
        assert!(!range.contains(104.0));
    }

    #[test]
    fn test_trend_range_floor_between_center_and_upper() {
        let mut inputs = neutral();
        inputs.ma.short = 153.5;
        inputs.ma.mid = 147.25;
        inputs.bands = kaidoki_indicators::Bands::new(155.0, 3.21);
        let range = BuyRange::for_mode(TimingMode::Trend, &inputs);
        assert_relative_eq!(range.center, 150.375);
        assert_relative_eq!(range.lower, 151.79, epsilon = 1e-9);
        assert_relative_eq!(range.upper, 154.886_25, epsilon = 1e-9);
        assert!(range.lower > range.center);
        assert!(!range.is_inverted());
        assert!(!range.contains(range.center));
        assert!(range.contains(153.0));
    }

    #[test]
    fn test_contrarian_range() {
        let range = BuyRange::for_mode(TimingMode::Contrarian, &neutral());
        assert_relative_eq!(range.center, 97.5);
        assert_relative_eq!(range.lower, 94.575, epsilon = 1e-9);
        assert_relative_eq!(range.upper, 105.3, epsilon = 1e-9);
        assert!(!range.is_inverted());
    }
}
