//! Where the price sits against the Bollinger Bands.

use derive_more::Display;
use kaidoki_indicators::Bands;
use serde::{Deserialize, Serialize};

/// Bollinger Band judgement for the latest close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandPosition {
    /// At or above +2σ.
    #[display("very expensive (at or above +2σ)")]
    VeryExpensive,
    /// At or above +1σ.
    #[display("somewhat expensive (at or above +1σ)")]
    SomewhatExpensive,
    /// At or below −2σ.
    #[display("heavily oversold (at or below -2σ)")]
    DeeplyOversold,
    /// At or below −1σ.
    #[display("oversold (at or below -1σ)")]
    Oversold,
    /// Inside ±1σ.
    #[display("average (within ±1σ)")]
    Average,
}

impl BandPosition {
    /// Judge `price` against `bands`. The upper side is checked first.
    #[must_use]
    pub fn judge(price: f64, bands: &Bands) -> Self {
        if price >= bands.plus2 {
            Self::VeryExpensive
        } else if price >= bands.plus1 {
            Self::SomewhatExpensive
        } else if price <= bands.minus2 {
            Self::DeeplyOversold
        } else if price <= bands.minus1 {
            Self::Oversold
        } else {
            Self::Average
        }
    }

    /// Icon shown next to the judgement.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::VeryExpensive => "🔥",
            Self::SomewhatExpensive => "📈",
            Self::DeeplyOversold => "🧊",
            Self::Oversold => "📉",
            Self::Average => "⚪️",
        }
    }

    /// Strength of the deviation: 3 beyond 2σ, 2 beyond 1σ, 1 inside.
    #[must_use]
    pub const fn strength(&self) -> u8 {
        match self {
            Self::VeryExpensive | Self::DeeplyOversold => 3,
            Self::SomewhatExpensive | Self::Oversold => 2,
            Self::Average => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_each_zone() {
        let bands = Bands::new(100.0, 5.0);
        assert_eq!(BandPosition::judge(111.0, &bands), BandPosition::VeryExpensive);
        assert_eq!(BandPosition::judge(110.0, &bands), BandPosition::VeryExpensive);
        assert_eq!(BandPosition::judge(105.0, &bands), BandPosition::SomewhatExpensive);
        assert_eq!(BandPosition::judge(100.0, &bands), BandPosition::Average);
        assert_eq!(BandPosition::judge(95.0, &bands), BandPosition::Oversold);
        assert_eq!(BandPosition::judge(90.0, &bands), BandPosition::DeeplyOversold);
    }

    #[test]
    fn test_zero_width_bands_read_expensive() {
        // With σ = 0 every band equals the centre and the upper check wins.
        let bands = Bands::new(100.0, 0.0);
        assert_eq!(BandPosition::judge(100.0, &bands), BandPosition::VeryExpensive);
    }

    #[test]
    fn test_strength_and_icon() {
        assert_eq!(BandPosition::VeryExpensive.strength(), 3);
        assert_eq!(BandPosition::Oversold.strength(), 2);
        assert_eq!(BandPosition::Average.strength(), 1);
        assert_eq!(BandPosition::DeeplyOversold.icon(), "🧊");
    }
}
