//! High-price-zone and low-price-zone checklists.

use super::TimingInputs;
use crate::nonzero;
use kaidoki_indicators::MaSet;

/// Checklist score for staying clear of a price top (0–70).
///
/// Higher means further away from the danger zone:
/// - +20 within 10% of both the short and mid MA
/// - +20 at or below +1σ
/// - +15 RSI below 70
/// - +15 more than 5% under the 52-week high
///
/// PER and PBR are carried by the inputs but do not score yet.
#[must_use]
pub fn high_price_zone_score(inputs: &TimingInputs) -> u32 {
    let TimingInputs {
        price, ma, bands, ..
    } = *inputs;
    let mut score = 0;

    if price <= ma.short * 1.10 && price <= ma.mid * 1.10 {
        score += 20;
    }
    if price <= bands.plus1 {
        score += 20;
    }
    if inputs.rsi.is_some_and(|rsi| rsi < 70.0) {
        score += 15;
    }
    if nonzero(inputs.high_52w).is_some_and(|high| price < high * 0.95) {
        score += 15;
    }
    score
}

/// Checklist score for a contrarian entry (0–85).
///
/// - +20 more than 10% under both the short and mid MA
/// - +15 below −1σ
/// - +20 below −2σ
/// - +15 RSI below 30
/// - +15 within 5% of the 52-week low
#[must_use]
pub fn low_price_zone_score(inputs: &TimingInputs) -> u32 {
    let TimingInputs {
        price, ma, bands, ..
    } = *inputs;
    let mut score = 0;

    if price < ma.short * 0.90 && price < ma.mid * 0.90 {
        score += 20;
    }
    if price < bands.minus1 {
        score += 15;
    }
    if price < bands.minus2 {
        score += 20;
    }
    if inputs.rsi.is_some_and(|rsi| rsi < 30.0) {
        score += 15;
    }
    if nonzero(inputs.low_52w).is_some_and(|low| price <= low * 1.05) {
        score += 15;
    }
    score
}

/// Whether the three moving averages sit within `tolerance` of each other.
///
/// Measured as (max − min) / max. Always false when the smallest MA is 0.
#[must_use]
pub fn is_flat_ma(ma: &MaSet<f64>, tolerance: f64) -> bool {
    let values = [ma.short, ma.mid, ma.long];
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == 0.0 {
        return false;
    }
    (max - min) / max <= tolerance
}

/// Warning that buying now risks buying the top.
///
/// Raised at or above +1σ, within 2% of a known non-zero 52-week high, or
/// with RSI at 70 or more.
#[must_use]
pub fn high_price_alert(inputs: &TimingInputs) -> bool {
    inputs.price >= inputs.bands.plus1
        || nonzero(inputs.high_52w).is_some_and(|high| inputs.price >= high * 0.98)
        || inputs.rsi.is_some_and(|rsi| rsi >= 70.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::fixtures::neutral;
    use kaidoki_indicators::Bands;

    #[test]
    fn test_high_zone_full_marks() {
        assert_eq!(high_price_zone_score(&neutral()), 70);
    }

    #[test]
    fn test_high_zone_near_top() {
        let inputs = TimingInputs {
            price: 119.0,
            rsi: Some(75.0),
            ..neutral()
        };
        // Over 10% above the MAs, above +1σ, RSI hot, within 5% of the high.
        assert_eq!(high_price_zone_score(&inputs), 0);
    }

    #[test]
    fn test_high_zone_ignores_zero_high() {
        let inputs = TimingInputs {
            high_52w: Some(0.0),
            ..neutral()
        };
        assert_eq!(high_price_zone_score(&inputs), 55);
    }

    #[test]
    fn test_low_zone_capitulation() {
        let inputs = TimingInputs {
            price: 82.0,
            rsi: Some(22.0),
            ..neutral()
        };
        assert_eq!(low_price_zone_score(&inputs), 85);
    }

    #[test]
    fn test_low_zone_neutral() {
        assert_eq!(low_price_zone_score(&neutral()), 0);
    }

    #[test]
    fn test_low_zone_unknown_rsi() {
        let inputs = TimingInputs {
            price: 82.0,
            rsi: None,
            ..neutral()
        };
        assert_eq!(low_price_zone_score(&inputs), 70);
    }

    #[test]
    fn test_is_flat_ma() {
        let flat = MaSet {
            short: 100.0,
            mid: 98.0,
            long: 99.0,
        };
        assert!(is_flat_ma(&flat, 0.03));

        let spread = MaSet {
            short: 110.0,
            mid: 100.0,
            long: 95.0,
        };
        assert!(!is_flat_ma(&spread, 0.03));

        let zero = MaSet {
            short: 0.0,
            mid: 0.0,
            long: 0.0,
        };
        assert!(!is_flat_ma(&zero, 0.03));
    }

    #[test]
    fn test_high_price_alert() {
        assert!(!high_price_alert(&neutral()));

        let at_band = TimingInputs {
            price: 105.0,
            ..neutral()
        };
        assert!(high_price_alert(&at_band));

        let near_high = TimingInputs {
            price: 104.0,
            high_52w: Some(105.0),
            bands: Bands::new(100.0, 10.0),
            ..neutral()
        };
        assert!(high_price_alert(&near_high));

        let hot = TimingInputs {
            rsi: Some(70.0),
            ..neutral()
        };
        assert!(high_price_alert(&hot));
    }
}
