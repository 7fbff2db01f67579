//! Threshold-table V score.

use super::ValuationInputs;
use kaidoki_traits::{Scorer, clamp_score};

/// Maximum raw points: PER 30 + PBR 25 + yield 20.
const MAX_RAW: f64 = 75.0;

/// V score from threshold tables.
///
/// PER and PBR only score when positive, the yield only when non-zero. Cheaper
/// multiples and higher yields earn more points; the total is scaled by 100 / 75.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredValuation;

impl TieredValuation {
    fn per_points(per: f64) -> f64 {
        match per {
            p if p <= 0.0 => 0.0,
            p if p < 8.0 => 30.0,
            p if p < 12.0 => 26.0,
            p if p < 20.0 => 20.0,
            p if p < 30.0 => 10.0,
            p if p < 40.0 => 5.0,
            _ => 0.0,
        }
    }

    fn pbr_points(pbr: f64) -> f64 {
        match pbr {
            p if p <= 0.0 => 0.0,
            p if p < 0.8 => 25.0,
            p if p < 1.2 => 20.0,
            p if p < 2.0 => 10.0,
            p if p < 3.0 => 5.0,
            _ => 0.0,
        }
    }

    fn yield_points(dividend_yield: f64) -> f64 {
        match dividend_yield {
            y if y >= 5.0 => 20.0,
            y if y >= 3.0 => 16.0,
            y if y >= 2.0 => 10.0,
            y if y >= 1.0 => 5.0,
            _ => 0.0,
        }
    }
}

impl Scorer for TieredValuation {
    type Input = ValuationInputs;

    fn name(&self) -> &str {
        "TieredValuation"
    }

    fn score(&self, input: &ValuationInputs) -> f64 {
        let raw = input.per.map_or(0.0, Self::per_points)
            + input.pbr.map_or(0.0, Self::pbr_points)
            + input.dividend_yield.map_or(0.0, Self::yield_points);
        clamp_score(raw / MAX_RAW * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deep_value() {
        let v = TieredValuation.score(&ValuationInputs::new(Some(6.0), Some(0.6), Some(5.5)));
        assert_relative_eq!(v, 100.0);
    }

    #[test]
    fn test_typical_value() {
        // 20 + 10 + 10 = 40
        let v = TieredValuation.score(&ValuationInputs::new(Some(15.0), Some(1.5), Some(2.5)));
        assert_relative_eq!(v, 40.0 / 75.0 * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_expensive_and_unknown() {
        let v = TieredValuation.score(&ValuationInputs::new(Some(45.0), Some(4.0), None));
        assert_relative_eq!(v, 0.0);
        assert_relative_eq!(TieredValuation.score(&ValuationInputs::default()), 0.0);
    }

    #[test]
    fn test_negative_per_scores_nothing() {
        let v = TieredValuation.score(&ValuationInputs::new(Some(-10.0), None, Some(1.0)));
        assert_relative_eq!(v, 5.0 / 75.0 * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_boundaries() {
        assert_relative_eq!(TieredValuation::per_points(8.0), 26.0);
        assert_relative_eq!(TieredValuation::per_points(40.0), 0.0);
        assert_relative_eq!(TieredValuation::pbr_points(1.2), 10.0);
        assert_relative_eq!(TieredValuation::yield_points(3.0), 16.0);
        assert_relative_eq!(TieredValuation::yield_points(0.9), 0.0);
    }
}
