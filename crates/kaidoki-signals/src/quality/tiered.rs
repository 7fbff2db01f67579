//! Threshold-table Q score.

use super::QualityInputs;
use kaidoki_traits::{Scorer, clamp_score};

/// Maximum raw points: ROE 50 + ROA 25 + equity ratio 20.
const MAX_RAW: f64 = 95.0;

/// Q score from threshold tables.
///
/// | ROE %   | pts | ROA %  | pts | Equity % | pts |
/// |---------|-----|--------|-----|----------|-----|
/// | ≤ 0     | 0   | ≤ 0    | 0   | < 20     | 0   |
/// | < 5     | 10  | < 2    | 5   | < 30     | 3   |
/// | < 10    | 20  | < 4    | 10  | < 40     | 6   |
/// | < 15    | 30  | < 6    | 15  | < 50     | 10  |
/// | < 20    | 40  | < 8    | 20  | < 60     | 15  |
/// | < 25    | 45  | ≥ 8    | 25  | ≥ 60     | 20  |
/// | ≥ 25    | 50  |        |     |          |     |
///
/// The raw total is scaled by 100 / 95. Unknown ratios give no points.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredQuality;

impl TieredQuality {
    fn roe_points(roe: f64) -> f64 {
        match roe {
            r if r <= 0.0 => 0.0,
            r if r < 5.0 => 10.0,
            r if r < 10.0 => 20.0,
            r if r < 15.0 => 30.0,
            r if r < 20.0 => 40.0,
            r if r < 25.0 => 45.0,
            _ => 50.0,
        }
    }

    fn roa_points(roa: f64) -> f64 {
        match roa {
            r if r <= 0.0 => 0.0,
            r if r < 2.0 => 5.0,
            r if r < 4.0 => 10.0,
            r if r < 6.0 => 15.0,
            r if r < 8.0 => 20.0,
            _ => 25.0,
        }
    }

    fn equity_points(equity_ratio: f64) -> f64 {
        match equity_ratio {
            e if e < 20.0 => 0.0,
            e if e < 30.0 => 3.0,
            e if e < 40.0 => 6.0,
            e if e < 50.0 => 10.0,
            e if e < 60.0 => 15.0,
            _ => 20.0,
        }
    }
}

impl Scorer for TieredQuality {
    type Input = QualityInputs;

    fn name(&self) -> &str {
        "TieredQuality"
    }

    fn score(&self, input: &QualityInputs) -> f64 {
        let raw = input.roe.map_or(0.0, Self::roe_points)
            + input.roa.map_or(0.0, Self::roa_points)
            + input.equity_ratio.map_or(0.0, Self::equity_points);
        clamp_score(raw / MAX_RAW * 100.0)
    }
}
