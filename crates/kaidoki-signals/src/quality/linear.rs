//! Linear Q score.

use super::QualityInputs;
use kaidoki_traits::{Scorer, clamp_score, round_to};

/// ROE (%) that earns full marks.
const ROE_FULL: f64 = 25.0;
/// ROA (%) that earns full marks.
const ROA_FULL: f64 = 15.0;
/// Equity ratio (%) that earns full marks.
const EQUITY_FULL: f64 = 60.0;
/// Score when nothing is known.
const NEUTRAL: f64 = 50.0;

/// Q score as the mean of linearly mapped ratios.
///
/// ROE 0–25 %, ROA 0–15 % and equity ratio 0–60 % each map onto 0–100.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearQuality;

impl Scorer for LinearQuality {
    type Input = QualityInputs;

    fn name(&self) -> &str {
        "LinearQuality"
    }

    fn score(&self, input: &QualityInputs) -> f64 {
        let parts: Vec<f64> = [
            input.roe.map(|v| v / ROE_FULL),
            input.roa.map(|v| v / ROA_FULL),
            input.equity_ratio.map(|v| v / EQUITY_FULL),
        ]
        .into_iter()
        .flatten()
        .map(|fraction| clamp_score(fraction * 100.0))
        .collect();

        if parts.is_empty() {
            return NEUTRAL;
        }
        round_to(parts.iter().sum::<f64>() / parts.len() as f64, 1)
    }
}
