//! Linear V score.

use super::ValuationInputs;
use kaidoki_traits::{Scorer, clamp_score, round_to};

/// V score as the mean of linearly mapped multiples.
///
/// PER 10–30 maps to 100–0, PBR 1–5 to 100–0 and yield 0–5 % to 0–100.
/// Only positive inputs count; with none the score is a neutral 50.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearValuation;

impl Scorer for LinearValuation {
    type Input = ValuationInputs;

    fn name(&self) -> &str {
        "LinearValuation"
    }

    fn score(&self, input: &ValuationInputs) -> f64 {
        let positive = |v: Option<f64>| v.filter(|x| *x > 0.0);
        let parts: Vec<f64> = [
            positive(input.per).map(|per| 100.0 - clamp_score((per - 10.0) / 20.0 * 100.0)),
            positive(input.pbr).map(|pbr| 100.0 - clamp_score((pbr - 1.0) / 4.0 * 100.0)),
            positive(input.dividend_yield).map(|y| clamp_score(y / 5.0 * 100.0)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            return 50.0;
        }
        round_to(parts.iter().sum::<f64>() / parts.len() as f64, 1)
    }
}
