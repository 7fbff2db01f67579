//! Valuation (V) scoring: how cheap the stock is.
//!
//! [`ValuationRatios`] derives PER / PBR / forward PER from the price and
//! per-share figures; [`TieredValuation`] (default) or [`LinearValuation`]
//! turns them into a score.

mod linear;
mod tiered;

pub use linear::LinearValuation;
pub use tiered::TieredValuation;

use crate::nonzero;
use derive_more::Display;
use kaidoki_traits::Scorer;
use serde::{Deserialize, Serialize};

/// Inputs to the V score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Trailing price/earnings ratio.
    pub per: Option<f64>,
    /// Price/book ratio.
    pub pbr: Option<f64>,
    /// Dividend yield in percent.
    pub dividend_yield: Option<f64>,
}

impl ValuationInputs {
    /// Bundle the three inputs.
    #[must_use]
    pub const fn new(per: Option<f64>, pbr: Option<f64>, dividend_yield: Option<f64>) -> Self {
        Self {
            per,
            pbr,
            dividend_yield,
        }
    }
}

/// Price multiples derived from per-share figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValuationRatios {
    /// Trailing PER.
    pub per: Option<f64>,
    /// Forward PER.
    pub per_forward: Option<f64>,
    /// PBR.
    pub pbr: Option<f64>,
}

impl ValuationRatios {
    /// Derive the ratios for `price`.
    ///
    /// A ratio is only produced when its denominator is known and non-zero. A
    /// supplied non-zero forward PER wins over one derived from forward EPS.
    #[must_use]
    pub fn compute(
        price: f64,
        eps: Option<f64>,
        bps: Option<f64>,
        per_forward: Option<f64>,
        eps_forward: Option<f64>,
    ) -> Self {
        let ratio = |denominator: Option<f64>| nonzero(denominator).map(|d| price / d);
        Self {
            per: ratio(eps),
            per_forward: nonzero(per_forward).or_else(|| ratio(eps_forward)),
            pbr: ratio(bps),
        }
    }

    /// Scoring inputs with the given dividend yield.
    #[must_use]
    pub const fn inputs(&self, dividend_yield: Option<f64>) -> ValuationInputs {
        ValuationInputs::new(self.per, self.pbr, dividend_yield)
    }
}

/// Which V scorer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuationModel {
    /// Threshold tables.
    #[default]
    #[display("tiered")]
    Tiered,
    /// Linear mapping.
    #[display("linear")]
    Linear,
}

impl ValuationModel {
    /// Boxed scorer for this model.
    #[must_use]
    pub fn scorer(&self) -> Box<dyn Scorer<Input = ValuationInputs>> {
        match self {
            Self::Tiered => Box::new(TieredValuation),
            Self::Linear => Box::new(LinearValuation),
        }
    }
}
