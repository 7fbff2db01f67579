//! Quality (Q) scoring from profitability and balance-sheet strength.
//!
//! Two scorers are available:
//! - [`TieredQuality`]: threshold tables, the default
//! - [`LinearQuality`]: each ratio mapped linearly onto 0–100 and averaged
//!
//! [`SectorCorrection`] nudges either result toward or away from sector norms.

mod linear;
pub mod sector;
mod tiered;

pub use linear::LinearQuality;
pub use sector::{CorrectionResult, SectorCorrection, SectorCorrectionConfig, SectorInputs};
pub use tiered::TieredQuality;

use derive_more::Display;
use kaidoki_traits::Scorer;
use serde::{Deserialize, Serialize};

/// Profitability ratios feeding the Q score, all in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityInputs {
    /// Return on equity.
    pub roe: Option<f64>,
    /// Return on assets.
    pub roa: Option<f64>,
    /// Equity ratio (equity / total assets).
    pub equity_ratio: Option<f64>,
}

impl QualityInputs {
    /// Bundle the three ratios.
    #[must_use]
    pub const fn new(roe: Option<f64>, roa: Option<f64>, equity_ratio: Option<f64>) -> Self {
        Self {
            roe,
            roa,
            equity_ratio,
        }
    }

    /// True when no ratio is known.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.roe.is_none() && self.roa.is_none() && self.equity_ratio.is_none()
    }
}

/// Which Q scorer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityModel {
    /// Threshold tables.
    #[default]
    #[display("tiered")]
    Tiered,
    /// Linear mapping.
    #[display("linear")]
    Linear,
}

impl QualityModel {
    /// Boxed scorer for this model.
    #[must_use]
    pub fn scorer(&self) -> Box<dyn Scorer<Input = QualityInputs>> {
        match self {
            Self::Tiered => Box::new(TieredQuality),
            Self::Linear => Box::new(LinearQuality),
        }
    }
}
