//! QVT: the combined view across quality, valuation and timing.

use derive_more::Display;
use kaidoki_traits::score::mean3;
use serde::{Deserialize, Serialize};

/// QVT score: the mean of Q, V and T, rounded to one decimal.
#[must_use]
pub fn qvt_score(q: f64, v: f64, t: f64) -> f64 {
    mean3(q, v, t)
}

/// Overall verdict for a QVT score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QvtVerdict {
    /// QVT ≥ 70.
    #[display("Very attractive overall, a core candidate.")]
    Core,
    /// QVT ≥ 60.
    #[display("Worth buying; aim for a pullback.")]
    Consider,
    /// QVT ≥ 50.
    #[display("Not bad; compare with other candidates.")]
    Compare,
    /// QVT < 50.
    #[display("Pass for now.")]
    Pass,
}

impl QvtVerdict {
    /// Verdict for `qvt`.
    #[must_use]
    pub fn from_score(qvt: f64) -> Self {
        if qvt >= 70.0 {
            Self::Core
        } else if qvt >= 60.0 {
            Self::Consider
        } else if qvt >= 50.0 {
            Self::Compare
        } else {
            Self::Pass
        }
    }
}
