//! Sector correction for the Q score.
//!
//! A low ROE is normal for a railway and poor for a software house. Given
//! sector reference values for ROE and ROA, each ratio is scored relative to its
//! sector and the base Q score is shifted by part of the deviation from a
//! neutral level. The equity ratio is never corrected.

use kaidoki_traits::{KaidokiError, Result, clamp_score, round_to, score::mean3};
use serde::{Deserialize, Serialize};

/// Tuning for [`SectorCorrection`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorCorrectionConfig {
    /// Ratio to the sector value that earns 100 (default: 1.5)
    pub cap: f64,
    /// Share of the deviation added to Q (default: 0.5)
    pub alpha: f64,
    /// Relative score regarded as on par with the sector (default: 70.0)
    pub neutral: f64,
}

impl Default for SectorCorrectionConfig {
    fn default() -> Self {
        Self {
            cap: 1.5,
            alpha: 0.5,
            neutral: 70.0,
        }
    }
}

impl SectorCorrectionConfig {
    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::Config`] when `cap` is not positive or `alpha`
    /// is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.cap.is_nan() || self.cap <= 0.0 {
            return Err(KaidokiError::Config(format!(
                "correction cap must be positive, got {}",
                self.cap
            )));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(KaidokiError::Config(format!(
                "correction alpha must be within [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Sector reference values, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorInputs {
    /// Sector ROE.
    pub roe: Option<f64>,
    /// Sector ROA.
    pub roa: Option<f64>,
}

impl SectorInputs {
    /// `Some` when at least one sector value was given.
    #[must_use]
    pub const fn from_options(roe: Option<f64>, roa: Option<f64>) -> Option<Self> {
        if roe.is_none() && roa.is_none() {
            None
        } else {
            Some(Self { roe, roa })
        }
    }
}

/// Outcome of a sector correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Q before correction.
    pub base_q: f64,
    /// Q after correction.
    pub corrected_q: f64,
    /// QVT recomputed with the corrected Q.
    pub corrected_qvt: f64,
    /// ROE relative to its sector (0–100).
    pub roe_relative: Option<f64>,
    /// ROA relative to its sector (0–100).
    pub roa_relative: Option<f64>,
    /// Sector values the correction used.
    pub sector: SectorInputs,
}

impl CorrectionResult {
    /// Corrected Q minus base Q.
    #[must_use]
    pub fn q_delta(&self) -> f64 {
        self.corrected_q - self.base_q
    }

    /// True when the correction changed nothing because no relative score was available.
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        self.roe_relative.is_none() && self.roa_relative.is_none()
    }
}

/// Applies sector-relative corrections to a Q score.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorCorrection {
    config: SectorCorrectionConfig,
}

impl SectorCorrection {
    /// Create a corrector with the given tuning.
    #[must_use]
    pub const fn new(config: SectorCorrectionConfig) -> Self {
        Self { config }
    }

    /// The tuning in use.
    #[must_use]
    pub const fn config(&self) -> &SectorCorrectionConfig {
        &self.config
    }

    /// Score `actual` against `sector` on 0–100, one decimal.
    ///
    /// `None` when either value is unknown or the sector value is 0.
    #[must_use]
    pub fn relative_score(&self, actual: Option<f64>, sector: Option<f64>) -> Option<f64> {
        let actual = actual?;
        let sector = sector.filter(|s| *s != 0.0)?;
        let ratio = (actual / sector).clamp(0.0, self.config.cap);
        Some(round_to(ratio / self.config.cap * 100.0, 1))
    }

    /// Correct `base_q` using the company's ROE / ROA and sector values.
    ///
    /// `v` and `t` are only used to recompute QVT.
    #[must_use]
    pub fn apply(
        &self,
        base_q: f64,
        v: f64,
        t: f64,
        roe: Option<f64>,
        roa: Option<f64>,
        sector: SectorInputs,
    ) -> CorrectionResult {
        let roe_relative = self.relative_score(roe, sector.roe);
        let roa_relative = self.relative_score(roa, sector.roa);

        let relative: Vec<f64> = [roe_relative, roa_relative].into_iter().flatten().collect();

        let corrected_q = if relative.is_empty() {
            base_q
        } else {
            let mean = relative.iter().sum::<f64>() / relative.len() as f64;
            let delta = mean - self.config.neutral;
            round_to(clamp_score(base_q + self.config.alpha * delta), 1)
        };

        CorrectionResult {
            base_q,
            corrected_q,
            corrected_qvt: mean3(corrected_q, v, t),
            roe_relative,
            roa_relative,
            sector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sector(roe: f64, roa: f64) -> SectorInputs {
        SectorInputs {
            roe: Some(roe),
            roa: Some(roa),
        }
    }

    #[test]
    fn test_relative_score() {
        let c = SectorCorrection::default();
        assert_eq!(c.relative_score(Some(10.0), Some(10.0)), Some(66.7));
        assert_eq!(c.relative_score(Some(30.0), Some(10.0)), Some(100.0));
        assert_eq!(c.relative_score(Some(-5.0), Some(10.0)), Some(0.0));
        assert_eq!(c.relative_score(None, Some(10.0)), None);
        assert_eq!(c.relative_score(Some(10.0), Some(0.0)), None);
        assert_eq!(c.relative_score(Some(10.0), None), None);
    }

    #[test]
    fn test_apply_above_sector() {
        let c = SectorCorrection::default();
        // ROE 15 vs 10 → 100, ROA 6 vs 4 → 100; delta = 30; +15
        let result = c.apply(50.0, 60.0, 40.0, Some(15.0), Some(6.0), sector(10.0, 4.0));
        assert_relative_eq!(result.corrected_q, 65.0);
        assert_relative_eq!(result.corrected_qvt, 55.0);
        assert_relative_eq!(result.q_delta(), 15.0);
        assert!(!result.is_neutral());
    }

    #[test]
    fn test_apply_below_sector_clamps() {
        let c = SectorCorrection::default();
        let result = c.apply(10.0, 20.0, 30.0, Some(0.0), None, sector(10.0, 4.0));
        // ROE relative 0 → delta −70 → 10 − 35 clamps to 0
        assert_relative_eq!(result.corrected_q, 0.0);
        assert_eq!(result.roa_relative, None);
        assert_relative_eq!(result.corrected_qvt, 16.7);
    }

    #[test]
    fn test_apply_without_usable_sector_keeps_q() {
        let c = SectorCorrection::default();
        let result = c.apply(42.1, 50.0, 50.0, Some(12.0), Some(5.0), SectorInputs::default());
        assert!(result.is_neutral());
        assert_relative_eq!(result.corrected_q, 42.1);
        assert_relative_eq!(result.corrected_qvt, 47.4);
    }

    #[test]
    fn test_custom_tuning() {
        let c = SectorCorrection::new(SectorCorrectionConfig {
            cap: 2.0,
            alpha: 1.0,
            neutral: 50.0,
        });
        // ratio 1.0 → 50 → delta 0
        let result = c.apply(40.0, 0.0, 0.0, Some(8.0), None, sector(8.0, 1.0));
        assert_relative_eq!(result.corrected_q, 40.0);
    }

    #[test]
    fn test_config_validate() {
        assert!(SectorCorrectionConfig::default().validate().is_ok());
        let bad_cap = SectorCorrectionConfig {
            cap: 0.0,
            ..Default::default()
        };
        assert!(matches!(bad_cap.validate(), Err(KaidokiError::Config(_))));
        let bad_alpha = SectorCorrectionConfig {
            alpha: 1.5,
            ..Default::default()
        };
        assert!(bad_alpha.validate().is_err());
    }

    #[test]
    fn test_sector_inputs_from_options() {
        assert_eq!(SectorInputs::from_options(None, None), None);
        assert_eq!(
            SectorInputs::from_options(Some(8.0), None),
            Some(SectorInputs {
                roe: Some(8.0),
                roa: None
            })
        );
    }
}
