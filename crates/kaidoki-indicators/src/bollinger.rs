//! Bollinger Bands.

use crate::moving_average::{rolling_mean, rolling_std};
use serde::{Deserialize, Serialize};

/// Band levels for a single session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    /// Rolling mean (centre line).
    pub middle: f64,
    /// Rolling sample standard deviation.
    pub sigma: f64,
    /// Centre + 1σ.
    pub plus1: f64,
    /// Centre + 2σ.
    pub plus2: f64,
    /// Centre − 1σ.
    pub minus1: f64,
    /// Centre − 2σ.
    pub minus2: f64,
}

impl Bands {
    /// Build band levels from a centre and a standard deviation.
    #[must_use]
    pub fn new(middle: f64, sigma: f64) -> Self {
        Self {
            middle,
            sigma,
            plus1: middle + sigma,
            plus2: middle + 2.0 * sigma,
            minus1: middle - sigma,
            minus2: middle - 2.0 * sigma,
        }
    }
}

/// Bollinger Band series aligned with the input closes.
#[derive(Debug, Clone, Default)]
pub struct BandSeries {
    middle: Vec<Option<f64>>,
    sigma: Vec<Option<f64>>,
}

impl BandSeries {
    /// Band levels at session `i`, if the window is complete there.
    #[must_use]
    pub fn at(&self, i: usize) -> Option<Bands> {
        match (self.middle.get(i)?, self.sigma.get(i)?) {
            (Some(m), Some(s)) => Some(Bands::new(*m, *s)),
            _ => None,
        }
    }

    /// Number of sessions covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Whether the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// The centre line.
    #[must_use]
    pub fn middle(&self) -> &[Option<f64>] {
        &self.middle
    }
}

/// Compute Bollinger Bands over `window` sessions.
#[must_use]
pub fn bollinger_bands(values: &[f64], window: usize) -> BandSeries {
    BandSeries {
        middle: rolling_mean(values, window),
        sigma: rolling_std(values, window),
    }
}
