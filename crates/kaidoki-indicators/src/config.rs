//! Indicator windows.

use kaidoki_traits::{KaidokiError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the indicator snapshot.
///
/// Windows are counted in sessions (rows of the price history).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Short moving-average window (default: 25)
    pub ma_short: usize,

    /// Medium moving-average window (default: 50)
    pub ma_mid: usize,

    /// Long moving-average window (default: 75)
    pub ma_long: usize,

    /// Bollinger Band window (default: 20)
    pub bb_window: usize,

    /// RSI period (default: 14)
    pub rsi_period: usize,

    /// Number of steps the MA slope is measured over (default: 4)
    pub slope_window: usize,

    /// Minimum sessions with every indicator present (default: 5)
    pub min_valid_rows: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_short: 25,
            ma_mid: 50,
            ma_long: 75,
            bb_window: 20,
            rsi_period: 14,
            slope_window: 4,
            min_valid_rows: 5,
        }
    }
}

impl IndicatorConfig {
    /// Sessions needed before the first row has every indicator.
    #[must_use]
    pub fn warmup(&self) -> usize {
        self.ma_short
            .max(self.ma_mid)
            .max(self.ma_long)
            .max(self.bb_window)
            .max(self.rsi_period + 1)
    }

    /// Check that every window is usable.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::Config`] for a zero window, a Bollinger window
    /// below two, or a zero `min_valid_rows`.
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("ma_short", self.ma_short),
            ("ma_mid", self.ma_mid),
            ("ma_long", self.ma_long),
            ("rsi_period", self.rsi_period),
            ("slope_window", self.slope_window),
            ("min_valid_rows", self.min_valid_rows),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, w)| *w == 0) {
            return Err(KaidokiError::Config(format!("{name} must be positive")));
        }
        if self.bb_window < 2 {
            return Err(KaidokiError::Config(
                "bb_window must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}
