//! Indicator snapshot: every series, plus the latest complete row.

use crate::{
    bollinger::{BandSeries, Bands, bollinger_bands},
    config::IndicatorConfig,
    moving_average::rolling_mean,
    rsi::rsi,
    slope::{SlopeArrow, slope_arrow, slope_percent},
};
use kaidoki_traits::{KaidokiError, PriceHistory, Result};
use serde::{Deserialize, Serialize};

/// One value per moving average (short / mid / long).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaSet<T> {
    /// Value for the short window.
    pub short: T,
    /// Value for the medium window.
    pub mid: T,
    /// Value for the long window.
    pub long: T,
}

impl<T> MaSet<T> {
    /// Apply `f` to each member.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> MaSet<U> {
        MaSet {
            short: f(&self.short),
            mid: f(&self.mid),
            long: f(&self.long),
        }
    }
}

/// Full indicator series aligned with the price history.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSeries {
    /// Closing prices.
    pub close: Vec<f64>,
    /// Moving averages.
    pub ma: MaSet<Vec<Option<f64>>>,
    /// Bollinger Bands.
    pub bands: BandSeries,
    /// RSI.
    pub rsi: Vec<Option<f64>>,
}

impl IndicatorSeries {
    /// Compute every series for `closes`.
    #[must_use]
    pub fn compute(closes: &[f64], config: &IndicatorConfig) -> Self {
        Self {
            close: closes.to_vec(),
            ma: MaSet {
                short: rolling_mean(closes, config.ma_short),
                mid: rolling_mean(closes, config.ma_mid),
                long: rolling_mean(closes, config.ma_long),
            },
            bands: bollinger_bands(closes, config.bb_window),
            rsi: rsi(closes, config.rsi_period),
        }
    }

    /// The row at `i` when every indicator is present there.
    fn complete_row(&self, i: usize) -> Option<(f64, MaSet<f64>, Bands, f64)> {
        let ma = MaSet {
            short: self.ma.short.get(i).copied().flatten()?,
            mid: self.ma.mid.get(i).copied().flatten()?,
            long: self.ma.long.get(i).copied().flatten()?,
        };
        let bands = self.bands.at(i)?;
        let rsi = self.rsi.get(i).copied().flatten()?;
        Some((*self.close.get(i)?, ma, bands, rsi))
    }

    /// Indices of rows where every indicator is present.
    #[must_use]
    pub fn complete_rows(&self) -> Vec<usize> {
        (0..self.close.len())
            .filter(|&i| self.complete_row(i).is_some())
            .collect()
    }
}

/// Latest technical state of a symbol.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSnapshot {
    /// Close of the latest complete row.
    pub price: f64,
    /// Moving averages at the latest complete row.
    pub ma: MaSet<f64>,
    /// Moving-average windows, for labelling.
    pub ma_windows: MaSet<usize>,
    /// Percentage slope of each moving average.
    pub slopes: MaSet<f64>,
    /// Direction of the last step of each moving average.
    pub arrows: MaSet<SlopeArrow>,
    /// Bollinger Bands at the latest complete row.
    pub bands: Bands,
    /// RSI at the latest complete row.
    pub rsi: f64,
    /// Number of rows where every indicator is present.
    pub valid_rows: usize,
    /// The full series.
    #[serde(skip)]
    pub series: IndicatorSeries,
}

impl IndicatorSnapshot {
    /// Compute indicators over `history` and keep the latest complete row.
    ///
    /// # Errors
    ///
    /// Returns [`KaidokiError::InsufficientData`] when fewer than
    /// `config.min_valid_rows` rows have every indicator, and
    /// [`KaidokiError::Config`] for an invalid configuration.
    pub fn compute(history: &PriceHistory, config: &IndicatorConfig) -> Result<Self> {
        config.validate()?;

        let series = IndicatorSeries::compute(history.closes(), config);
        let complete = series.complete_rows();

        if complete.len() < config.min_valid_rows {
            return Err(KaidokiError::InsufficientData(format!(
                "{} of {} sessions have every indicator, need {} (indicators warm up over {} sessions)",
                complete.len(),
                history.len(),
                config.min_valid_rows,
                config.warmup()
            )));
        }

        let last = complete[complete.len() - 1];
        let (price, ma, bands, rsi) = series.complete_row(last).ok_or_else(|| {
            KaidokiError::InsufficientData("no complete indicator row".to_string())
        })?;

        let slopes = series.ma.map(|s| slope_percent(s, config.slope_window));
        let arrows = series.ma.map(|s| slope_arrow(s));

        Ok(Self {
            price,
            ma,
            ma_windows: MaSet {
                short: config.ma_short,
                mid: config.ma_mid,
                long: config.ma_long,
            },
            slopes,
            arrows,
            bands,
            rsi,
            valid_rows: complete.len(),
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kaidoki_traits::Date;

    fn history(closes: &[f64]) -> PriceHistory {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let dates: Vec<Date> = (0..closes.len())
            .map(|i| start + chrono::Days::new(i as u64))
            .collect();
        PriceHistory::from_points(&dates, closes).unwrap()
    }

    #[test]
    fn test_compute_rising_series() {
        let closes: Vec<f64> = (0..100).map(|i| 100.0 + f64::from(i)).collect();
        let snapshot = IndicatorSnapshot::compute(&history(&closes), &IndicatorConfig::default())
            .unwrap();

        assert_relative_eq!(snapshot.price, 199.0);
        assert_relative_eq!(snapshot.ma.short, 187.0);
        assert_relative_eq!(snapshot.ma.mid, 174.5);
        assert_relative_eq!(snapshot.ma.long, 162.0);
        assert_relative_eq!(snapshot.bands.middle, 189.5);
        assert!(snapshot.rsi > 99.9);
        assert_eq!(snapshot.valid_rows, 26);
        assert_eq!(snapshot.arrows.short, SlopeArrow::Up);
        // 25MA moved from 183 to 187 over the last four steps.
        assert_relative_eq!(snapshot.slopes.short, 4.0 / 183.0 * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compute_insufficient_history() {
        let closes: Vec<f64> = (0..78).map(|i| 100.0 + f64::from(i)).collect();
        let result = IndicatorSnapshot::compute(&history(&closes), &IndicatorConfig::default());
        assert!(matches!(result, Err(KaidokiError::InsufficientData(_))));
    }

    #[test]
    fn test_compute_minimum_history() {
        let closes: Vec<f64> = (0..79).map(|i| 100.0 - f64::from(i) * 0.5).collect();
        let snapshot = IndicatorSnapshot::compute(&history(&closes), &IndicatorConfig::default())
            .unwrap();
        assert_eq!(snapshot.valid_rows, 5);
        assert_eq!(snapshot.arrows.long, SlopeArrow::Down);
        assert!(snapshot.slopes.mid < 0.0);
    }

    #[test]
    fn test_ma_set_map() {
        let set = MaSet {
            short: 1,
            mid: 2,
            long: 3,
        };
        assert_eq!(set.map(|v| v * 10), MaSet { short: 10, mid: 20, long: 30 });
    }
}
