//! Slope and direction of an indicator series.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Percentage change across the last `window` steps of a series.
///
/// Missing values are skipped first. Needs at least `window + 1` values;
/// returns 0 when there are fewer or when the starting value is 0.
/// Positive means rising, negative falling.
#[must_use]
pub fn slope_percent(series: &[Option<f64>], window: usize) -> f64 {
    let present: Vec<f64> = series.iter().flatten().copied().collect();
    if present.len() < window + 1 {
        return 0.0;
    }

    let start = present[present.len() - window - 1];
    let end = present[present.len() - 1];
    if start == 0.0 {
        return 0.0;
    }
    (end - start) / start * 100.0
}

/// Direction of the last step of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeArrow {
    /// Last value above the one before.
    #[display("↗")]
    Up,
    /// Last value below the one before.
    #[display("↘")]
    Down,
    /// Unchanged, or fewer than two values.
    #[display("→")]
    Flat,
}

/// Direction of the last step over the non-missing values of `series`.
#[must_use]
pub fn slope_arrow(series: &[Option<f64>]) -> SlopeArrow {
    let mut present = series.iter().rev().flatten();
    let (Some(last), Some(prev)) = (present.next(), present.next()) else {
        return SlopeArrow::Flat;
    };

    let diff = last - prev;
    if diff > 0.0 {
        SlopeArrow::Up
    } else if diff < 0.0 {
        SlopeArrow::Down
    } else {
        SlopeArrow::Flat
    }
}
