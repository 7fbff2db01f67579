//! Numeric helpers for 0–100 scores.

/// Lower bound of every score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every score.
pub const SCORE_MAX: f64 = 100.0;

/// Round `value` to `decimals` places, ties to even.
///
/// Ties only occur when the scaled value is an exact binary half, so
/// `round_to(0.25, 1)` is `0.2` while `round_to(2.675, 2)` is `2.67`.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Clamp `value` into the score range `[0, 100]`.
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

/// Mean of three scores rounded to one decimal, the shape of every QVT value.
#[must_use]
pub fn mean3(a: f64, b: f64, c: f64) -> f64 {
    round_to((a + b + c) / 3.0, 1)
}
