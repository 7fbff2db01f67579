//! Rolling mean and rolling standard deviation.

use ndarray::ArrayView1;

/// Simple rolling mean over `window` values.
///
/// The output is aligned with `values`: position `i` holds the mean of
/// `values[i + 1 - window..=i]`, or `None` while fewer than `window` values
/// have been seen.
#[must_use]
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let view = ArrayView1::from(values);
    for (i, w) in view.windows(window).into_iter().enumerate() {
        out[i + window - 1] = w.mean();
    }
    out
}

/// Rolling sample standard deviation (ddof = 1) over `window` values.
///
/// Alignment matches [`rolling_mean`]. Windows shorter than two values have
/// no sample deviation and yield `None` everywhere.
#[must_use]
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window < 2 || values.len() < window {
        return out;
    }

    let view = ArrayView1::from(values);
    for (i, w) in view.windows(window).into_iter().enumerate() {
        out[i + window - 1] = Some(w.std(1.0));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rolling_mean_warmup() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(out.len(), 5);
        assert!(out[0].is_none());
        assert!(out[1].is_none());
        assert_relative_eq!(out[2].unwrap(), 2.0);
        assert_relative_eq!(out[3].unwrap(), 3.0);
        assert_relative_eq!(out[4].unwrap(), 4.0);
    }

    #[test]
    fn test_rolling_mean_short_input() {
        let out = rolling_mean(&[1.0, 2.0], 3);
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn test_rolling_mean_zero_window() {
        assert_eq!(rolling_mean(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn test_rolling_std_sample() {
        // Sample std of [2, 4, 4, 4, 5, 5, 7, 9] is sqrt(32 / 7).
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let out = rolling_std(&values, 8);
        assert!(out[6].is_none());
        assert_relative_eq!(out[7].unwrap(), (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_rolling_std_constant_series() {
        let out = rolling_std(&[3.0; 5], 3);
        assert_relative_eq!(out[4].unwrap(), 0.0);
    }

    #[test]
    fn test_rolling_std_window_of_one() {
        assert_eq!(rolling_std(&[1.0, 2.0], 1), vec![None, None]);
    }
}
