//! Relative Strength Index.

use crate::moving_average::rolling_mean;

/// Average losses of exactly zero are replaced by this value so the ratio
/// stays finite; a series with no losses lands at RSI ≈ 100.
const ZERO_LOSS_FLOOR: f64 = 1e-10;

/// Relative Strength Index over `period` price changes.
///
/// RSI = 100 − 100 / (1 + RS), where RS is the simple rolling mean of gains
/// divided by the simple rolling mean of losses over the last `period`
/// changes. The first value appears at index `period`.
///
/// # Example
///
/// ```
/// use kaidoki_indicators::rsi;
///
/// let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
/// let values = rsi(&closes, 14);
/// assert!(values[13].is_none());
/// assert!(values[14].unwrap() > 99.9);
/// ```
#[must_use]
pub fn rsi(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() <= period {
        return out;
    }

    let gains: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).max(0.0)).collect();
    let losses: Vec<f64> = values.windows(2).map(|w| (w[0] - w[1]).max(0.0)).collect();

    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    for (j, (gain, loss)) in avg_gain.iter().zip(avg_loss.iter()).enumerate() {
        if let (Some(gain), Some(loss)) = (gain, loss) {
            let loss = if *loss == 0.0 { ZERO_LOSS_FLOOR } else { *loss };
            let rs = gain / loss;
            out[j + 1] = Some(100.0 - 100.0 / (1.0 + rs));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rsi_warmup_length() {
        let closes: Vec<f64> = (0..30).map(f64::from).collect();
        let out = rsi(&closes, 14);
        assert_eq!(out.iter().filter(|v| v.is_none()).count(), 14);
    }

    #[test]
    fn test_rsi_only_losses() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 - f64::from(i)).collect();
        let out = rsi(&closes, 14);
        assert_relative_eq!(out[19].unwrap(), 0.0);
    }

    #[test]
    fn test_rsi_balanced_moves() {
        // Alternating +1 / -1 gives equal average gain and loss over an even period.
        let closes: Vec<f64> = (0..=14).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
        let out = rsi(&closes, 14);
        assert_relative_eq!(out[14].unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rsi_flat_series() {
        // No gains and no losses: 0 / 1e-10 = 0, so RSI = 0.
        let out = rsi(&[50.0; 16], 14);
        assert_relative_eq!(out[15].unwrap(), 0.0);
    }

    #[test]
    fn test_rsi_too_short() {
        assert!(rsi(&[1.0, 2.0, 3.0], 14).iter().all(Option::is_none));
    }
}
