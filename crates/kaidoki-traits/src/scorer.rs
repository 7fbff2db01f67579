//! Scorer trait for turning fundamentals into 0–100 scores.
//!
//! The quality (Q) and valuation (V) scores each ship more than one model.
//! The pipeline holds them as `Box<dyn Scorer<Input = ...>>` so the model can
//! be picked from configuration.

/// A model that maps a set of inputs onto a score in `[0, 100]`.
///
/// Implementations must be thread-safe (`Send + Sync`) and pure: the same
/// input always yields the same score.
///
/// # Example
///
/// ```no_run
/// use kaidoki_traits::Scorer;
///
/// struct Constant;
///
/// impl Scorer for Constant {
///     type Input = ();
///
///     fn name(&self) -> &str {
///         "constant"
///     }
///
///     fn score(&self, _input: &()) -> f64 {
///         50.0
///     }
/// }
/// ```
pub trait Scorer: Send + Sync {
    /// The inputs this scorer reads.
    type Input;

    /// Returns the name of this scorer.
    ///
    /// Used by the registry and in rendered output.
    fn name(&self) -> &str;

    /// Computes the score for `input`.
    ///
    /// The result is always within `[0, 100]`. Missing inputs are handled by
    /// the model itself (ignored, or replaced by a neutral value).
    fn score(&self, input: &Self::Input) -> f64;
}
