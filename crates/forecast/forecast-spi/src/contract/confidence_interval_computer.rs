//! Trait for confidence interval computation

use crate::model::ConfidenceInterval;

/// Trait for confidence interval computation
pub trait ConfidenceIntervalComputer: Send + Sync {
    /// Compute an interval around each point forecast.
    ///
    /// `samples[i]` holds the simulated draws for `forecast[i]`.
    fn compute(
        &self,
        forecast: &[f64],
        samples: &[Vec<f64>],
        confidence_level: f64,
    ) -> ConfidenceInterval;
}
