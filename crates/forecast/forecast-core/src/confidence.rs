//! Confidence interval implementations
//!
//! Turns simulated draws into prediction intervals.

use forecast_spi::{ConfidenceInterval, ConfidenceIntervalComputer};

/// Linear-interpolated quantile of an ascending slice.
///
/// `q` is clamped to `[0, 1]`; an empty slice yields NaN.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

/// Interval from the empirical quantiles of simulated draws.
///
/// The bounds sit at `(1 - level) / 2` and `(1 + level) / 2`, then are
/// widened where needed so they always bracket the point forecast. Points
/// without draws get a zero-width interval.
#[derive(Debug, Default)]
pub struct QuantileComputer;

impl QuantileComputer {
    pub fn new() -> Self {
        Self
    }
}

impl ConfidenceIntervalComputer for QuantileComputer {
    fn compute(
        &self,
        forecast: &[f64],
        samples: &[Vec<f64>],
        confidence_level: f64,
    ) -> ConfidenceInterval {
        let lower_q = (1.0 - confidence_level) / 2.0;
        let upper_q = (1.0 + confidence_level) / 2.0;

        let mut lower = Vec::with_capacity(forecast.len());
        let mut upper = Vec::with_capacity(forecast.len());

        for (i, &point) in forecast.iter().enumerate() {
            let mut draws: Vec<f64> = samples
                .get(i)
                .map(|d| d.iter().copied().filter(|v| v.is_finite()).collect())
                .unwrap_or_default();

            if draws.is_empty() {
                lower.push(point);
                upper.push(point);
                continue;
            }

            draws.sort_by(f64::total_cmp);
            lower.push(quantile(&draws, lower_q).min(point));
            upper.push(quantile(&draws, upper_q).max(point));
        }

        ConfidenceInterval {
            forecast: forecast.to_vec(),
            lower,
            upper,
            confidence_level,
        }
    }
}
