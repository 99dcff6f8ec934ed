//! Fourier-series seasonal features
//!
//! A seasonal component of period `P` days and order `N` is the linear
//! combination of `sin(2 pi n t / P)` and `cos(2 pi n t / P)` for
//! `n = 1..=N`, with `t` counted in days since the Unix epoch so the phase of
//! every component is fixed to the calendar.

use std::f64::consts::PI;

use chrono::NaiveDate;
use forecast_spi::SeasonalitySpec;

/// Days since 1970-01-01.
pub fn epoch_days(date: NaiveDate) -> f64 {
    (date - NaiveDate::default()).num_days() as f64
}

/// Sine/cosine pairs for one component, `2 * order` values.
pub fn fourier_features(t_days: f64, period: f64, order: usize) -> Vec<f64> {
    let mut features = Vec::with_capacity(2 * order);
    for n in 1..=order {
        let angle = 2.0 * PI * n as f64 * t_days / period;
        features.push(angle.sin());
        features.push(angle.cos());
    }
    features
}

/// Features of every component, concatenated in declaration order.
pub fn seasonal_features(t_days: f64, specs: &[SeasonalitySpec]) -> Vec<f64> {
    specs
        .iter()
        .flat_map(|spec| fourier_features(t_days, spec.period, spec.fourier_order))
        .collect()
}
