//! Seasonal component specification

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// A periodic component modelled by a Fourier series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalitySpec {
    /// Component name, e.g. "weekly"
    pub name: String,
    /// Period in days
    pub period: f64,
    /// Number of sine/cosine pairs
    pub fourier_order: usize,
    /// Scale of the Gaussian prior on the Fourier coefficients
    pub prior_scale: f64,
}

impl SeasonalitySpec {
    pub fn new(name: &str, period: f64, fourier_order: usize, prior_scale: f64) -> Self {
        Self {
            name: name.to_string(),
            period,
            fourier_order,
            prior_scale,
        }
    }

    /// Day-of-week pattern: period 7, order 3.
    pub fn weekly(prior_scale: f64) -> Self {
        Self::new("weekly", 7.0, 3, prior_scale)
    }

    /// Day-of-year pattern: period 365.25, order 10.
    pub fn yearly(prior_scale: f64) -> Self {
        Self::new("yearly", 365.25, 10, prior_scale)
    }

    /// Time-of-day pattern: period 1, order 4.
    pub fn daily(prior_scale: f64) -> Self {
        Self::new("daily", 1.0, 4, prior_scale)
    }

    /// Number of regression columns this component contributes.
    pub fn width(&self) -> usize {
        2 * self.fourier_order
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.period > 0.0) {
            return Err(ForecastError::invalid(
                &format!("{}.period", self.name),
                "must be positive",
            ));
        }
        if self.fourier_order == 0 {
            return Err(ForecastError::invalid(
                &format!("{}.fourier_order", self.name),
                "must be at least 1",
            ));
        }
        if !(self.prior_scale > 0.0) {
            return Err(ForecastError::invalid(
                &format!("{}.prior_scale", self.name),
                "must be positive",
            ));
        }
        Ok(())
    }
}
