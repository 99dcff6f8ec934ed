//! Forecast Consumer API
//!
//! Consumer configuration and entry points for the sales forecast.
//!
//! This crate provides:
//! - [`ForecastConfig`] and its builder, loadable from JSON
//! - [`run_forecast`], which fits and predicts in one call
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod runner;

pub use config::{ForecastConfig, ForecastConfigBuilder};
pub use runner::run_forecast;

// Re-export from core
pub use forecast_core::{write_forecast_csv, AdditiveModel, ModelParams, QuantileComputer};

// Re-export from SPI
pub use forecast_spi::{
    ConfidenceInterval, ConfidenceIntervalComputer, ForecastError, ForecastPoint, Forecaster,
    Frequency, Result, SeasonalitySpec, TimeSeries,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{run_forecast, ForecastConfig, ForecastConfigBuilder};
    pub use forecast_core::{write_forecast_csv, AdditiveModel, ModelParams};
    pub use forecast_spi::{ForecastError, ForecastPoint, Forecaster, Frequency, Result, TimeSeries};
}
