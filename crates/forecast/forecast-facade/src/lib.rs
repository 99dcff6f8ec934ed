//! Forecast Facade
//!
//! High-level API for the sales forecast. Re-exports all public types from
//! the forecast stack for convenient usage.
//!
//! # Example
//!
//! ```rust,ignore
//! use forecast_facade::{run_forecast, write_forecast_csv, ForecastConfig, TimeSeries};
//!
//! let series = TimeSeries::from_pairs(daily_sales)?;
//! let forecast = run_forecast(&ForecastConfig::default(), &series)?;
//! write_forecast_csv(Path::new("superstore_forecast.csv"), &forecast)?;
//! ```

// Re-export everything from API (which includes SPI and core types)
pub use forecast_api::*;

// Re-export SPI contracts and errors for implementors of custom models
pub use forecast_spi::{contract, error};
pub use forecast_spi::{
    ConfidenceInterval, ConfidenceIntervalComputer, ForecastError, ForecastPoint, Forecaster,
    Frequency, Result, SeasonalitySpec, TimeSeries,
};

// Re-export core modules for direct access
pub use forecast_core::{confidence, linalg, model, output, seasonality, trend};
