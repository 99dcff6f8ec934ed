//! Forecast Core
//!
//! Core implementations for the additive forecasting model: trend
//! changepoints, Fourier seasonality, ridge fitting, simulated intervals and
//! forecast output.

pub mod confidence;
pub mod linalg;
pub mod model;
pub mod output;
pub mod seasonality;
pub mod trend;

// Re-export SPI types for implementations
pub use forecast_spi::{
    ConfidenceInterval, ConfidenceIntervalComputer, ForecastError, ForecastPoint, Forecaster,
    Frequency, Result, SeasonalitySpec, TimeSeries,
};

// Re-export main types
pub use confidence::QuantileComputer;
pub use model::{AdditiveModel, ModelParams};
pub use output::write_forecast_csv;
