//! Forecast Service Provider Interface
//!
//! Defines the forecaster contract, the dated series and forecast row models,
//! and the errors shared by the forecasting crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ConfidenceIntervalComputer, Forecaster};
pub use error::{ForecastError, Result};
pub use model::{ConfidenceInterval, ForecastPoint, Frequency, SeasonalitySpec, TimeSeries};
