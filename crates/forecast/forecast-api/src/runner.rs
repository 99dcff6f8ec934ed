//! One-call forecast entry point.

use forecast_spi::{ForecastError, ForecastPoint, Forecaster, Result, TimeSeries};
use tracing::info;

use crate::config::ForecastConfig;

/// Fit a model on `series` and predict the history plus `config.horizon` future dates.
pub fn run_forecast(config: &ForecastConfig, series: &TimeSeries) -> Result<Vec<ForecastPoint>> {
    if series.len() < 2 {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: series.len(),
        });
    }

    let mut model = config.build_model()?;
    model.fit(series)?;

    let dates = model.make_forecast_dates(config.horizon, config.frequency)?;
    let forecast = model.predict(&dates)?;
    info!(
        history = series.len(),
        horizon = config.horizon,
        frequency = config.frequency.as_str(),
        "forecast complete"
    );
    Ok(forecast)
}
