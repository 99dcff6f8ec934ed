//! Forecaster trait for date-indexed series

use chrono::NaiveDate;

use crate::error::{ForecastError, Result};
use crate::model::{ForecastPoint, Frequency, TimeSeries};

/// A model that learns from a dated series and predicts arbitrary dates.
pub trait Forecaster {
    /// Fit the model to the observed series
    fn fit(&mut self, series: &TimeSeries) -> Result<()>;

    /// Predict point estimates and bounds for the given dates
    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<ForecastPoint>>;

    /// The series the model was fitted on
    fn history(&self) -> Option<&TimeSeries>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool {
        self.history().is_some()
    }

    /// The `periods` dates following the fitted history at `freq`
    fn make_future_dates(&self, periods: usize, freq: Frequency) -> Result<Vec<NaiveDate>> {
        let last = self
            .history()
            .and_then(TimeSeries::last_date)
            .ok_or(ForecastError::NotFitted)?;
        Ok(freq.dates_after(last, periods))
    }

    /// History dates followed by `periods` future dates
    fn make_forecast_dates(&self, periods: usize, freq: Frequency) -> Result<Vec<NaiveDate>> {
        let history = self.history().ok_or(ForecastError::NotFitted)?;
        let mut dates = history.ds().to_vec();
        dates.extend(self.make_future_dates(periods, freq)?);
        Ok(dates)
    }
}
