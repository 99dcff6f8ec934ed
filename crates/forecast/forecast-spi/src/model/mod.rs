//! Model module containing data structures

mod confidence_interval;
mod forecast_point;
mod frequency;
mod seasonality;
mod time_series;

pub use confidence_interval::ConfidenceInterval;
pub use forecast_point::ForecastPoint;
pub use frequency::Frequency;
pub use seasonality::SeasonalitySpec;
pub use time_series::TimeSeries;
