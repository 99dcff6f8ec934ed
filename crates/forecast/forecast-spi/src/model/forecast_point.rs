//! Forecast output row model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point estimate and uncertainty bounds for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub ds: NaiveDate,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

impl ForecastPoint {
    pub fn new(ds: NaiveDate, yhat: f64, yhat_lower: f64, yhat_upper: f64) -> Self {
        Self {
            ds,
            yhat,
            yhat_lower,
            yhat_upper,
        }
    }

    /// Whether the bounds bracket the point estimate.
    pub fn is_ordered(&self) -> bool {
        self.yhat_lower <= self.yhat && self.yhat <= self.yhat_upper
    }

    /// Header of the forecast table, matching the serialized field order.
    pub const COLUMNS: [&'static str; 4] = ["ds", "yhat", "yhat_lower", "yhat_upper"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ordered() {
        let ds = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        assert!(ForecastPoint::new(ds, 10.0, 8.0, 12.0).is_ordered());
        assert!(ForecastPoint::new(ds, 10.0, 10.0, 10.0).is_ordered());
        assert!(!ForecastPoint::new(ds, 10.0, 11.0, 12.0).is_ordered());
    }
}
