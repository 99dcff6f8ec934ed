//! Dated time series model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Observations `y` indexed by strictly increasing dates `ds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    ds: Vec<NaiveDate>,
    y: Vec<f64>,
}

impl TimeSeries {
    /// Create a series, checking lengths, ordering and finiteness.
    pub fn new(ds: Vec<NaiveDate>, y: Vec<f64>) -> Result<Self> {
        if ds.len() != y.len() {
            return Err(ForecastError::invalid(
                "y",
                format!("{} values for {} dates", y.len(), ds.len()),
            ));
        }
        if let Some(pair) = ds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ForecastError::invalid(
                "ds",
                format!("dates must be strictly increasing ({} then {})", pair[0], pair[1]),
            ));
        }
        if let Some(pos) = y.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::invalid(
                "y",
                format!("non-finite value at {}", ds[pos]),
            ));
        }
        Ok(Self { ds, y })
    }

    /// Create a series from (date, value) pairs already in date order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (NaiveDate, f64)>) -> Result<Self> {
        let (ds, y) = pairs.into_iter().unzip();
        Self::new(ds, y)
    }

    pub fn ds(&self) -> &[NaiveDate] {
        &self.ds
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.ds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ds.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.ds.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.ds.last().copied()
    }

    /// Days between the first and last observation.
    pub fn span_days(&self) -> i64 {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => (last - first).num_days(),
            _ => 0,
        }
    }
}
