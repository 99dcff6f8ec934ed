//! Confidence interval model

/// Confidence interval result
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceInterval {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.8 for 80%)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Whether lower <= forecast <= upper holds at every index.
    pub fn is_ordered(&self) -> bool {
        self.forecast
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(f, (l, u))| l <= f && f <= u)
    }
}
