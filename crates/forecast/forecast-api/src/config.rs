//! Forecast configuration types.

use std::fs;
use std::path::Path;

use forecast_core::{AdditiveModel, ModelParams};
use forecast_spi::{ForecastError, Frequency, Result, SeasonalitySpec};
use serde::{Deserialize, Serialize};

/// Settings for one forecast run.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future dates to predict
    pub horizon: usize,
    /// Spacing of the future dates
    pub frequency: Frequency,
    pub weekly_seasonality: bool,
    pub yearly_seasonality: bool,
    pub daily_seasonality: bool,
    /// Maximum number of trend changepoints
    pub n_changepoints: usize,
    /// Leading fraction of the history eligible for changepoints
    pub changepoint_range: f64,
    pub changepoint_prior_scale: f64,
    pub seasonality_prior_scale: f64,
    pub trend_prior_scale: f64,
    /// Width of the uncertainty interval
    pub interval_width: f64,
    /// Simulated paths behind the interval; 0 disables it
    pub uncertainty_samples: usize,
    pub seed: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        let params = ModelParams::default();
        Self {
            horizon: 12,
            frequency: Frequency::MonthStart,
            weekly_seasonality: true,
            yearly_seasonality: true,
            daily_seasonality: false,
            n_changepoints: params.n_changepoints,
            changepoint_range: params.changepoint_range,
            changepoint_prior_scale: params.changepoint_prior_scale,
            seasonality_prior_scale: 10.0,
            trend_prior_scale: params.trend_prior_scale,
            interval_width: params.interval_width,
            uncertainty_samples: params.uncertainty_samples,
            seed: params.seed,
        }
    }
}

impl ForecastConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ForecastError::io(path, e))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| ForecastError::invalid("config", format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Seasonal components switched on, in regression column order.
    pub fn seasonalities(&self) -> Vec<SeasonalitySpec> {
        let scale = self.seasonality_prior_scale;
        let mut specs = Vec::new();
        if self.weekly_seasonality {
            specs.push(SeasonalitySpec::weekly(scale));
        }
        if self.yearly_seasonality {
            specs.push(SeasonalitySpec::yearly(scale));
        }
        if self.daily_seasonality {
            specs.push(SeasonalitySpec::daily(scale));
        }
        specs
    }

    pub fn model_params(&self) -> ModelParams {
        ModelParams {
            n_changepoints: self.n_changepoints,
            changepoint_range: self.changepoint_range,
            changepoint_prior_scale: self.changepoint_prior_scale,
            trend_prior_scale: self.trend_prior_scale,
            seasonalities: self.seasonalities(),
            interval_width: self.interval_width,
            uncertainty_samples: self.uncertainty_samples,
            seed: self.seed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::invalid("horizon", "must be at least 1"));
        }
        self.model_params().validate()
    }

    /// An unfitted model with these settings.
    pub fn build_model(&self) -> Result<AdditiveModel> {
        self.validate()?;
        Ok(AdditiveModel::new(self.model_params()))
    }
}

/// Builder for ForecastConfig.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    config: ForecastConfig,
}

impl ForecastConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.config.frequency = frequency;
        self
    }

    pub fn weekly_seasonality(mut self, enabled: bool) -> Self {
        self.config.weekly_seasonality = enabled;
        self
    }

    pub fn yearly_seasonality(mut self, enabled: bool) -> Self {
        self.config.yearly_seasonality = enabled;
        self
    }

    pub fn daily_seasonality(mut self, enabled: bool) -> Self {
        self.config.daily_seasonality = enabled;
        self
    }

    pub fn n_changepoints(mut self, n: usize) -> Self {
        self.config.n_changepoints = n;
        self
    }

    pub fn changepoint_prior_scale(mut self, scale: f64) -> Self {
        self.config.changepoint_prior_scale = scale;
        self
    }

    pub fn seasonality_prior_scale(mut self, scale: f64) -> Self {
        self.config.seasonality_prior_scale = scale;
        self
    }

    pub fn interval_width(mut self, width: f64) -> Self {
        self.config.interval_width = width;
        self
    }

    pub fn uncertainty_samples(mut self, samples: usize) -> Self {
        self.config.uncertainty_samples = samples;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
