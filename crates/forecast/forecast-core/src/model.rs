//! Additive trend plus seasonality model
//!
//! `y(t) = g(t) + sum_s s(t) + e` where `g` is a piecewise-linear trend with
//! changepoints and each `s` is a Fourier series. All coefficients are fitted
//! jointly as a MAP estimate under Gaussian priors, which reduces to a ridge
//! regression on the scaled data.
//!
//! Uncertainty is simulated: every sample draws new trend changepoints beyond
//! the history at the rate observed in the history, with Laplace-distributed
//! rate changes, and adds Gaussian observation noise.
//!
//! ## When to Use
//!
//! - Daily business series with weekly and yearly cycles
//! - Irregular sampling (gaps are fine, the model is indexed by date)
//! - Long horizons where a trend with occasional slope changes is plausible

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp, Normal, Poisson};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::confidence::QuantileComputer;
use crate::linalg::{dot, solve_ridge};
use crate::seasonality::{epoch_days, seasonal_features};
use crate::trend::{place_changepoints, trend_features, trend_shift};
use forecast_spi::{
    ConfidenceIntervalComputer, ForecastError, ForecastPoint, Forecaster, Result,
    SeasonalitySpec, TimeSeries,
};

/// Noise scale assumed when turning prior scales into ridge penalties.
const PRIOR_NOISE_SCALE: f64 = 0.1;

/// Floor on the Laplace scale of simulated trend changes.
const MIN_DELTA_SCALE: f64 = 1e-8;

/// Tunable settings of [`AdditiveModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Maximum number of potential trend changepoints
    pub n_changepoints: usize,
    /// Leading fraction of the history in which changepoints are placed
    pub changepoint_range: f64,
    /// Prior scale of the changepoint rate adjustments
    pub changepoint_prior_scale: f64,
    /// Prior scale of the base growth rate and offset
    pub trend_prior_scale: f64,
    /// Seasonal components, in regression column order
    pub seasonalities: Vec<SeasonalitySpec>,
    /// Width of the uncertainty interval (0.8 = 80%)
    pub interval_width: f64,
    /// Number of simulated paths; 0 disables interval estimation
    pub uncertainty_samples: usize,
    /// Seed of the simulation RNG
    pub seed: u64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            n_changepoints: 25,
            changepoint_range: 0.8,
            changepoint_prior_scale: 0.05,
            trend_prior_scale: 5.0,
            seasonalities: vec![SeasonalitySpec::weekly(10.0), SeasonalitySpec::yearly(10.0)],
            interval_width: 0.8,
            uncertainty_samples: 1000,
            seed: 0,
        }
    }
}

impl ModelParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.changepoint_range) {
            return Err(ForecastError::invalid(
                "changepoint_range",
                "must be between 0 and 1",
            ));
        }
        if !(self.changepoint_prior_scale > 0.0) {
            return Err(ForecastError::invalid(
                "changepoint_prior_scale",
                "must be positive",
            ));
        }
        if !(self.trend_prior_scale > 0.0) {
            return Err(ForecastError::invalid("trend_prior_scale", "must be positive"));
        }
        if !(self.interval_width > 0.0 && self.interval_width < 1.0) {
            return Err(ForecastError::invalid(
                "interval_width",
                "must be strictly between 0 and 1",
            ));
        }
        for spec in &self.seasonalities {
            spec.validate()?;
        }
        Ok(())
    }
}

/// Ridge penalty equivalent to a Gaussian prior of the given scale.
fn penalty(prior_scale: f64) -> f64 {
    (PRIOR_NOISE_SCALE / prior_scale).powi(2)
}

/// Everything learned by [`AdditiveModel::fit`].
#[derive(Debug, Clone)]
struct FittedState {
    history: TimeSeries,
    start: NaiveDate,
    /// Days covered by the history; scaled time runs from 0 to 1 over it
    t_scale: f64,
    y_scale: f64,
    changepoints: Vec<f64>,
    /// `[m, k, delta_1..delta_c, seasonal...]`
    coefficients: Vec<f64>,
    /// Residual standard deviation, scaled units
    sigma: f64,
}

impl FittedState {
    fn scaled_time(&self, date: NaiveDate) -> f64 {
        (date - self.start).num_days() as f64 / self.t_scale
    }

    fn trend_width(&self) -> usize {
        2 + self.changepoints.len()
    }

    fn trend_at(&self, t: f64) -> f64 {
        dot(
            &trend_features(t, &self.changepoints),
            &self.coefficients[..self.trend_width()],
        )
    }

    fn seasonal_at(&self, date: NaiveDate, specs: &[SeasonalitySpec]) -> f64 {
        dot(
            &seasonal_features(epoch_days(date), specs),
            &self.coefficients[self.trend_width()..],
        )
    }

    fn deltas(&self) -> &[f64] {
        &self.coefficients[2..self.trend_width()]
    }
}

/// Piecewise-linear trend with Fourier seasonality.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, NaiveDate};
/// use forecast_core::{AdditiveModel, Forecaster, Frequency, TimeSeries};
///
/// let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
/// let series = TimeSeries::from_pairs(
///     (0..60).map(|i| (start + Duration::days(i), 100.0 + i as f64)),
/// )
/// .unwrap();
///
/// let mut model = AdditiveModel::default();
/// model.fit(&series).unwrap();
///
/// let dates = model.make_forecast_dates(12, Frequency::MonthStart).unwrap();
/// let forecast = model.predict(&dates).unwrap();
/// assert_eq!(forecast.len(), 72);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdditiveModel {
    params: ModelParams,
    state: Option<FittedState>,
}

impl AdditiveModel {
    pub fn new(params: ModelParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Changepoint locations in scaled time, once fitted.
    pub fn changepoints(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.changepoints.as_slice())
    }

    /// Residual standard deviation in the units of `y`, once fitted.
    pub fn residual_scale(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.sigma * s.y_scale)
    }

    /// Trend component in the units of `y`.
    pub fn trend(&self, date: NaiveDate) -> Result<f64> {
        let state = self.state.as_ref().ok_or(ForecastError::NotFitted)?;
        Ok(state.trend_at(state.scaled_time(date)) * state.y_scale)
    }

    fn design_row(&self, changepoints: &[f64], t: f64, date: NaiveDate) -> Vec<f64> {
        let mut row = trend_features(t, changepoints);
        row.extend(seasonal_features(epoch_days(date), &self.params.seasonalities));
        row
    }

    fn penalties(&self, n_changepoints: usize) -> Vec<f64> {
        let mut penalties = vec![penalty(self.params.trend_prior_scale); 2];
        penalties.extend(
            std::iter::repeat(penalty(self.params.changepoint_prior_scale)).take(n_changepoints),
        );
        for spec in &self.params.seasonalities {
            penalties.extend(std::iter::repeat(penalty(spec.prior_scale)).take(spec.width()));
        }
        penalties
    }

    /// Simulated paths, laid out as `samples[date][path]`, in scaled units.
    fn simulate(&self, state: &FittedState, t: &[f64], yhat: &[f64]) -> Result<Vec<Vec<f64>>> {
        let n_paths = self.params.uncertainty_samples;
        let mut samples = vec![Vec::with_capacity(n_paths); t.len()];
        if n_paths == 0 {
            return Ok(samples);
        }

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let noise = Normal::new(0.0, state.sigma)
            .map_err(|e| ForecastError::NumericalError(format!("noise distribution: {}", e)))?;

        let t_max = t.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let deltas = state.deltas();
        let delta_scale = if deltas.is_empty() {
            MIN_DELTA_SCALE
        } else {
            deltas.iter().map(|d| d.abs()).sum::<f64>() / deltas.len() as f64 + MIN_DELTA_SCALE
        };
        let magnitude = Exp::new(1.0 / delta_scale).map_err(|e| {
            ForecastError::NumericalError(format!("changepoint distribution: {}", e))
        })?;

        let rate = state.changepoints.len() as f64 * (t_max - 1.0);
        let arrivals = if rate > 0.0 {
            Some(Poisson::new(rate).map_err(|e| {
                ForecastError::NumericalError(format!("changepoint arrivals: {}", e))
            })?)
        } else {
            None
        };

        for _ in 0..n_paths {
            let n_changes = arrivals
                .as_ref()
                .map_or(0, |poisson| poisson.sample(&mut rng) as usize);
            let mut locations = Vec::with_capacity(n_changes);
            let mut changes = Vec::with_capacity(n_changes);
            for _ in 0..n_changes {
                locations.push(1.0 + rng.gen::<f64>() * (t_max - 1.0));
                let size = magnitude.sample(&mut rng);
                changes.push(if rng.gen_bool(0.5) { size } else { -size });
            }

            for (i, slot) in samples.iter_mut().enumerate() {
                let path = yhat[i]
                    + trend_shift(t[i], &locations, &changes)
                    + noise.sample(&mut rng);
                slot.push(path);
            }
        }

        Ok(samples)
    }
}

impl Forecaster for AdditiveModel {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        if series.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: series.len(),
            });
        }
        self.params.validate()?;

        let ds = series.ds();
        let start = ds[0];
        let t_scale = series.span_days() as f64;
        let t: Vec<f64> = ds
            .iter()
            .map(|&d| (d - start).num_days() as f64 / t_scale)
            .collect();

        let y_max = series.y().iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let y_scale = if y_max > 0.0 { y_max } else { 1.0 };
        let y: Vec<f64> = series.y().iter().map(|v| v / y_scale).collect();

        let changepoints = place_changepoints(
            &t,
            self.params.n_changepoints,
            self.params.changepoint_range,
        );
        let rows: Vec<Vec<f64>> = t
            .iter()
            .zip(ds)
            .map(|(&ti, &d)| self.design_row(&changepoints, ti, d))
            .collect();
        let coefficients = solve_ridge(&rows, &y, &self.penalties(changepoints.len()))?;

        let sse: f64 = rows
            .iter()
            .zip(&y)
            .map(|(row, &target)| (target - dot(row, &coefficients)).powi(2))
            .sum();
        let sigma = (sse / y.len() as f64).sqrt();

        debug!(
            changepoints = changepoints.len(),
            columns = coefficients.len(),
            sigma,
            "fitted additive model"
        );
        info!(
            observations = series.len(),
            first = %start,
            last = %ds[ds.len() - 1],
            "model fitted"
        );

        self.state = Some(FittedState {
            history: series.clone(),
            start,
            t_scale,
            y_scale,
            changepoints,
            coefficients,
            sigma,
        });
        Ok(())
    }

    fn predict(&self, dates: &[NaiveDate]) -> Result<Vec<ForecastPoint>> {
        let state = self.state.as_ref().ok_or(ForecastError::NotFitted)?;

        let t: Vec<f64> = dates.iter().map(|&d| state.scaled_time(d)).collect();
        let yhat: Vec<f64> = dates
            .iter()
            .zip(&t)
            .map(|(&d, &ti)| state.trend_at(ti) + state.seasonal_at(d, &self.params.seasonalities))
            .collect();

        let samples = self.simulate(state, &t, &yhat)?;
        let interval = QuantileComputer::new().compute(&yhat, &samples, self.params.interval_width);
        debug!(
            dates = dates.len(),
            samples = self.params.uncertainty_samples,
            "computed prediction intervals"
        );

        Ok(dates
            .iter()
            .enumerate()
            .map(|(i, &ds)| {
                ForecastPoint::new(
                    ds,
                    interval.forecast[i] * state.y_scale,
                    interval.lower[i] * state.y_scale,
                    interval.upper[i] * state.y_scale,
                )
            })
            .collect())
    }

    fn history(&self) -> Option<&TimeSeries> {
        self.state.as_ref().map(|s| &s.history)
    }
}
