//! Piecewise-linear trend
//!
//! `g(t) = k t + m + sum_j delta_j (t - s_j)^+` with `t` scaled to `[0, 1]`
//! over the history. Each changepoint `s_j` lets the growth rate shift by
//! `delta_j` from that point on.

/// Changepoint locations, in scaled time, for a history of scaled times `t`.
///
/// Candidates are evenly spaced history points within the first `range`
/// fraction of the history; short histories get fewer of them.
pub fn place_changepoints(t: &[f64], n_changepoints: usize, range: f64) -> Vec<f64> {
    let hist_size = (t.len() as f64 * range).floor() as usize;
    let n = n_changepoints.min(hist_size.saturating_sub(1));
    if n == 0 {
        return Vec::new();
    }

    let last = (hist_size - 1) as f64;
    (1..=n)
        .map(|i| {
            let index = (last * i as f64 / n as f64).round() as usize;
            t[index]
        })
        .collect()
}

/// Regression columns of the trend: `[1, t, (t - s_1)^+, ...]`.
pub fn trend_features(t: f64, changepoints: &[f64]) -> Vec<f64> {
    let mut features = Vec::with_capacity(2 + changepoints.len());
    features.push(1.0);
    features.push(t);
    features.extend(changepoints.iter().map(|&s| (t - s).max(0.0)));
    features
}

/// Extra trend from changepoints that were not part of the fit.
pub fn trend_shift(t: f64, changepoints: &[f64], deltas: &[f64]) -> f64 {
    changepoints
        .iter()
        .zip(deltas)
        .map(|(&s, &delta)| delta * (t - s).max(0.0))
        .sum()
}
