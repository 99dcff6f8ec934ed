//! Dense ridge regression.
//!
//! The design matrices here are a few dozen columns wide, so the normal
//! equations with a Cholesky factorisation are plenty.

use forecast_spi::{ForecastError, Result};

/// Relative size below which a Cholesky pivot counts as zero.
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Solve `min ||X b - y||^2 + sum_j penalty_j * b_j^2`.
///
/// `rows` are the rows of `X`; every row must be `penalties.len()` wide.
pub fn solve_ridge(rows: &[Vec<f64>], y: &[f64], penalties: &[f64]) -> Result<Vec<f64>> {
    let p = penalties.len();
    if rows.len() != y.len() {
        return Err(ForecastError::invalid(
            "y",
            format!("{} targets for {} rows", y.len(), rows.len()),
        ));
    }

    let mut gram = vec![vec![0.0; p]; p];
    let mut rhs = vec![0.0; p];
    for (row, &target) in rows.iter().zip(y) {
        if row.len() != p {
            return Err(ForecastError::invalid(
                "rows",
                format!("row has {} columns, expected {}", row.len(), p),
            ));
        }
        for i in 0..p {
            if row[i] == 0.0 {
                continue;
            }
            rhs[i] += row[i] * target;
            for j in 0..=i {
                gram[i][j] += row[i] * row[j];
            }
        }
    }
    for i in 0..p {
        gram[i][i] += penalties[i];
        for j in 0..i {
            gram[j][i] = gram[i][j];
        }
    }

    let lower = cholesky(&gram)?;
    Ok(cholesky_solve(&lower, &rhs))
}

/// Lower-triangular `L` with `L L^T = a`.
pub fn cholesky(a: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let n = a.len();
    let mut l = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let dot: f64 = (0..j).map(|k| l[i][k] * l[j][k]).sum();
            if i == j {
                let d = a[i][i] - dot;
                if !d.is_finite() || d <= PIVOT_TOLERANCE * a[i][i].abs().max(1.0) {
                    return Err(ForecastError::NumericalError(format!(
                        "matrix is not positive definite (pivot {} = {})",
                        i, d
                    )));
                }
                l[i][j] = d.sqrt();
            } else {
                l[i][j] = (a[i][j] - dot) / l[j][j];
            }
        }
    }
    Ok(l)
}

/// Solve `L L^T x = b` given the Cholesky factor.
pub fn cholesky_solve(l: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = b.len();
    let mut z = vec![0.0; n];
    for i in 0..n {
        let dot: f64 = (0..i).map(|k| l[i][k] * z[k]).sum();
        z[i] = (b[i] - dot) / l[i][i];
    }
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let dot: f64 = (i + 1..n).map(|k| l[k][i] * x[k]).sum();
        x[i] = (z[i] - dot) / l[i][i];
    }
    x
}

/// Dot product of two equally long slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
