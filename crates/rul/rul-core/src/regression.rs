//! Least-squares regression over health-score series
//!
//! - [`linear_regression`]: OLS line against the implicit index `x = 0..n-1`
//! - [`linear_regression_xy`]: OLS line against explicit x values
//! - [`polynomial_regression`]: normal equations solved by Gaussian elimination
//! - [`margin_of_error`]: symmetric interval half-width from residual standard error
//!
//! Degenerate input never fails: empty or constant series produce defined
//! results with guarded zero slopes and R² values. Only a singular polynomial
//! system is reported as an error.

use rul_spi::{PolynomialFit, RegressionResult, Result, RulError};

/// Pivots smaller than this fraction of the matrix's infinity norm are treated as zero
const PIVOT_EPSILON: f64 = 1e-12;

/// Degree used when a caller has no reason to pick another
pub const DEFAULT_POLYNOMIAL_DEGREE: usize = 2;

/// Fit `y = slope * x + intercept` with `x = 0, 1, ..., n-1`
///
/// # Example
///
/// ```rust
/// use rul_core::regression::linear_regression;
///
/// let fit = linear_regression(&[10.0, 8.0, 6.0, 4.0, 2.0]);
/// assert!((fit.slope + 2.0).abs() < 1e-10);
/// assert!((fit.intercept - 10.0).abs() < 1e-10);
/// ```
pub fn linear_regression(y: &[f64]) -> RegressionResult {
    let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
    fit_line(&x, y)
}

/// Fit `y = slope * x + intercept` against explicit x values
pub fn linear_regression_xy(x: &[f64], y: &[f64]) -> Result<RegressionResult> {
    if x.len() != y.len() {
        return Err(RulError::DimensionMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(fit_line(x, y))
}

fn fit_line(x: &[f64], y: &[f64]) -> RegressionResult {
    match y.len() {
        0 => RegressionResult {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
            predictions: Vec::new(),
        },
        1 => RegressionResult {
            slope: 0.0,
            intercept: y[0],
            r_squared: 1.0,
            predictions: vec![y[0]],
        },
        len => {
            let n = len as f64;
            let mean_x = x.iter().sum::<f64>() / n;
            let mean_y = y.iter().sum::<f64>() / n;

            let (sxy, sxx) = x
                .iter()
                .zip(y.iter())
                .fold((0.0, 0.0), |(sxy, sxx), (&xi, &yi)| {
                    let dx = xi - mean_x;
                    (sxy + dx * (yi - mean_y), sxx + dx * dx)
                });

            // All x equal: no direction to fit
            let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
            let intercept = mean_y - slope * mean_x;

            let predictions: Vec<f64> = x.iter().map(|&xi| slope * xi + intercept).collect();
            let r_squared = coefficient_of_determination(y, &predictions, mean_y);

            RegressionResult {
                slope,
                intercept,
                r_squared,
                predictions,
            }
        }
    }
}

/// `1 - SSres/SStot`, guarded to 0 when the total variance is 0
fn coefficient_of_determination(y: &[f64], predictions: &[f64], mean_y: f64) -> f64 {
    let ss_tot: f64 = y.iter().map(|&v| (v - mean_y).powi(2)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res = residual_sum_of_squares(y, predictions);
    1.0 - ss_res / ss_tot
}

fn residual_sum_of_squares(y: &[f64], predictions: &[f64]) -> f64 {
    y.iter()
        .zip(predictions.iter())
        .map(|(&a, &p)| (a - p).powi(2))
        .sum()
}

/// Fit a polynomial of the given degree with `x = 0, 1, ..., n-1`
///
/// Builds the `(degree+1) x (degree+1)` normal-equations system
/// `Σ x^(j+k) · c_k = Σ x^j · y` and solves it with Gaussian elimination
/// using partial pivoting.
///
/// # Errors
///
/// [`RulError::NumericalSingularity`] when the system is singular, e.g. when
/// there are no more points than coefficients.
///
/// Pass [`DEFAULT_POLYNOMIAL_DEGREE`] (quadratic) unless the data calls for
/// another degree.
pub fn polynomial_regression(y: &[f64], degree: usize) -> Result<PolynomialFit> {
    let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
    polynomial_regression_xy(&x, y, degree)
}

/// Polynomial fit against explicit x values
pub fn polynomial_regression_xy(x: &[f64], y: &[f64], degree: usize) -> Result<PolynomialFit> {
    if x.len() != y.len() {
        return Err(RulError::DimensionMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let size = degree + 1;

    // Power sums Σ x^p for p = 0..=2*degree
    let mut power_sums = vec![0.0; 2 * degree + 1];
    let mut rhs = vec![0.0; size];
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let mut p = 1.0;
        for (k, sum) in power_sums.iter_mut().enumerate() {
            *sum += p;
            if k < size {
                rhs[k] += p * yi;
            }
            p *= xi;
        }
    }

    let matrix: Vec<Vec<f64>> = (0..size)
        .map(|row| power_sums[row..row + size].to_vec())
        .collect();

    let coefficients = match solve_linear_system(matrix, rhs) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(degree, points = y.len(), "polynomial normal equations are singular");
            return Err(e);
        }
    };

    let predictions: Vec<f64> = x
        .iter()
        .map(|&xi| coefficients.iter().rev().fold(0.0, |acc, &c| acc * xi + c))
        .collect();
    let mean_y = y.iter().sum::<f64>() / y.len() as f64;
    let r_squared = coefficient_of_determination(y, &predictions, mean_y);

    Ok(PolynomialFit {
        coefficients,
        r_squared,
        predictions,
    })
}

/// Solve `A·c = b` by Gaussian elimination with partial pivoting
///
/// Pivots are compared against `PIVOT_EPSILON · ‖A‖∞`, not an absolute floor.
pub(crate) fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let size = b.len();
    let norm = a
        .iter()
        .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max);
    let tolerance = PIVOT_EPSILON * norm;

    for col in 0..size {
        let pivot_row = (col..size)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);

        let pivot = a[pivot_row][col];
        if !pivot.is_finite() || pivot.abs() <= tolerance {
            return Err(RulError::NumericalSingularity { size });
        }

        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..size {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..size {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut solution = vec![0.0; size];
    for row in (0..size).rev() {
        let tail: f64 = ((row + 1)..size).map(|k| a[row][k] * solution[k]).sum();
        solution[row] = (b[row] - tail) / a[row][row];
    }

    if solution.iter().any(|c| !c.is_finite()) {
        return Err(RulError::NumericalSingularity { size });
    }

    Ok(solution)
}

/// Approximate two-sided critical value for a confidence level
///
/// 1.645 / 1.96 / 2.576 for 90% / 95% / 99%; other levels fall back to 95%.
pub fn t_value(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        _ => 1.96,
    }
}

/// Symmetric margin of error around a line fit
///
/// Standard error of the residuals `√(SSres/(n-2))` times [`t_value`].
/// Returns 0 for `n <= 2`, where the residual variance is undefined.
pub fn margin_of_error(y: &[f64], fit: &RegressionResult, confidence_level: f64) -> f64 {
    let n = y.len();
    if n <= 2 {
        return 0.0;
    }
    let ss_res = residual_sum_of_squares(y, &fit.predictions);
    let std_error = (ss_res / (n - 2) as f64).sqrt();
    std_error * t_value(confidence_level)
}
