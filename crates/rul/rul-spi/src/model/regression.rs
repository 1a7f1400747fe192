//! Regression fit results

use serde::{Deserialize, Serialize};

/// Ordinary-least-squares line fit `y = slope * x + intercept`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; 0 when the total variance is 0
    pub r_squared: f64,
    /// Fitted values, one per input point
    pub predictions: Vec<f64>,
}

impl RegressionResult {
    /// Fitted value at `x`
    pub fn predict_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Polynomial least-squares fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialFit {
    /// Coefficients in ascending powers of x (`c0 + c1*x + c2*x^2 ...`)
    pub coefficients: Vec<f64>,
    pub r_squared: f64,
    pub predictions: Vec<f64>,
}

impl PolynomialFit {
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate the polynomial at `x` using Horner's scheme
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}
