//! Exponential smoothing results

use serde::{Deserialize, Serialize};

/// Output of single or double exponential smoothing
///
/// `level` and `trend` describe the final state; `trend` is always 0 for
/// single smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingResult {
    pub smoothed_series: Vec<f64>,
    pub level: f64,
    pub trend: f64,
}

impl SmoothingResult {
    /// Project `periods` steps ahead: step `k` is `level + k * trend`
    pub fn forecast(&self, periods: usize) -> Vec<f64> {
        (1..=periods)
            .map(|k| self.level + k as f64 * self.trend)
            .collect()
    }
}

/// Best smoothing factors found by the grid-search tuner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParameters {
    pub alpha: f64,
    pub beta: f64,
    /// One-step-ahead mean squared error achieved with these factors
    pub mse: f64,
}
