//! Exponential smoothing for health-score series
//!
//! - **Single (SES)**: `S_t = α * Y_t + (1 - α) * S_{t-1}`
//! - **Double (Holt's)**: tracks a level and a trend component
//! - **Grid search**: picks `(α, β)` minimizing one-step-ahead MSE
//!
//! Unlike fitted predictors these functions accept any series length; short
//! inputs degrade to a zero trend instead of failing.

use rul_spi::{Result, RulError, SmoothingParameters, SmoothingResult};

/// Level factors searched by [`optimize_parameters`]: 0.1, 0.2, ..., 0.9
const ALPHA_GRID: std::ops::RangeInclusive<u32> = 1..=9;
/// Trend factors searched by [`optimize_parameters`]: 0.1, 0.2, ..., 0.5
const BETA_GRID: std::ops::RangeInclusive<u32> = 1..=5;

fn check_factor(name: &str, value: f64) -> Result<()> {
    if !(0.0 < value && value < 1.0) {
        return Err(RulError::invalid_parameter(
            name,
            "must be between 0 and 1 (exclusive)",
        ));
    }
    Ok(())
}

/// Simple exponential smoothing
///
/// `smoothed[0] = data[0]`; each later value blends the observation with the
/// previous smoothed value. The final smoothed value is reported as `level`.
///
/// # Example
///
/// ```rust
/// use rul_core::smoothing::exponential_smoothing;
///
/// let result = exponential_smoothing(&[90.0, 80.0, 85.0], 0.5).unwrap();
/// assert_eq!(result.smoothed_series, vec![90.0, 85.0, 85.0]);
/// ```
pub fn exponential_smoothing(data: &[f64], alpha: f64) -> Result<SmoothingResult> {
    check_factor("alpha", alpha)?;
    Ok(smooth_single(data, alpha))
}

pub(crate) fn smooth_single(data: &[f64], alpha: f64) -> SmoothingResult {
    let mut smoothed_series = Vec::with_capacity(data.len());
    if let Some(&first) = data.first() {
        smoothed_series.push(first);
        let mut level = first;
        for &value in &data[1..] {
            level = alpha * value + (1.0 - alpha) * level;
            smoothed_series.push(level);
        }
    }

    SmoothingResult {
        level: smoothed_series.last().copied().unwrap_or(0.0),
        trend: 0.0,
        smoothed_series,
    }
}

/// Double exponential smoothing (Holt's linear trend method)
///
/// Initializes `level = data[0]`, `trend = data[1] - data[0]`, then for each
/// later observation:
///
/// ```text
/// level' = α * y + (1 - α) * (level + trend)
/// trend' = β * (level' - level) + (1 - β) * trend
/// ```
///
/// and records `level' + trend'`. With fewer than two points the trend is 0
/// and the level is the single value (or 0 for empty input).
pub fn double_exponential_smoothing(data: &[f64], alpha: f64, beta: f64) -> Result<SmoothingResult> {
    check_factor("alpha", alpha)?;
    check_factor("beta", beta)?;
    Ok(smooth_double(data, alpha, beta))
}

fn smooth_double(data: &[f64], alpha: f64, beta: f64) -> SmoothingResult {
    match data {
        [] => SmoothingResult {
            smoothed_series: Vec::new(),
            level: 0.0,
            trend: 0.0,
        },
        [only] => SmoothingResult {
            smoothed_series: vec![*only],
            level: *only,
            trend: 0.0,
        },
        [first, second, ..] => {
            let mut level = *first;
            let mut trend = second - first;
            let mut smoothed_series = Vec::with_capacity(data.len());
            smoothed_series.push(*first);

            for &value in &data[1..] {
                let prev_level = level;
                level = alpha * value + (1.0 - alpha) * (level + trend);
                trend = beta * (level - prev_level) + (1.0 - beta) * trend;
                smoothed_series.push(level + trend);
            }

            SmoothingResult {
                smoothed_series,
                level,
                trend,
            }
        }
    }
}

/// Project `periods` steps ahead from a final level and trend
///
/// Step `k` (1-based) is `level + k * trend`.
pub fn forecast_exponential(level: f64, trend: f64, periods: usize) -> Vec<f64> {
    (1..=periods).map(|k| level + k as f64 * trend).collect()
}

/// Grid search over `α ∈ {0.1..0.9}` and `β ∈ {0.1..0.5}`
///
/// Scores each pair by the mean squared one-step-ahead error of the
/// double-smoothed series (`data[i]` against `smoothed[i-1]`). The first pair
/// reaching the minimum wins, so results are reproducible. This is an opt-in
/// calibration tool; the prediction pipeline does not call it.
pub fn optimize_parameters(data: &[f64]) -> SmoothingParameters {
    let mut best = SmoothingParameters {
        alpha: 0.1,
        beta: 0.1,
        mse: f64::INFINITY,
    };

    for a in ALPHA_GRID {
        for b in BETA_GRID {
            let alpha = a as f64 / 10.0;
            let beta = b as f64 / 10.0;
            let mse = one_step_mse(data, &smooth_double(data, alpha, beta).smoothed_series);
            if mse < best.mse {
                best = SmoothingParameters { alpha, beta, mse };
            }
        }
    }

    best
}

fn one_step_mse(data: &[f64], smoothed: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let sse: f64 = data[1..]
        .iter()
        .zip(smoothed.iter())
        .map(|(&actual, &forecast)| (actual - forecast).powi(2))
        .sum();
    sse / (data.len() - 1) as f64
}
