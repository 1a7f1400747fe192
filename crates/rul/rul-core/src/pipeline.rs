//! Single-asset RUL pipeline
//!
//! Composes the building blocks for one asset:
//!
//! 1. sort the history by timestamp
//! 2. fit a line to the health scores; `|slope|` is the degradation rate
//! 3. single-smooth the scores and classify the last-step direction
//! 4. estimate RUL from the latest score and the rate
//! 5. project a day-by-day health forecast
//!
//! Histories shorter than `min_history_len` skip the math and receive the
//! configured insufficient-data prediction.

use crate::clock::SystemClock;
use crate::estimator::{calculate_rul, recommend_maintenance_window, risk_level};
use crate::forecast::generate_health_forecast;
use crate::regression::linear_regression;
use crate::smoothing::smooth_single;
use chrono::{DateTime, Utc};
use rul_spi::{
    AssetHistory, Clock, EstimateBasis, FleetPrediction, HealthSample, HealthSeries, HealthTrend,
    PredictionResult, Result, RulConfig, RulPredictor,
};
use std::fmt;
use std::sync::Arc;

/// RUL prediction engine
///
/// Holds a validated [`RulConfig`] and the clock it reads once per call.
/// The engine is immutable and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use rul_core::RulEngine;
/// use rul_spi::HealthSample;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let history: Vec<HealthSample> = (0..10)
///     .map(|d| HealthSample::new(start + Duration::days(d), 90.0 - d as f64))
///     .collect();
///
/// let engine = RulEngine::default();
/// let prediction = engine.predict_asset_rul("pump-1", &history);
/// assert!((prediction.degradation_rate - 1.0).abs() < 1e-10);
/// ```
#[derive(Clone)]
pub struct RulEngine {
    config: RulConfig,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for RulEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for RulEngine {
    fn default() -> Self {
        Self {
            config: RulConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl RulEngine {
    /// Create an engine reading the system clock
    pub fn new(config: RulConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock, e.g. with a [`FixedClock`](crate::clock::FixedClock)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &RulConfig {
        &self.config
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Predict remaining useful life for one asset
    pub fn predict_asset_rul(&self, asset_id: &str, history: &[HealthSample]) -> PredictionResult {
        self.predict_at(asset_id, history, self.now())
    }

    pub(crate) fn predict_at(
        &self,
        asset_id: &str,
        history: &[HealthSample],
        now: DateTime<Utc>,
    ) -> PredictionResult {
        let config = &self.config;

        if history.len() < config.min_history_len {
            tracing::debug!(
                asset_id,
                samples = history.len(),
                required = config.min_history_len,
                "insufficient history, using default prediction"
            );
            return self.insufficient_data(asset_id, now);
        }

        let today = now.date_naive();
        let series = HealthSeries::new(asset_id, history.to_vec());
        let scores = series.scores();

        let fit = linear_regression(&scores);
        let degradation_rate = fit.slope.abs();

        let smoothed = smooth_single(&scores, config.trend_alpha);
        let health_trend = classify_trend(&smoothed.smoothed_series, config.trend_threshold);

        let current_health = series.latest().map_or(0.0, |s| s.health_score);
        let estimate = calculate_rul(current_health, degradation_rate, config);
        let health_forecast = generate_health_forecast(
            current_health,
            degradation_rate,
            config.forecast_horizon_days,
            today,
        );

        tracing::debug!(
            asset_id = series.asset_id(),
            samples = series.len(),
            current_health,
            degradation_rate,
            rul_days = estimate.rul_days,
            failure_probability_30d = estimate.failure_probability_30d,
            "asset prediction complete"
        );

        PredictionResult {
            asset_id: series.asset_id().to_string(),
            predicted_rul_days: estimate.rul_days,
            degradation_rate,
            confidence_low: estimate.confidence_low_days,
            confidence_high: estimate.confidence_high_days,
            failure_probability_30d: estimate.failure_probability_30d,
            health_trend,
            risk_level: risk_level(estimate.rul_days, estimate.failure_probability_30d),
            maintenance: recommend_maintenance_window(
                estimate.rul_days,
                estimate.failure_probability_30d,
                today,
                config,
            ),
            r_squared: fit.r_squared,
            basis: EstimateBasis::Regression,
            predicted_at: now,
            health_forecast,
        }
    }

    fn insufficient_data(&self, asset_id: &str, now: DateTime<Utc>) -> PredictionResult {
        let default = &self.config.insufficient_data;

        PredictionResult {
            asset_id: asset_id.to_string(),
            predicted_rul_days: default.rul_days,
            degradation_rate: default.degradation_rate,
            confidence_low: default.confidence_low_days,
            confidence_high: default.confidence_high_days,
            failure_probability_30d: default.failure_probability,
            health_trend: HealthTrend::Stable,
            risk_level: risk_level(default.rul_days, default.failure_probability),
            maintenance: recommend_maintenance_window(
                default.rul_days,
                default.failure_probability,
                now.date_naive(),
                &self.config,
            ),
            r_squared: 0.0,
            basis: EstimateBasis::InsufficientData,
            predicted_at: now,
            health_forecast: Vec::new(),
        }
    }
}

impl RulPredictor for RulEngine {
    fn predict_asset(&self, asset_id: &str, history: &[HealthSample]) -> PredictionResult {
        self.predict_asset_rul(asset_id, history)
    }

    fn predict_fleet(&self, assets: &[AssetHistory]) -> FleetPrediction {
        self.predict_fleet_rul(assets)
    }
}

/// Classify the direction of the last smoothed step
///
/// A delta above `threshold` is improving, below `-threshold` declining.
/// Fewer than two smoothed points is stable.
pub fn classify_trend(smoothed: &[f64], threshold: f64) -> HealthTrend {
    match smoothed {
        [.., previous, last] => {
            let delta = last - previous;
            if delta > threshold {
                HealthTrend::Improving
            } else if delta < -threshold {
                HealthTrend::Declining
            } else {
                HealthTrend::Stable
            }
        }
        _ => HealthTrend::Stable,
    }
}
