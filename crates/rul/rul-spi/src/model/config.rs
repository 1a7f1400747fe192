//! Domain configuration for RUL prediction
//!
//! The defaults reproduce the reference numeric behaviour: failure at health 20,
//! Weibull shape 2.5, a ±30% confidence band and a 30-day failure horizon.

use crate::error::{Result, RulError};
use serde::{Deserialize, Serialize};

/// Long-horizon estimate returned when degradation is effectively zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateauEstimate {
    pub rul_days: f64,
    pub confidence_low_days: f64,
    pub confidence_high_days: f64,
    pub failure_probability: f64,
}

impl Default for PlateauEstimate {
    fn default() -> Self {
        Self {
            rul_days: 3650.0,
            confidence_low_days: 2000.0,
            confidence_high_days: 5000.0,
            failure_probability: 0.01,
        }
    }
}

/// Fixed prediction used when an asset has too little history to fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPrediction {
    pub rul_days: f64,
    pub confidence_low_days: f64,
    pub confidence_high_days: f64,
    pub degradation_rate: f64,
    pub failure_probability: f64,
}

impl Default for DefaultPrediction {
    fn default() -> Self {
        Self {
            rul_days: 365.0,
            confidence_low_days: 300.0,
            confidence_high_days: 450.0,
            degradation_rate: 0.01,
            failure_probability: 0.05,
        }
    }
}

/// Thresholds and model constants threaded through the prediction pipeline
///
/// Missing fields take their defaults when deserialized, so a partial JSON
/// document only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulConfig {
    /// Health score at or below which an asset is considered failed
    pub failure_threshold: f64,
    /// Health score below which an asset needs attention (informational)
    pub warning_threshold: f64,
    /// Weibull shape parameter (β); values above 1 model wear-out
    pub weibull_shape: f64,
    /// Relative half-width of the RUL confidence band
    pub confidence_multiplier: f64,
    /// Degradation rates below this magnitude count as no degradation
    pub min_degradation_rate: f64,
    /// Horizon, in days, of the reported failure probability
    pub failure_horizon_days: f64,
    /// Estimate used for effectively non-degrading assets
    pub plateau: PlateauEstimate,
    /// Minimum number of samples before the fitted pipeline runs
    pub min_history_len: usize,
    /// Estimate used below `min_history_len`
    pub insufficient_data: DefaultPrediction,
    /// Smoothing factor used for trend classification
    pub trend_alpha: f64,
    /// Last-step smoothed delta separating stable from improving/declining
    pub trend_threshold: f64,
    /// Days projected by the health forecast
    pub forecast_horizon_days: u32,
    /// Failure probability above which an asset counts as at risk
    pub at_risk_probability: f64,
    /// Failure probability below which an asset counts as healthy
    pub healthy_probability: f64,
    /// Fraction of remaining life at which routine maintenance is scheduled
    pub scheduled_maintenance_fraction: f64,
}

impl Default for RulConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 20.0,
            warning_threshold: 40.0,
            weibull_shape: 2.5,
            confidence_multiplier: 0.3,
            min_degradation_rate: 0.001,
            failure_horizon_days: 30.0,
            plateau: PlateauEstimate::default(),
            min_history_len: 3,
            insufficient_data: DefaultPrediction::default(),
            trend_alpha: 0.3,
            trend_threshold: 0.5,
            forecast_horizon_days: 30,
            at_risk_probability: 0.3,
            healthy_probability: 0.1,
            scheduled_maintenance_fraction: 0.7,
        }
    }
}

impl RulConfig {
    /// Check that every field lies in a range the algorithms can work with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.failure_threshold) {
            return Err(RulError::invalid_parameter(
                "failure_threshold",
                "must be between 0 and 100",
            ));
        }
        if !(0.0..=100.0).contains(&self.warning_threshold) {
            return Err(RulError::invalid_parameter(
                "warning_threshold",
                "must be between 0 and 100",
            ));
        }
        if !(self.weibull_shape > 0.0 && self.weibull_shape.is_finite()) {
            return Err(RulError::invalid_parameter(
                "weibull_shape",
                "must be a positive finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence_multiplier) {
            return Err(RulError::invalid_parameter(
                "confidence_multiplier",
                "must be between 0 and 1",
            ));
        }
        if !(self.min_degradation_rate > 0.0) {
            return Err(RulError::invalid_parameter(
                "min_degradation_rate",
                "must be positive",
            ));
        }
        if !(self.failure_horizon_days > 0.0) {
            return Err(RulError::invalid_parameter(
                "failure_horizon_days",
                "must be positive",
            ));
        }
        if self.min_history_len < 2 {
            return Err(RulError::invalid_parameter(
                "min_history_len",
                "must be at least 2",
            ));
        }
        if !(0.0 < self.trend_alpha && self.trend_alpha < 1.0) {
            return Err(RulError::invalid_parameter(
                "trend_alpha",
                "must be between 0 and 1 (exclusive)",
            ));
        }
        if !(self.trend_threshold >= 0.0) {
            return Err(RulError::invalid_parameter(
                "trend_threshold",
                "must be non-negative",
            ));
        }
        if !(0.0 < self.scheduled_maintenance_fraction && self.scheduled_maintenance_fraction <= 1.0)
        {
            return Err(RulError::invalid_parameter(
                "scheduled_maintenance_fraction",
                "must be in (0, 1]",
            ));
        }
        Ok(())
    }
}
