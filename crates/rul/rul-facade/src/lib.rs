//! RUL Facade
//!
//! High-level API for remaining-useful-life prediction. Re-exports all public
//! types from the RUL stack and offers the two entry points most callers need:
//!
//! - [`predict_asset_rul`]: one asset's health history to a [`PredictionResult`]
//! - [`predict_fleet_rul`]: many assets to predictions plus a [`FleetSummary`]
//!
//! Both use the default configuration and the system clock. Build a
//! [`RulEngine`] directly (or via [`RulConfigBuilder`]) for custom thresholds
//! or a frozen clock.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use rul_facade::{predict_asset_rul, HealthSample, HealthTrend};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let history: Vec<HealthSample> = [92.0, 90.0, 87.0, 85.0, 82.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(d, &s)| HealthSample::new(start + Duration::days(d as i64), s))
//!     .collect();
//!
//! let prediction = predict_asset_rul("compressor-7", &history);
//! assert_eq!(prediction.health_trend, HealthTrend::Declining);
//! assert!(prediction.confidence_low <= prediction.predicted_rul_days);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use rul_api::*;

// Explicit re-exports for documentation
pub use rul_api::prelude;

// Re-export algorithm functions at root
pub use rul_core::{
    calculate_mtbf, calculate_rul, classify_trend, double_exponential_smoothing,
    estimate_degradation_rate, exponential_smoothing, forecast_exponential, gamma_stirling,
    generate_health_forecast, hazard_rate, linear_regression, linear_regression_xy,
    margin_of_error, optimize_parameters, polynomial_regression, polynomial_regression_xy,
    recommend_maintenance_window, risk_level, summarize_fleet, t_value, weibull_cdf,
    weibull_reliability, DEFAULT_POLYNOMIAL_DEGREE,
};

/// Predict remaining useful life for one asset with the default configuration
pub fn predict_asset_rul(asset_id: &str, history: &[HealthSample]) -> PredictionResult {
    RulEngine::default().predict_asset_rul(asset_id, history)
}

/// Predict every asset with the default configuration and summarize the fleet
pub fn predict_fleet_rul(assets: &[AssetHistory]) -> FleetPrediction {
    RulEngine::default().predict_fleet_rul(assets)
}
