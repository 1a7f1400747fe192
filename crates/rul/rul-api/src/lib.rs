//! RUL Consumer API
//!
//! Consumer configuration and builder APIs for RUL prediction.
//!
//! This crate provides:
//! - JSON configuration loading with validation
//! - [`RulConfigBuilder`] for fluent overrides of the domain constants
//! - Re-exports from SPI and core for convenience

use std::path::Path;

// Re-export from core
pub use rul_core::{
    clock, estimator, fleet, forecast, pipeline, regression, reliability, smoothing, FixedClock,
    RulEngine, SystemClock,
};

// Re-export types from SPI
pub use rul_spi::{
    AssetHistory, Clock, DefaultPrediction, EstimateBasis, FleetPrediction, FleetSummary,
    ForecastPoint, HealthBand, HealthSample, HealthSeries, HealthTrend, MaintenanceUrgency,
    MaintenanceWindow, PlateauEstimate, PolynomialFit, PredictionResult, RegressionResult, Result,
    RiskDistribution, RiskLevel, RulConfig, RulError, RulEstimate, RulPredictor,
    SmoothingParameters, SmoothingResult, WorstAsset,
};

/// Parse and validate a JSON configuration document
///
/// Fields that are not present keep their defaults.
///
/// # Example
///
/// ```rust
/// let config = rul_api::load_config_from_str(r#"{"failure_threshold": 25.0}"#).unwrap();
/// assert_eq!(config.failure_threshold, 25.0);
/// assert_eq!(config.weibull_shape, 2.5);
/// ```
pub fn load_config_from_str(json: &str) -> Result<RulConfig> {
    let config: RulConfig =
        serde_json::from_str(json).map_err(|e| RulError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a JSON configuration file
pub fn load_config_from_file(path: impl AsRef<Path>) -> Result<RulConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| RulError::Config(format!("{}: {}", path.display(), e)))?;
    let config = load_config_from_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded RUL configuration");
    Ok(config)
}

/// Fluent builder over [`RulConfig`]
///
/// # Example
///
/// ```rust
/// use rul_api::RulConfigBuilder;
///
/// let config = RulConfigBuilder::new()
///     .failure_threshold(25.0)
///     .weibull_shape(1.8)
///     .build()
///     .unwrap();
/// assert_eq!(config.weibull_shape, 1.8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RulConfigBuilder {
    config: RulConfig,
}

impl RulConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: RulConfig) -> Self {
        Self { config }
    }

    pub fn failure_threshold(mut self, value: f64) -> Self {
        self.config.failure_threshold = value;
        self
    }

    pub fn warning_threshold(mut self, value: f64) -> Self {
        self.config.warning_threshold = value;
        self
    }

    pub fn weibull_shape(mut self, value: f64) -> Self {
        self.config.weibull_shape = value;
        self
    }

    pub fn confidence_multiplier(mut self, value: f64) -> Self {
        self.config.confidence_multiplier = value;
        self
    }

    pub fn min_degradation_rate(mut self, value: f64) -> Self {
        self.config.min_degradation_rate = value;
        self
    }

    pub fn failure_horizon_days(mut self, value: f64) -> Self {
        self.config.failure_horizon_days = value;
        self
    }

    pub fn plateau(mut self, value: PlateauEstimate) -> Self {
        self.config.plateau = value;
        self
    }

    pub fn min_history_len(mut self, value: usize) -> Self {
        self.config.min_history_len = value;
        self
    }

    pub fn insufficient_data(mut self, value: DefaultPrediction) -> Self {
        self.config.insufficient_data = value;
        self
    }

    pub fn trend_alpha(mut self, value: f64) -> Self {
        self.config.trend_alpha = value;
        self
    }

    pub fn trend_threshold(mut self, value: f64) -> Self {
        self.config.trend_threshold = value;
        self
    }

    pub fn forecast_horizon_days(mut self, value: u32) -> Self {
        self.config.forecast_horizon_days = value;
        self
    }

    pub fn at_risk_probability(mut self, value: f64) -> Self {
        self.config.at_risk_probability = value;
        self
    }

    pub fn healthy_probability(mut self, value: f64) -> Self {
        self.config.healthy_probability = value;
        self
    }

    pub fn scheduled_maintenance_fraction(mut self, value: f64) -> Self {
        self.config.scheduled_maintenance_fraction = value;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<RulConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Validate and wrap the configuration in an engine reading the system clock
    pub fn build_engine(self) -> Result<RulEngine> {
        RulEngine::new(self.config)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{load_config_from_file, load_config_from_str, RulConfigBuilder};
    pub use rul_core::prelude::*;
}
