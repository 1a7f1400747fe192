//! RUL Core Implementations
//!
//! Remaining-useful-life (RUL) prediction from per-asset health-score
//! histories, organized leaf-first:
//!
//! - [`regression`]: Least-squares line and polynomial fits
//! - [`smoothing`]: Single and double (Holt) exponential smoothing, grid-search tuning
//! - [`reliability`]: Weibull CDF, hazard rate and MTBF
//! - [`estimator`]: RUL estimate, risk level, maintenance window, endpoint degradation
//! - [`forecast`]: Day-by-day linear health projection
//! - [`pipeline`]: Single-asset composition ([`RulEngine`])
//! - [`fleet`]: Parallel fleet prediction and summary
//!
//! ## Example
//!
//! ```rust
//! use rul_core::prelude::*;
//!
//! let estimate = calculate_rul(80.0, 0.5, &RulConfig::default());
//! assert!(estimate.confidence_low_days <= estimate.rul_days);
//! assert_eq!(risk_level(estimate.rul_days, estimate.failure_probability_30d), RiskLevel::Medium);
//! ```

pub mod clock;
pub mod estimator;
pub mod fleet;
pub mod forecast;
pub mod pipeline;
pub mod regression;
pub mod reliability;
pub mod smoothing;

// Re-export from SPI
pub use rul_spi::{Clock, Result, RulConfig, RulError, RulPredictor};

// Re-export implementations for convenience
pub use clock::{FixedClock, SystemClock};
pub use estimator::*;
pub use fleet::summarize_fleet;
pub use forecast::generate_health_forecast;
pub use pipeline::{classify_trend, RulEngine};
pub use regression::*;
pub use reliability::*;
pub use smoothing::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::{FixedClock, SystemClock};
    pub use crate::estimator::{
        calculate_rul, estimate_degradation_rate, recommend_maintenance_window, risk_level,
    };
    pub use crate::fleet::summarize_fleet;
    pub use crate::forecast::generate_health_forecast;
    pub use crate::pipeline::{classify_trend, RulEngine};
    pub use crate::regression::{
        linear_regression, linear_regression_xy, margin_of_error, polynomial_regression,
        polynomial_regression_xy, t_value, DEFAULT_POLYNOMIAL_DEGREE,
    };
    pub use crate::reliability::{
        calculate_mtbf, gamma_stirling, hazard_rate, weibull_cdf, weibull_reliability,
    };
    pub use crate::smoothing::{
        double_exponential_smoothing, exponential_smoothing, forecast_exponential,
        optimize_parameters,
    };
    pub use rul_spi::{
        AssetHistory, Clock, EstimateBasis, FleetPrediction, FleetSummary, ForecastPoint,
        HealthBand, HealthSample, HealthSeries, HealthTrend, MaintenanceUrgency,
        MaintenanceWindow, PredictionResult, RegressionResult, Result, RiskLevel, RulConfig,
        RulError, RulEstimate, RulPredictor, SmoothingParameters, SmoothingResult,
    };
}
