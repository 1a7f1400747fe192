//! RUL Service Provider Interface
//!
//! Defines the error type, value objects, configuration and contract traits
//! shared by every layer of the remaining-useful-life (RUL) prediction stack:
//!
//! - [`RulError`]: Standardized error type for all RUL operations
//! - [`Result`]: Convenient result type alias
//! - [`RulConfig`]: Domain thresholds and model constants
//! - [`Clock`]: Source of the wall-clock instant used per prediction call
//! - [`RulPredictor`]: Single-asset and fleet prediction contract

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Clock, RulPredictor};
pub use error::{Result, RulError};
pub use model::{
    AssetHistory, DefaultPrediction, EstimateBasis, FleetPrediction, FleetSummary, ForecastPoint,
    HealthBand, HealthSample, HealthSeries, HealthTrend, MaintenanceUrgency, MaintenanceWindow,
    PlateauEstimate, PolynomialFit, PredictionResult, RegressionResult, RiskDistribution,
    RiskLevel, RulConfig, RulEstimate, SmoothingParameters, SmoothingResult, WorstAsset,
};
