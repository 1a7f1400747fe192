//! Model module containing the value objects of the RUL domain
//!
//! Every type here is created fresh per prediction call, owned by the caller
//! and never mutated after construction.

mod config;
mod estimate;
mod health;
mod prediction;
mod regression;
mod smoothing;

pub use config::{DefaultPrediction, PlateauEstimate, RulConfig};
pub use estimate::{MaintenanceUrgency, MaintenanceWindow, RiskLevel, RulEstimate};
pub use health::{AssetHistory, HealthBand, HealthSample, HealthSeries};
pub use prediction::{
    EstimateBasis, FleetPrediction, FleetSummary, ForecastPoint, HealthTrend, PredictionResult,
    RiskDistribution, WorstAsset,
};
pub use regression::{PolynomialFit, RegressionResult};
pub use smoothing::{SmoothingParameters, SmoothingResult};
