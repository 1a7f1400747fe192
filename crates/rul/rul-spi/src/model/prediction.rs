//! Per-asset predictions and fleet-level aggregation results

use super::estimate::{MaintenanceWindow, RiskLevel};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of the recent health trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTrend {
    Improving,
    Stable,
    Declining,
}

/// What a prediction was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateBasis {
    /// Fitted from the asset's health history
    Regression,
    /// Fixed default; the history was too short to fit. Should be shown
    /// to operators as a low-confidence estimate.
    InsufficientData,
}

/// One day of the projected health trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_health: f64,
}

/// Full RUL prediction for a single asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub asset_id: String,
    pub predicted_rul_days: f64,
    /// Daily health-point loss (absolute value)
    pub degradation_rate: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
    pub failure_probability_30d: f64,
    pub health_trend: HealthTrend,
    pub risk_level: RiskLevel,
    pub maintenance: MaintenanceWindow,
    /// Goodness of the linear degradation fit
    pub r_squared: f64,
    pub basis: EstimateBasis,
    pub predicted_at: DateTime<Utc>,
    pub health_forecast: Vec<ForecastPoint>,
}

/// Asset with the shortest remaining life in a fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorstAsset {
    pub asset_id: String,
    pub rul_days: f64,
}

/// Number of assets per risk level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Critical => self.critical += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Fleet-wide reduction over per-asset predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_assets: usize,
    /// Assets whose 30-day failure probability exceeds the at-risk threshold
    pub at_risk_count: usize,
    /// Assets whose 30-day failure probability is below the healthy threshold
    pub healthy_count: usize,
    /// Mean predicted RUL; `None` for an empty fleet
    pub avg_rul_days: Option<f64>,
    /// First asset with the minimum predicted RUL; `None` for an empty fleet
    pub worst_asset: Option<WorstAsset>,
    pub risk_distribution: RiskDistribution,
    pub insufficient_data_count: usize,
}

/// Predictions for every asset, in input order, plus their summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetPrediction {
    pub predictions: Vec<PredictionResult>,
    pub summary: FleetSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_distribution_record() {
        let mut dist = RiskDistribution::default();
        dist.record(RiskLevel::Low);
        dist.record(RiskLevel::Critical);
        dist.record(RiskLevel::Critical);

        assert_eq!(dist.low, 1);
        assert_eq!(dist.critical, 2);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_trend_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&HealthTrend::Declining).unwrap(),
            "\"declining\""
        );
        assert_eq!(
            serde_json::to_string(&EstimateBasis::InsufficientData).unwrap(),
            "\"insufficient_data\""
        );
    }
}
