//! Fleet-level aggregation
//!
//! Each asset is predicted independently on the rayon pool; results are
//! collected in input order and then reduced into a [`FleetSummary`].

use crate::pipeline::RulEngine;
use rayon::prelude::*;
use rul_spi::{
    AssetHistory, EstimateBasis, FleetPrediction, FleetSummary, PredictionResult,
    RiskDistribution, RulConfig, WorstAsset,
};

impl RulEngine {
    /// Predict every asset and summarize the fleet
    ///
    /// The clock is read once, so every prediction in the batch shares the
    /// same `predicted_at` and forecast dates.
    pub fn predict_fleet_rul(&self, assets: &[AssetHistory]) -> FleetPrediction {
        let now = self.now();

        let predictions: Vec<PredictionResult> = assets
            .par_iter()
            .map(|asset| self.predict_at(&asset.id, &asset.health_history, now))
            .collect();

        let summary = summarize_fleet(&predictions, self.config());

        tracing::info!(
            total_assets = summary.total_assets,
            at_risk = summary.at_risk_count,
            healthy = summary.healthy_count,
            avg_rul_days = ?summary.avg_rul_days,
            worst_asset = ?summary.worst_asset.as_ref().map(|w| w.asset_id.as_str()),
            "fleet prediction complete"
        );

        FleetPrediction {
            predictions,
            summary,
        }
    }
}

/// Reduce per-asset predictions into fleet statistics
///
/// Ties for the worst asset resolve to the earliest prediction in the slice.
pub fn summarize_fleet(predictions: &[PredictionResult], config: &RulConfig) -> FleetSummary {
    let mut at_risk_count = 0;
    let mut healthy_count = 0;
    let mut insufficient_data_count = 0;
    let mut total_rul = 0.0;
    let mut risk_distribution = RiskDistribution::default();
    let mut worst: Option<&PredictionResult> = None;

    for prediction in predictions {
        if prediction.failure_probability_30d > config.at_risk_probability {
            at_risk_count += 1;
        }
        if prediction.failure_probability_30d < config.healthy_probability {
            healthy_count += 1;
        }
        if prediction.basis == EstimateBasis::InsufficientData {
            insufficient_data_count += 1;
        }
        risk_distribution.record(prediction.risk_level);
        total_rul += prediction.predicted_rul_days;

        if worst.map_or(true, |w| prediction.predicted_rul_days < w.predicted_rul_days) {
            worst = Some(prediction);
        }
    }

    FleetSummary {
        total_assets: predictions.len(),
        at_risk_count,
        healthy_count,
        avg_rul_days: (!predictions.is_empty()).then(|| total_rul / predictions.len() as f64),
        worst_asset: worst.map(|w| WorstAsset {
            asset_id: w.asset_id.clone(),
            rul_days: w.predicted_rul_days,
        }),
        risk_distribution,
        insufficient_data_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use rul_spi::{
        HealthSample, HealthTrend, MaintenanceUrgency, MaintenanceWindow, RiskLevel,
    };
    use std::sync::Arc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap()
    }

    fn prediction(id: &str, rul: f64, p30: f64) -> PredictionResult {
        PredictionResult {
            asset_id: id.to_string(),
            predicted_rul_days: rul,
            degradation_rate: 0.5,
            confidence_low: rul * 0.7,
            confidence_high: rul * 1.3,
            failure_probability_30d: p30,
            health_trend: HealthTrend::Stable,
            risk_level: crate::estimator::risk_level(rul, p30),
            maintenance: MaintenanceWindow {
                urgency: MaintenanceUrgency::Scheduled,
                date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            },
            r_squared: 1.0,
            basis: EstimateBasis::Regression,
            predicted_at: now(),
            health_forecast: Vec::new(),
        }
    }

    fn history(scores: &[f64]) -> Vec<HealthSample> {
        scores
            .iter()
            .enumerate()
            .map(|(d, &s)| HealthSample::new(now() - Duration::days(30 - d as i64), s))
            .collect()
    }

    #[test]
    fn test_summary_reduction() {
        let predictions = vec![
            prediction("a", 10.0, 0.9),
            prediction("b", 50.0, 0.2),
            prediction("c", 90.0, 0.05),
        ];
        let summary = summarize_fleet(&predictions, &RulConfig::default());

        assert_eq!(summary.total_assets, 3);
        assert!((summary.avg_rul_days.unwrap() - 50.0).abs() < 1e-10);
        let worst = summary.worst_asset.unwrap();
        assert_eq!(worst.asset_id, "a");
        assert_eq!(worst.rul_days, 10.0);
        assert_eq!(summary.at_risk_count, 1);
        assert_eq!(summary.healthy_count, 1);
        assert_eq!(summary.risk_distribution.critical, 1);
        assert_eq!(summary.risk_distribution.high, 1);
        assert_eq!(summary.risk_distribution.medium, 1);
    }

    #[test]
    fn test_worst_asset_tie_takes_first() {
        let predictions = vec![
            prediction("x", 40.0, 0.2),
            prediction("y", 20.0, 0.2),
            prediction("z", 20.0, 0.2),
        ];
        let summary = summarize_fleet(&predictions, &RulConfig::default());
        assert_eq!(summary.worst_asset.unwrap().asset_id, "y");
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        let predictions = vec![prediction("a", 100.0, 0.3), prediction("b", 100.0, 0.1)];
        let summary = summarize_fleet(&predictions, &RulConfig::default());
        assert_eq!(summary.at_risk_count, 0);
        assert_eq!(summary.healthy_count, 0);
    }

    #[test]
    fn test_empty_fleet() {
        let summary = summarize_fleet(&[], &RulConfig::default());
        assert_eq!(summary.total_assets, 0);
        assert!(summary.avg_rul_days.is_none());
        assert!(summary.worst_asset.is_none());
    }

    #[test]
    fn test_fleet_prediction_keeps_input_order() {
        let engine = RulEngine::default().with_clock(Arc::new(FixedClock::new(now())));
        let assets: Vec<AssetHistory> = (0..20)
            .map(|i| {
                let rate = 0.1 * (i + 1) as f64;
                let scores: Vec<f64> = (0..10).map(|d| 95.0 - rate * d as f64).collect();
                AssetHistory::new(format!("asset-{}", i), history(&scores))
            })
            .collect();

        let fleet = engine.predict_fleet_rul(&assets);

        let ids: Vec<&str> = fleet.predictions.iter().map(|p| p.asset_id.as_str()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("asset-{}", i)).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(fleet.predictions.iter().all(|p| p.predicted_at == now()));
        assert_eq!(fleet.summary.worst_asset.unwrap().asset_id, "asset-19");
    }

    #[test]
    fn test_fleet_matches_single_asset_predictions() {
        let engine = RulEngine::default().with_clock(Arc::new(FixedClock::new(now())));
        let assets = vec![
            AssetHistory::new("pump", history(&[90.0, 85.0, 80.0, 75.0])),
            AssetHistory::new("new-sensor", history(&[99.0])),
        ];

        let fleet = engine.predict_fleet_rul(&assets);

        for (asset, predicted) in assets.iter().zip(fleet.predictions.iter()) {
            assert_eq!(
                &engine.predict_asset_rul(&asset.id, &asset.health_history),
                predicted
            );
        }
        assert_eq!(fleet.summary.insufficient_data_count, 1);
        assert_eq!(fleet.predictions[0].risk_level, RiskLevel::Critical);
    }
}
