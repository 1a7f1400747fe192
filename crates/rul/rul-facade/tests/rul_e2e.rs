//! End-to-end tests for the RUL facade
//!
//! Tests complete prediction workflows using only this crate's API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rul_facade::{
    calculate_rul, double_exponential_smoothing, estimate_degradation_rate, optimize_parameters,
    predict_asset_rul, predict_fleet_rul, AssetHistory, EstimateBasis, FixedClock, HealthSample,
    HealthTrend, MaintenanceUrgency, RulConfig, RulEngine,
};
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 3, 14, 45, 0).unwrap()
}

/// Slow wear with a daily oscillation, sampled every six hours
fn bearing_history(days: i64, wobble: f64) -> Vec<HealthSample> {
    (0..days * 4)
        .map(|i| {
            let t = i as f64 / 4.0;
            let score = 96.0 - 0.35 * t + (t * 1.3).sin() * wobble;
            HealthSample::new(now() - Duration::hours(6 * (days * 4 - i)), score)
        })
        .collect()
}

fn frozen_engine() -> RulEngine {
    RulEngine::default().with_clock(Arc::new(FixedClock::new(now())))
}

#[test]
fn e2e_prediction_is_deterministic_with_frozen_clock() {
    let engine = frozen_engine();
    let history = bearing_history(45, 0.8);

    let first = serde_json::to_string(&engine.predict_asset_rul("bearing-12", &history)).unwrap();
    let second = serde_json::to_string(&engine.predict_asset_rul("bearing-12", &history)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn e2e_insufficient_history_ignores_values() {
    let engine = frozen_engine();
    let t0 = now() - Duration::days(2);
    let histories = [
        vec![],
        vec![HealthSample::new(t0, 3.0)],
        vec![HealthSample::new(t0, 100.0), HealthSample::new(now(), 0.0)],
    ];

    let results: Vec<String> = histories
        .iter()
        .map(|h| serde_json::to_string(&engine.predict_asset_rul("x", h)).unwrap())
        .collect();

    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn e2e_degrading_bearing() {
    let prediction = frozen_engine().predict_asset_rul("bearing-12", &bearing_history(45, 0.8));

    assert_eq!(prediction.basis, EstimateBasis::Regression);
    assert!(prediction.degradation_rate > 0.0);
    assert!(prediction.confidence_low <= prediction.predicted_rul_days);
    assert!(prediction.predicted_rul_days <= prediction.confidence_high);
    assert!((0.0..=1.0).contains(&prediction.failure_probability_30d));
    assert_eq!(prediction.health_forecast.len(), 31);
    assert_eq!(prediction.health_forecast[0].date, now().date_naive());

    // Forecast is monotonically non-increasing
    assert!(prediction
        .health_forecast
        .windows(2)
        .all(|w| w[1].predicted_health <= w[0].predicted_health));
}

#[test]
fn e2e_regression_rate_is_per_sample() {
    // Six-hourly samples: the fitted slope is per sample, not per day
    let history = bearing_history(20, 0.8);
    let prediction = frozen_engine().predict_asset_rul("bearing-3", &history);
    let endpoint = estimate_degradation_rate(&history);

    assert!(endpoint > prediction.degradation_rate);
}

#[test]
fn e2e_fleet_with_mixed_assets() {
    let assets = vec![
        AssetHistory::new("bearing-12", bearing_history(45, 0.8)),
        AssetHistory::new("new-motor", vec![HealthSample::new(now(), 100.0)]),
        AssetHistory::new(
            "tripped-breaker",
            (0..5)
                .map(|d| HealthSample::new(now() - Duration::days(5 - d), 30.0 - 4.0 * d as f64))
                .collect(),
        ),
    ];

    let fleet = predict_fleet_rul(&assets);

    assert_eq!(fleet.predictions.len(), 3);
    assert_eq!(fleet.summary.worst_asset.as_ref().unwrap().asset_id, "tripped-breaker");
    assert_eq!(fleet.summary.worst_asset.as_ref().unwrap().rul_days, 0.0);
    let breaker = &fleet.predictions[2];
    assert_eq!(breaker.maintenance.urgency, MaintenanceUrgency::Immediate);
    assert_eq!(breaker.health_trend, HealthTrend::Declining);
    assert_eq!(fleet.summary.insufficient_data_count, 1);

    let json = serde_json::to_value(&fleet).unwrap();
    assert_eq!(json["summary"]["total_assets"], 3);
    assert_eq!(json["predictions"][1]["basis"], "insufficient_data");
}

#[test]
fn e2e_empty_fleet() {
    let fleet = predict_fleet_rul(&[]);
    assert!(fleet.predictions.is_empty());
    assert!(fleet.summary.avg_rul_days.is_none());
    assert!(fleet.summary.worst_asset.is_none());
}

#[test]
fn e2e_default_entry_point_uses_current_time() {
    let before = Utc::now();
    let prediction = predict_asset_rul("pump", &bearing_history(10, 0.8));
    assert!(prediction.predicted_at >= before);
}

#[test]
fn e2e_calibration_then_projection() {
    let scores: Vec<f64> = bearing_history(30, 0.1).iter().map(|s| s.health_score).collect();

    let params = optimize_parameters(&scores);
    let smoothed = double_exponential_smoothing(&scores, params.alpha, params.beta).unwrap();
    let projection = smoothed.forecast(30);

    assert_eq!(projection.len(), 30);
    assert!(smoothed.trend < 0.0);
    assert!(projection[29] < projection[0]);

    // A projected per-sample trend feeds straight into the estimator
    let estimate = calculate_rul(smoothed.level, -smoothed.trend * 4.0, &RulConfig::default());
    assert!(estimate.rul_days > 0.0);
}
