//! Remaining-useful-life estimation
//!
//! Combines current health and a daily degradation rate into a life estimate,
//! a confidence band and a Weibull failure probability, then maps those onto
//! a risk level and a maintenance recommendation.

use crate::reliability::weibull_cdf;
use chrono::{Days, NaiveDate};
use rul_spi::{
    HealthBand, HealthSample, MaintenanceUrgency, MaintenanceWindow, RiskLevel, RulConfig, RulEstimate,
};

/// Estimate remaining useful life
///
/// `degradation_rate` is daily health-point loss; only its magnitude is used.
///
/// - health at or below the failure threshold: `rul = 0`, band `[0, 0]`, probability 1
/// - magnitude zero, NaN or below `min_degradation_rate`: the configured plateau
///   estimate, as is a days-to-failure that overflows to infinity
/// - otherwise `rul = (health - threshold) / |rate|`, band `rul * (1 ∓ multiplier)`
///   and the failure probability is the Weibull CDF at the failure horizon with
///   `η = rul`
///
/// # Example
///
/// ```rust
/// use rul_core::estimator::calculate_rul;
/// use rul_spi::RulConfig;
///
/// let estimate = calculate_rul(80.0, 0.5, &RulConfig::default());
/// assert!((estimate.rul_days - 120.0).abs() < 1e-10);
/// ```
pub fn calculate_rul(current_health: f64, degradation_rate: f64, config: &RulConfig) -> RulEstimate {
    let health = if current_health.is_nan() {
        0.0
    } else {
        current_health.clamp(0.0, 100.0)
    };

    if HealthBand::classify(health, config) == HealthBand::Failed {
        return RulEstimate {
            rul_days: 0.0,
            confidence_low_days: 0.0,
            confidence_high_days: 0.0,
            failure_probability_30d: 1.0,
        };
    }

    let rate = degradation_rate.abs();
    if rate.is_nan() || rate == 0.0 || rate < config.min_degradation_rate {
        return plateau_estimate(config);
    }

    let days_to_failure = (health - config.failure_threshold) / rate;
    if !days_to_failure.is_finite() {
        return plateau_estimate(config);
    }
    let margin = config.confidence_multiplier;

    RulEstimate {
        rul_days: days_to_failure,
        confidence_low_days: (days_to_failure * (1.0 - margin)).max(0.0),
        confidence_high_days: days_to_failure * (1.0 + margin),
        failure_probability_30d: weibull_cdf(
            config.failure_horizon_days,
            days_to_failure,
            config.weibull_shape,
        ),
    }
}

fn plateau_estimate(config: &RulConfig) -> RulEstimate {
    let plateau = &config.plateau;
    RulEstimate {
        rul_days: plateau.rul_days,
        confidence_low_days: plateau.confidence_low_days,
        confidence_high_days: plateau.confidence_high_days,
        failure_probability_30d: plateau.failure_probability,
    }
}

/// Classify risk from remaining life and near-term failure probability
///
/// Checked from most to least severe; the first match wins.
pub fn risk_level(rul_days: f64, failure_probability_30d: f64) -> RiskLevel {
    if failure_probability_30d > 0.5 || rul_days < 30.0 {
        RiskLevel::Critical
    } else if failure_probability_30d > 0.3 || rul_days < 90.0 {
        RiskLevel::High
    } else if failure_probability_30d > 0.1 || rul_days < 180.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Recommend when maintenance should happen, relative to `today`
///
/// Urgent cases map to fixed offsets (0, 7 or 30 days). Otherwise maintenance
/// is scheduled at `scheduled_maintenance_fraction` of the remaining life,
/// rounded to whole days.
pub fn recommend_maintenance_window(
    rul_days: f64,
    failure_probability_30d: f64,
    today: NaiveDate,
    config: &RulConfig,
) -> MaintenanceWindow {
    let (urgency, offset_days) = if failure_probability_30d > 0.5 || rul_days < 14.0 {
        (MaintenanceUrgency::Immediate, 0)
    } else if failure_probability_30d > 0.3 || rul_days < 30.0 {
        (MaintenanceUrgency::WithinWeek, 7)
    } else if failure_probability_30d > 0.1 || rul_days < 90.0 {
        (MaintenanceUrgency::WithinMonth, 30)
    } else {
        let offset = (config.scheduled_maintenance_fraction * rul_days).round();
        // Saturating float-to-int cast; NaN becomes 0
        (MaintenanceUrgency::Scheduled, offset.max(0.0) as u64)
    };

    MaintenanceWindow {
        urgency,
        date: today
            .checked_add_days(Days::new(offset_days))
            .unwrap_or(NaiveDate::MAX),
    }
}

/// Endpoint degradation rate in health points per day
///
/// Sorts by timestamp and divides the first-to-last health drop by the
/// elapsed days. Positive means declining. Returns 0 for fewer than two
/// samples or a span shorter than one day.
pub fn estimate_degradation_rate(samples: &[HealthSample]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| s.timestamp);

    let (first, last) = (&sorted[0], &sorted[sorted.len() - 1]);
    let span_days = (last.timestamp - first.timestamp).num_milliseconds() as f64 / 86_400_000.0;
    if span_days < 1.0 {
        return 0.0;
    }

    (first.health_score - last.health_score) / span_days
}
