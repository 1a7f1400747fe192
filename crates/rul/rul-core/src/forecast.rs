//! Day-by-day health projection
//!
//! Purely linear extrapolation from the current health at the magnitude of
//! the daily degradation. Uncertainty is carried by the RUL estimate, not by
//! individual forecast points.

use chrono::{Days, NaiveDate};
use rul_spi::ForecastPoint;

/// Project health for `day = 0..=days` starting at `today`
///
/// Each point is `clamp(current_health - day * |daily_degradation|, 0, 100)`
/// rounded to one decimal place.
///
/// Dates are never repeated: the projection stops at [`NaiveDate::MAX`], so a
/// horizon reaching past it yields fewer than `days + 1` points. This differs
/// from maintenance dates, which saturate at `NaiveDate::MAX`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use rul_core::forecast::generate_health_forecast;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let points = generate_health_forecast(50.0, 2.0, 3, today);
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[3].predicted_health, 44.0);
/// ```
pub fn generate_health_forecast(
    current_health: f64,
    daily_degradation: f64,
    days: u32,
    today: NaiveDate,
) -> Vec<ForecastPoint> {
    let rate = daily_degradation.abs();

    (0..=days)
        .map_while(|day| {
            let date = today.checked_add_days(Days::new(u64::from(day)))?;
            let health = (current_health - f64::from(day) * rate).clamp(0.0, 100.0);
            Some(ForecastPoint {
                date,
                predicted_health: round_to_tenth(health),
            })
        })
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
