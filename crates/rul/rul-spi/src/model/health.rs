//! Health samples and per-asset health histories

use super::config::RulConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single health-score observation produced by the health-scoring subsystem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSample {
    /// When the score was computed
    pub timestamp: DateTime<Utc>,
    /// Composite condition score in [0, 100]; lower is worse
    pub health_score: f64,
}

impl HealthSample {
    pub fn new(timestamp: DateTime<Utc>, health_score: f64) -> Self {
        Self {
            timestamp,
            health_score,
        }
    }
}

/// An asset's health history, sorted by timestamp
///
/// Sorting is stable: samples sharing a timestamp keep their input order
/// and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSeries {
    asset_id: String,
    samples: Vec<HealthSample>,
}

impl HealthSeries {
    pub fn new(asset_id: impl Into<String>, mut samples: Vec<HealthSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self {
            asset_id: asset_id.into(),
            samples,
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Health scores in time order
    pub fn scores(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.health_score).collect()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&HealthSample> {
        self.samples.last()
    }

    /// Days between the first and last sample (fractional), 0 for fewer than two samples
    pub fn span_days(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => {
                (last.timestamp - first.timestamp).num_milliseconds() as f64 / 86_400_000.0
            }
            _ => 0.0,
        }
    }
}

/// Caller-supplied input for one asset in a fleet prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHistory {
    pub id: String,
    pub health_history: Vec<HealthSample>,
}

impl AssetHistory {
    pub fn new(id: impl Into<String>, health_history: Vec<HealthSample>) -> Self {
        Self {
            id: id.into(),
            health_history,
        }
    }
}

/// Coarse condition band derived from the configured thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// Above the warning threshold
    Healthy,
    /// Between the failure and warning thresholds
    Warning,
    /// At or below the failure threshold
    Failed,
}

impl HealthBand {
    pub fn classify(health: f64, config: &RulConfig) -> Self {
        if health <= config.failure_threshold {
            HealthBand::Failed
        } else if health < config.warning_threshold {
            HealthBand::Warning
        } else {
            HealthBand::Healthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day)
    }

    #[test]
    fn test_series_sorts_by_timestamp() {
        let series = HealthSeries::new(
            "pump-1",
            vec![
                HealthSample::new(at(2), 80.0),
                HealthSample::new(at(0), 90.0),
                HealthSample::new(at(1), 85.0),
            ],
        );
        assert_eq!(series.asset_id(), "pump-1");
        assert_eq!(series.scores(), vec![90.0, 85.0, 80.0]);
        assert_eq!(series.latest().map(|s| s.health_score), Some(80.0));
    }

    #[test]
    fn test_series_keeps_duplicate_timestamps_in_input_order() {
        let series = HealthSeries::new(
            "pump-1",
            vec![
                HealthSample::new(at(1), 70.0),
                HealthSample::new(at(0), 90.0),
                HealthSample::new(at(1), 60.0),
            ],
        );
        assert_eq!(series.len(), 3);
        assert_eq!(series.scores(), vec![90.0, 70.0, 60.0]);
    }

    #[test]
    fn test_span_days() {
        let series = HealthSeries::new(
            "fan-7",
            vec![HealthSample::new(at(0), 90.0), HealthSample::new(at(10), 80.0)],
        );
        assert!((series.span_days() - 10.0).abs() < 1e-10);

        let empty = HealthSeries::new("fan-8", Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.span_days(), 0.0);
    }

    #[test]
    fn test_health_band_classification() {
        let config = RulConfig::default();
        assert_eq!(HealthBand::classify(95.0, &config), HealthBand::Healthy);
        assert_eq!(HealthBand::classify(40.0, &config), HealthBand::Healthy);
        assert_eq!(HealthBand::classify(39.9, &config), HealthBand::Warning);
        assert_eq!(HealthBand::classify(20.0, &config), HealthBand::Failed);
        assert_eq!(HealthBand::classify(0.0, &config), HealthBand::Failed);
    }
}
