//! Remaining-life estimate, risk classification and maintenance recommendation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remaining useful life with its confidence band and near-term failure probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulEstimate {
    pub rul_days: f64,
    pub confidence_low_days: f64,
    pub confidence_high_days: f64,
    /// Probability of failure within the configured horizon (30 days by default)
    pub failure_probability_30d: f64,
}

/// Risk classification of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

/// How soon maintenance should happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceUrgency {
    Immediate,
    WithinWeek,
    WithinMonth,
    Scheduled,
}

impl fmt::Display for MaintenanceUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceUrgency::Immediate => write!(f, "immediate"),
            MaintenanceUrgency::WithinWeek => write!(f, "within_week"),
            MaintenanceUrgency::WithinMonth => write!(f, "within_month"),
            MaintenanceUrgency::Scheduled => write!(f, "scheduled"),
        }
    }
}

/// Recommended maintenance urgency and the calendar date to act by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    pub urgency: MaintenanceUrgency,
    pub date: NaiveDate,
}
