//! Wall-clock source

use chrono::{DateTime, Utc};

/// Source of the current instant
///
/// Predictions read the clock once and derive both `predicted_at` and every
/// forecast date from that single reading.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
