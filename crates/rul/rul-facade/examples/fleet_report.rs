//! Fleet RUL report
//!
//! Builds a small synthetic fleet, predicts every asset and prints a
//! maintenance table.
//!
//! Run with: cargo run -p rul-facade --example fleet_report
//! Set RUST_LOG=rul_core=debug to see per-asset pipeline logs.

use chrono::{Duration, Utc};
use rul_facade::{AssetHistory, HealthSample, RulConfigBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn history(start: f64, daily_loss: f64, days: i64) -> Vec<HealthSample> {
    let now = Utc::now();
    (0..days)
        .map(|d| {
            let wobble = ((d * 7) % 5) as f64 * 0.2 - 0.4;
            HealthSample::new(
                now - Duration::days(days - d),
                start - daily_loss * d as f64 + wobble,
            )
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rul_core=info,fleet_report=info".into()),
        )
        .init();

    let engine = RulConfigBuilder::new()
        .forecast_horizon_days(14)
        .build_engine()?;

    let fleet = vec![
        AssetHistory::new("pump-01", history(97.0, 0.05, 60)),
        AssetHistory::new("pump-02", history(88.0, 0.6, 60)),
        AssetHistory::new("compressor-a", history(64.0, 1.4, 30)),
        AssetHistory::new("fan-07", history(41.0, 0.9, 21)),
        AssetHistory::new("conveyor-3", history(99.0, 0.0, 2)),
    ];

    let report = engine.predict_fleet_rul(&fleet);

    println!(
        "{:<14} {:>9} {:>19} {:>7} {:>9} {:<12} {}",
        "asset", "rul_days", "band", "p30", "risk", "urgency", "due"
    );
    for p in &report.predictions {
        println!(
            "{:<14} {:>9.1} {:>8.1} - {:>8.1} {:>7.3} {:>9} {:<12} {}",
            p.asset_id,
            p.predicted_rul_days,
            p.confidence_low,
            p.confidence_high,
            p.failure_probability_30d,
            p.risk_level.to_string(),
            p.maintenance.urgency.to_string(),
            p.maintenance.date,
        );
    }

    let summary = &report.summary;
    println!();
    println!(
        "{} assets: {} at risk, {} healthy, {} without enough history",
        summary.total_assets,
        summary.at_risk_count,
        summary.healthy_count,
        summary.insufficient_data_count
    );
    if let Some(avg) = summary.avg_rul_days {
        println!("average RUL: {avg:.1} days");
    }
    if let Some(worst) = &summary.worst_asset {
        println!("worst asset: {} ({:.1} days)", worst.asset_id, worst.rul_days);
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
