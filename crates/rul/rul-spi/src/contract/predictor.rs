//! Predictor contract for RUL engines

use crate::model::{AssetHistory, FleetPrediction, HealthSample, PredictionResult};

/// Turns health histories into remaining-useful-life predictions
///
/// Implementations are pure with respect to their inputs: the only outside
/// state they may observe is the clock. Degenerate histories never fail;
/// they resolve to conservative default predictions.
///
/// # Example
///
/// ```rust,ignore
/// use rul_spi::{HealthSample, RulPredictor};
///
/// fn remaining_days<P: RulPredictor>(predictor: &P, history: &[HealthSample]) -> f64 {
///     predictor.predict_asset("pump-1", history).predicted_rul_days
/// }
/// ```
pub trait RulPredictor: Send + Sync {
    /// Predict remaining useful life for a single asset
    fn predict_asset(&self, asset_id: &str, history: &[HealthSample]) -> PredictionResult;

    /// Predict every asset independently and summarize the fleet
    fn predict_fleet(&self, assets: &[AssetHistory]) -> FleetPrediction;
}
