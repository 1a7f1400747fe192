//! Contract traits for RUL prediction
//!
//! - [`Clock`]: the only shared resource; read once per prediction call
//! - [`RulPredictor`]: single-asset and fleet entry points

mod clock;
mod predictor;

pub use clock::Clock;
pub use predictor::RulPredictor;
