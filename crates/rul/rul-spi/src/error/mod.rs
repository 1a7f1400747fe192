//! Error types for RUL operations
//!
//! This module provides the [`RulError`] enum and [`Result`] type alias
//! used across the regression, smoothing and estimation layers.

mod rul_error;

pub use rul_error::{Result, RulError};
