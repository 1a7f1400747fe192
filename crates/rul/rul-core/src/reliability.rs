//! Weibull reliability functions
//!
//! With scale `η` (characteristic life) and shape `β`:
//!
//! ```text
//! F(t) = 1 - exp(-(t/η)^β)          failure probability by time t
//! R(t) = exp(-(t/η)^β)              reliability
//! h(t) = (β/η) * (t/η)^(β-1)        hazard rate
//! MTBF = η * Γ(1 + 1/β)
//! ```
//!
//! `β > 1` models wear-out: the hazard grows with age.

use std::f64::consts::{E, PI};

/// Weibull cumulative distribution function
///
/// Returns 0 for `t <= 0` or `eta <= 0`.
///
/// # Example
///
/// ```rust
/// use rul_core::reliability::weibull_cdf;
///
/// let p = weibull_cdf(100.0, 100.0, 2.5);
/// assert!((p - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
/// ```
pub fn weibull_cdf(t: f64, eta: f64, beta: f64) -> f64 {
    if t <= 0.0 || eta <= 0.0 {
        return 0.0;
    }
    1.0 - (-(t / eta).powf(beta)).exp()
}

/// Weibull reliability (survival) function, `1 - F(t)`
pub fn weibull_reliability(t: f64, eta: f64, beta: f64) -> f64 {
    1.0 - weibull_cdf(t, eta, beta)
}

/// Instantaneous Weibull hazard rate
///
/// Returns 0 for `t <= 0` or `eta <= 0`.
pub fn hazard_rate(t: f64, eta: f64, beta: f64) -> f64 {
    if t <= 0.0 || eta <= 0.0 {
        return 0.0;
    }
    (beta / eta) * (t / eta).powf(beta - 1.0)
}

/// Gamma function via Stirling's formula, `√(2π/z) * (z/e)^z`
///
/// Good to a few percent for `z` in `[1, 2]`, which covers `1 + 1/β` for
/// wear-out shapes. Reporting grade only.
pub fn gamma_stirling(z: f64) -> f64 {
    if z <= 0.0 {
        return f64::NAN;
    }
    (2.0 * PI / z).sqrt() * (z / E).powf(z)
}

/// Mean time between failures, `η * Γ(1 + 1/β)`
pub fn calculate_mtbf(eta: f64, beta: f64) -> f64 {
    if eta <= 0.0 || beta <= 0.0 {
        return 0.0;
    }
    eta * gamma_stirling(1.0 + 1.0 / beta)
}
