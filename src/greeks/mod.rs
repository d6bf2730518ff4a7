//! Greeks and sensitivity analytics.
//!
//! Values are reported in trading-desk display units: theta per calendar day,
//! vega per percentage point of volatility, rho per percentage point of rate.
//! The raw annualized kernels live in [`crate::engines::analytic::black_scholes`].

use crate::core::{Greeks, OptionType};
use crate::engines::analytic::black_scholes::{bs_delta, bs_gamma, bs_rho, bs_theta, bs_vega};

/// Calendar-day divisor for per-day theta.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Divisor mapping a unit sensitivity to a one-percentage-point move.
pub const PER_PERCENTAGE_POINT: f64 = 100.0;

/// Sensitivity of price to a unit move in spot.
pub fn delta(option_type: OptionType, s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_delta(option_type, s, k, r, sigma, t)
}

/// Rate of change of delta with spot. Identical for calls and puts.
pub fn gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_gamma(s, k, r, sigma, t)
}

/// Price change for a one-percentage-point move in volatility.
pub fn vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_vega(s, k, r, sigma, t) / PER_PERCENTAGE_POINT
}

/// Time decay per calendar day.
pub fn theta(option_type: OptionType, s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_theta(option_type, s, k, r, sigma, t) / DAYS_PER_YEAR
}

/// Price change for a one-percentage-point move in the risk-free rate.
pub fn rho(option_type: OptionType, s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_rho(option_type, s, k, r, sigma, t) / PER_PERCENTAGE_POINT
}

/// Full Black-Scholes sensitivity record for one contract, in display units.
///
/// Degenerate inputs (non-positive spot, strike, expiry, or volatility) yield
/// an all-zero record rather than NaN, matching the pricing kernels.
pub fn black_scholes_greeks(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Greeks {
    if s <= 0.0 || k <= 0.0 || t <= 0.0 || sigma <= 0.0 {
        return Greeks {
            delta: 0.0,
            gamma: 0.0,
            vega: 0.0,
            theta: 0.0,
            rho: 0.0,
        };
    }

    Greeks {
        delta: delta(option_type, s, k, r, sigma, t),
        gamma: gamma(s, k, r, sigma, t),
        vega: vega(s, k, r, sigma, t),
        theta: theta(option_type, s, k, r, sigma, t),
        rho: rho(option_type, s, k, r, sigma, t),
    }
}
