//! Vanillic is a Black-Scholes analytics library for European vanilla options:
//! closed-form pricing, analytic Greeks, strategy payoff profiles, and
//! parameter sweep grids for visualization backends.
//!
//! The crate pairs a small set of numerical kernels with higher-level product
//! APIs: a trait-based pricing engine over typed instruments and markets, a
//! payoff composer for named single- and multi-leg strategies, and sweep and
//! series evaluators that drive heatmaps and per-day chart overlays.
//!
//! References used across modules include:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), notably Ch. 13 and 19.
//! - Abramowitz and Stegun, formula 7.1.26, for the normal CDF approximation.
//!
//! Numerical considerations:
//! - Pricing kernels are total: zero expiry collapses to intrinsic value and
//!   zero volatility to the discounted-forward intrinsic, so sweeps that
//!   include degenerate corners stay defined.
//! - Greeks are reported in display units (per-day theta, per-percentage-point
//!   vega and rho); the raw annualized kernels stay available alongside.
//!
//! When to use this crate vs alternatives:
//! - Use `vanillic` when you want one Rust-native library spanning vanilla
//!   pricing, sensitivities, strategy payoffs, and sweep grids with reusable
//!   components.
//! - Use a broader quant library when you need exotics, stochastic-vol
//!   models, or rates/credit infrastructure beyond flat-parameter
//!   Black-Scholes.
//!
//! # Feature Flags
//! - `parallel`: enables Rayon-powered parallel grid sweeps.
//!
//! # Quick Start
//! Price a Black-Scholes call:
//! ```rust
//! use vanillic::core::OptionType;
//! use vanillic::engines::analytic::black_scholes::bs_price;
//!
//! let px = bs_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
//! assert!(px > 10.0 && px < 11.0);
//! ```
//!
//! Compute Greeks:
//! ```rust
//! use vanillic::core::OptionType;
//! use vanillic::greeks::black_scholes_greeks;
//!
//! let g = black_scholes_greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
//! assert!(g.delta > 0.0 && g.gamma > 0.0 && g.vega > 0.0);
//! ```
//!
//! Build a payoff profile:
//! ```rust
//! use vanillic::strategies::{multi_leg_payoff, MultiLegStrategy, StrikeLadder};
//!
//! let ladder = StrikeLadder::new(100.0, 110.0, 0.0, 0.0);
//! let curve = multi_leg_payoff(MultiLegStrategy::BullCallSpread, 100.0, ladder, 0.05, 0.2, 1.0)
//!     .unwrap();
//! assert_eq!(curve.len(), 100);
//! ```
//!
//! Sweep a heatmap grid:
//! ```rust
//! use vanillic::core::OptionType;
//! use vanillic::risk::default_value_grid;
//!
//! let grid = default_value_grid(OptionType::Call, 100.0, 0.05, 1.0).unwrap();
//! assert_eq!(grid.shape(), (20, 20));
//! ```
//!
//! Value an option over a date-indexed close history:
//! ```rust
//! use chrono::NaiveDate;
//! use vanillic::core::OptionType;
//! use vanillic::risk::{option_series, synthetic_close_series};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let closes = synthetic_close_series(start, 10, 100.0, 0.05, 0.2, 7).unwrap();
//! let rows = option_series(&closes, OptionType::Call, 100.0, 0.05, 0.2, 1.0).unwrap();
//! assert_eq!(rows.len(), 10);
//! ```

pub mod core;
pub mod engines;
pub mod greeks;
pub mod instruments;
pub mod market;
pub mod math;
pub mod risk;
pub mod strategies;

/// Common imports for ergonomic usage.
#[allow(ambiguous_glob_reexports)]
pub mod prelude {
    pub use crate::core::*;
    pub use crate::engines::analytic::*;
    pub use crate::instruments::*;
    pub use crate::market::*;
    pub use crate::risk::*;
    pub use crate::strategies::*;
}
