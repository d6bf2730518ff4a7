//! Top-level risk namespace for PnL, sweep, and series analytics.
//!
//! This module wires and re-exports:
//! - `pnl`: mark-to-market PnL against a recorded purchase price,
//! - `sweep`: volatility x spot value grids for heatmap consumers,
//! - `series`: per-day valuation overlays, intrinsic backtests, and the
//!   seeded synthetic close generator.
//!
//! It is intentionally a facade: domain logic lives in submodules, while this
//! file defines the public import surface (`vanillic::risk::*`) for
//! downstream code.

pub mod pnl;
pub mod series;
pub mod sweep;

pub use pnl::mark_to_market;
pub use series::{
    intrinsic_backtest, option_series, synthetic_close_series, BacktestRow, ClosePrice,
    DailyOptionRow,
};
pub use sweep::{
    default_spot_axis, default_value_grid, default_vol_axis, value_grid, GridDefinition, ValueGrid,
};
