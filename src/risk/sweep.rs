//! Module `risk::sweep`.
//!
//! Repeated-application wrapper around the analytic pricer: evaluates one
//! contract over a volatility x spot grid for heatmap consumers. Output rows
//! and columns match the input axes position for position, so callers can
//! place cells spatially without re-sorting.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError};
use crate::engines::analytic::black_scholes::bs_price;
use crate::math::{frange, linspace};

/// Default volatility axis: 0.00 to 0.95 in steps of 0.05.
///
/// The zero row is intentional; the pricing kernel degrades to the
/// discounted-forward intrinsic value there.
pub fn default_vol_axis() -> Vec<f64> {
    frange(0.0, 1.0, 0.05)
}

/// Default spot axis: 20 evenly spaced prices from 10 to 150.
pub fn default_spot_axis() -> Vec<f64> {
    linspace(10.0, 150.0, 20)
}

/// Serializable sweep request: the fixed contract terms plus both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDefinition {
    pub option_type: OptionType,
    pub strike: f64,
    pub rate: f64,
    pub expiry: f64,
    #[serde(default = "default_vol_axis")]
    pub vols: Vec<f64>,
    #[serde(default = "default_spot_axis")]
    pub spots: Vec<f64>,
}

impl GridDefinition {
    /// Evaluates the request into a [`ValueGrid`].
    pub fn evaluate(&self) -> Result<ValueGrid, PricingError> {
        value_grid(
            self.option_type,
            self.strike,
            self.rate,
            self.expiry,
            &self.vols,
            &self.spots,
        )
    }
}

/// Volatility x spot surface of option values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueGrid {
    pub vols: Vec<f64>,
    pub spots: Vec<f64>,
    /// Matrix shape: `[vol_index][spot_index]`.
    pub values: Vec<Vec<f64>>,
}

impl ValueGrid {
    /// `(rows, cols)` = `(vols.len(), spots.len())`.
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }
}

fn validate_axes(vols: &[f64], spots: &[f64]) -> Result<(), PricingError> {
    if vols.is_empty() {
        return Err(PricingError::InvalidInput(
            "sweep vol axis must not be empty".to_string(),
        ));
    }
    if spots.is_empty() {
        return Err(PricingError::InvalidInput(
            "sweep spot axis must not be empty".to_string(),
        ));
    }
    if vols.iter().any(|vol| !vol.is_finite() || *vol < 0.0) {
        return Err(PricingError::InvalidInput(
            "sweep vol axis values must be finite and >= 0".to_string(),
        ));
    }
    if spots.iter().any(|spot| !spot.is_finite() || *spot <= 0.0) {
        return Err(PricingError::InvalidInput(
            "sweep spot axis values must be finite and > 0".to_string(),
        ));
    }
    if !vols.windows(2).all(|pair| pair[1] > pair[0]) {
        return Err(PricingError::InvalidInput(
            "sweep vol axis must be strictly ascending".to_string(),
        ));
    }
    if !spots.windows(2).all(|pair| pair[1] > pair[0]) {
        return Err(PricingError::InvalidInput(
            "sweep spot axis must be strictly ascending".to_string(),
        ));
    }
    Ok(())
}

/// Values one contract across `vols` x `spots`.
///
/// Rows are independent; with the `parallel` feature they evaluate on the
/// Rayon pool, preserving row order either way.
pub fn value_grid(
    option_type: OptionType,
    strike: f64,
    rate: f64,
    expiry: f64,
    vols: &[f64],
    spots: &[f64],
) -> Result<ValueGrid, PricingError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::InvalidInput(
            "sweep strike must be finite and > 0".to_string(),
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(
            "sweep rate must be finite".to_string(),
        ));
    }
    if !expiry.is_finite() || expiry < 0.0 {
        return Err(PricingError::InvalidInput(
            "sweep expiry must be finite and >= 0".to_string(),
        ));
    }
    validate_axes(vols, spots)?;

    let row = |vol: f64| -> Vec<f64> {
        spots
            .iter()
            .map(|&spot| bs_price(option_type, spot, strike, rate, vol, expiry))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let values: Vec<Vec<f64>> = vols.par_iter().map(|&vol| row(vol)).collect();

    #[cfg(not(feature = "parallel"))]
    let values: Vec<Vec<f64>> = vols.iter().map(|&vol| row(vol)).collect();

    Ok(ValueGrid {
        vols: vols.to_vec(),
        spots: spots.to_vec(),
        values,
    })
}

/// [`value_grid`] over the default heatmap axes.
pub fn default_value_grid(
    option_type: OptionType,
    strike: f64,
    rate: f64,
    expiry: f64,
) -> Result<ValueGrid, PricingError> {
    value_grid(
        option_type,
        strike,
        rate,
        expiry,
        &default_vol_axis(),
        &default_spot_axis(),
    )
}
