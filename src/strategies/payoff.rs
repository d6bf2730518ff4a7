//! Module `strategies::payoff`.
//!
//! Leg-level expiry payoff arithmetic shared by the strategy composer.
//! A leg's contribution at a candidate price is its intrinsic value minus the
//! premium paid to open it, negated for short positions.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, OptionType};
use crate::engines::analytic::black_scholes::intrinsic;

/// One option position inside a composite strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyLeg {
    pub option_type: OptionType,
    pub direction: Direction,
    pub strike: f64,
}

impl StrategyLeg {
    pub fn long(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            direction: Direction::Long,
            strike,
        }
    }

    pub fn short(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            direction: Direction::Short,
            strike,
        }
    }

    /// Expiry profit of this leg at `price`, given the premium locked in when
    /// the position was opened.
    #[inline]
    pub fn expiry_pnl(&self, price: f64, premium: f64) -> f64 {
        self.direction.sign() * (intrinsic(self.option_type, price, self.strike) - premium)
    }
}

/// Net expiry PnL of a set of legs across a spot axis.
///
/// `premiums[i]` is the unsigned premium of `legs[i]`, priced once at the
/// current spot. Output positions match `spot_axis` positions.
pub fn legs_expiry_pnl(spot_axis: &[f64], legs: &[StrategyLeg], premiums: &[f64]) -> Vec<f64> {
    debug_assert_eq!(legs.len(), premiums.len());
    let mut out = Vec::with_capacity(spot_axis.len());
    for &price in spot_axis {
        let mut pnl = 0.0;
        for (leg, &premium) in legs.iter().zip(premiums) {
            pnl += leg.expiry_pnl(price, premium);
        }
        out.push(pnl);
    }
    out
}
