//! Module `strategies`.
//!
//! Implements the payoff composer for named single-leg and multi-leg option
//! strategies with concrete routines such as `single_leg_payoff` and
//! `multi_leg_payoff`.
//!
//! References: Hull (11th ed.) for standard strategy construction (spreads,
//! condors, butterflies, straddles, strangles) and payoff identities.
//!
//! Primary API surface: enums `SingleLegStrategy` and `MultiLegStrategy`, free
//! functions `single_leg_payoff`, `multi_leg_payoff`, and their `_by_name`
//! variants for callers holding raw strategy strings.
//!
//! Numerical considerations: leg premiums are priced once at the current spot
//! and treated as sunk cost across the candidate-price sweep; candidate prices
//! below zero are allowed at low spots and evaluate through the intrinsic
//! kernels without special-casing.
//!
//! When to use: use the typed entry points when the strategy is known at
//! compile time; the `_by_name` variants preserve a soft "Strategy not found."
//! sentinel for UI layers that forward unvalidated strings.

pub mod payoff;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError};
use crate::engines::analytic::black_scholes::bs_price;
use crate::math::linspace;

pub use payoff::{legs_expiry_pnl, StrategyLeg};

/// Number of candidate prices in a payoff sweep.
pub const PAYOFF_POINTS: usize = 100;

/// Half-width of the candidate-price window around the current spot.
pub const PAYOFF_HALF_SPAN: f64 = 50.0;

/// Diagnostic message returned when a strategy name is not recognized.
pub const STRATEGY_NOT_FOUND: &str = "Strategy not found.";

/// Strategies built from one option position, plus the three stock-carrying
/// variants whose curves also track the share price itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleLegStrategy {
    LongCall,
    LongPut,
    ShortCall,
    ShortPut,
    CoveredCall,
    ProtectivePut,
    CashSecuredPut,
}

impl SingleLegStrategy {
    pub const ALL: [Self; 7] = [
        Self::LongCall,
        Self::LongPut,
        Self::ShortCall,
        Self::ShortPut,
        Self::CoveredCall,
        Self::ProtectivePut,
        Self::CashSecuredPut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongCall => "long_call",
            Self::LongPut => "long_put",
            Self::ShortCall => "short_call",
            Self::ShortPut => "short_put",
            Self::CoveredCall => "covered_call",
            Self::ProtectivePut => "protective_put",
            Self::CashSecuredPut => "cash_secured_put",
        }
    }

    /// Title-case name used in curve descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::LongCall => "Long Call",
            Self::LongPut => "Long Put",
            Self::ShortCall => "Short Call",
            Self::ShortPut => "Short Put",
            Self::CoveredCall => "Covered Call",
            Self::ProtectivePut => "Protective Put",
            Self::CashSecuredPut => "Cash Secured Put",
        }
    }
}

impl fmt::Display for SingleLegStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SingleLegStrategy {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                PricingError::InvalidInput(format!("unknown single-leg strategy `{s}`"))
            })
    }
}

/// Composite strategies of two to four legs over a strike ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiLegStrategy {
    BullCallSpread,
    BearPutSpread,
    IronCondor,
    IronButterfly,
    ButterflySpread,
    Straddle,
    Strangle,
}

impl MultiLegStrategy {
    pub const ALL: [Self; 7] = [
        Self::BullCallSpread,
        Self::BearPutSpread,
        Self::IronCondor,
        Self::IronButterfly,
        Self::ButterflySpread,
        Self::Straddle,
        Self::Strangle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BullCallSpread => "bull_call_spread",
            Self::BearPutSpread => "bear_put_spread",
            Self::IronCondor => "iron_condor",
            Self::IronButterfly => "iron_butterfly",
            Self::ButterflySpread => "butterfly_spread",
            Self::Straddle => "straddle",
            Self::Strangle => "strangle",
        }
    }

    /// Title-case name used in curve descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::BullCallSpread => "Bull Call Spread",
            Self::BearPutSpread => "Bear Put Spread",
            Self::IronCondor => "Iron Condor",
            Self::IronButterfly => "Iron Butterfly",
            Self::ButterflySpread => "Butterfly Spread",
            Self::Straddle => "Straddle",
            Self::Strangle => "Strangle",
        }
    }

    /// Expands the strategy to its ordered leg set over `ladder`.
    ///
    /// Only the strikes a strategy references appear in the result. The
    /// butterfly carries its body strike twice, one leg per short contract.
    pub fn legs(self, ladder: StrikeLadder) -> Vec<StrategyLeg> {
        let StrikeLadder { k1, k2, k3, k4 } = ladder;
        match self {
            Self::BullCallSpread => vec![
                StrategyLeg::long(OptionType::Call, k1),
                StrategyLeg::short(OptionType::Call, k2),
            ],
            Self::BearPutSpread => vec![
                StrategyLeg::long(OptionType::Put, k1),
                StrategyLeg::short(OptionType::Put, k2),
            ],
            Self::IronCondor => vec![
                StrategyLeg::short(OptionType::Call, k2),
                StrategyLeg::long(OptionType::Call, k3),
                StrategyLeg::short(OptionType::Put, k1),
                StrategyLeg::long(OptionType::Put, k4),
            ],
            Self::IronButterfly => vec![
                StrategyLeg::short(OptionType::Call, k2),
                StrategyLeg::short(OptionType::Put, k2),
                StrategyLeg::long(OptionType::Call, k3),
                StrategyLeg::long(OptionType::Put, k1),
            ],
            Self::ButterflySpread => vec![
                StrategyLeg::long(OptionType::Call, k1),
                StrategyLeg::short(OptionType::Call, k2),
                StrategyLeg::short(OptionType::Call, k2),
                StrategyLeg::long(OptionType::Call, k3),
            ],
            Self::Straddle => vec![
                StrategyLeg::long(OptionType::Call, k1),
                StrategyLeg::long(OptionType::Put, k1),
            ],
            Self::Strangle => vec![
                StrategyLeg::long(OptionType::Call, k2),
                StrategyLeg::long(OptionType::Put, k1),
            ],
        }
    }
}

impl fmt::Display for MultiLegStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiLegStrategy {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| PricingError::InvalidInput(format!("unknown multi-leg strategy `{s}`")))
    }
}

/// Up to four strikes, addressed positionally the way multi-leg strategies
/// reference them. Unused slots are ignored, not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeLadder {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
}

impl StrikeLadder {
    pub fn new(k1: f64, k2: f64, k3: f64, k4: f64) -> Self {
        Self { k1, k2, k3, k4 }
    }
}

/// A swept payoff profile: ascending candidate prices, the strategy's net
/// expiry PnL at each, and a display description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCurve {
    pub prices: Vec<f64>,
    pub payoffs: Vec<f64>,
    pub description: String,
}

impl PayoffCurve {
    /// Empty sentinel curve for unrecognized strategy names.
    pub fn not_found() -> Self {
        Self {
            prices: Vec::new(),
            payoffs: Vec::new(),
            description: STRATEGY_NOT_FOUND.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Candidate-price axis for a payoff sweep: 100 evenly spaced prices over
/// `[spot - 50, spot + 50]`, endpoints included.
pub fn payoff_axis(spot: f64) -> Vec<f64> {
    linspace(spot - PAYOFF_HALF_SPAN, spot + PAYOFF_HALF_SPAN, PAYOFF_POINTS)
}

fn describe(label: &str) -> String {
    format!("{label}: Expected payoff as stock price changes.")
}

fn validate_sweep_inputs(
    spot: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
    strikes: &[f64],
) -> Result<(), PricingError> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(PricingError::InvalidInput(
            "strategy spot must be finite and > 0".to_string(),
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(
            "strategy rate must be finite".to_string(),
        ));
    }
    if !vol.is_finite() || vol <= 0.0 {
        return Err(PricingError::InvalidInput(
            "strategy vol must be finite and > 0".to_string(),
        ));
    }
    if !expiry.is_finite() || expiry < 0.0 {
        return Err(PricingError::InvalidInput(
            "strategy expiry must be finite and >= 0".to_string(),
        ));
    }
    for &strike in strikes {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "strategy strike must be finite and > 0".to_string(),
            ));
        }
    }
    Ok(())
}

/// Payoff curve for a one-position strategy at strike `strike`.
///
/// The option premium is the Black-Scholes value at the current `spot`,
/// locked in before the sweep. Covered-call and protective-put curves track
/// the candidate share price net of that premium; the cash-secured put is a
/// flat premium liability until assignment.
pub fn single_leg_payoff(
    strategy: SingleLegStrategy,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<PayoffCurve, PricingError> {
    validate_sweep_inputs(spot, rate, vol, expiry, &[strike])?;

    let premium = |option_type: OptionType| bs_price(option_type, spot, strike, rate, vol, expiry);
    let prices = payoff_axis(spot);

    let payoffs = match strategy {
        SingleLegStrategy::LongCall => {
            let legs = [StrategyLeg::long(OptionType::Call, strike)];
            legs_expiry_pnl(&prices, &legs, &[premium(OptionType::Call)])
        }
        SingleLegStrategy::LongPut => {
            let legs = [StrategyLeg::long(OptionType::Put, strike)];
            legs_expiry_pnl(&prices, &legs, &[premium(OptionType::Put)])
        }
        SingleLegStrategy::ShortCall => {
            let legs = [StrategyLeg::short(OptionType::Call, strike)];
            legs_expiry_pnl(&prices, &legs, &[premium(OptionType::Call)])
        }
        SingleLegStrategy::ShortPut => {
            let legs = [StrategyLeg::short(OptionType::Put, strike)];
            legs_expiry_pnl(&prices, &legs, &[premium(OptionType::Put)])
        }
        SingleLegStrategy::CoveredCall => {
            let call = premium(OptionType::Call);
            prices.iter().map(|&p| p - call).collect()
        }
        SingleLegStrategy::ProtectivePut => {
            let put = premium(OptionType::Put);
            prices.iter().map(|&p| p - put).collect()
        }
        SingleLegStrategy::CashSecuredPut => {
            let put = premium(OptionType::Put);
            prices.iter().map(|_| -put).collect()
        }
    };

    Ok(PayoffCurve {
        prices,
        payoffs,
        description: describe(strategy.label()),
    })
}

/// Payoff curve for a composite strategy over `ladder`.
///
/// Each leg's premium is the Black-Scholes value at the current `spot`; the
/// curve sums signed intrinsic-minus-premium terms per leg.
pub fn multi_leg_payoff(
    strategy: MultiLegStrategy,
    spot: f64,
    ladder: StrikeLadder,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<PayoffCurve, PricingError> {
    let legs = strategy.legs(ladder);
    let used_strikes: Vec<f64> = legs.iter().map(|leg| leg.strike).collect();
    validate_sweep_inputs(spot, rate, vol, expiry, &used_strikes)?;

    let premiums: Vec<f64> = legs
        .iter()
        .map(|leg| bs_price(leg.option_type, spot, leg.strike, rate, vol, expiry))
        .collect();
    let prices = payoff_axis(spot);
    let payoffs = legs_expiry_pnl(&prices, &legs, &premiums);

    Ok(PayoffCurve {
        prices,
        payoffs,
        description: describe(strategy.label()),
    })
}

/// String-keyed entry point for [`single_leg_payoff`].
///
/// An unrecognized `name` yields the empty [`PayoffCurve::not_found`] sentinel
/// rather than an error; invalid numeric inputs still fail.
pub fn single_leg_payoff_by_name(
    name: &str,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<PayoffCurve, PricingError> {
    match name.parse::<SingleLegStrategy>() {
        Ok(strategy) => single_leg_payoff(strategy, spot, strike, rate, vol, expiry),
        Err(_) => Ok(PayoffCurve::not_found()),
    }
}

/// String-keyed entry point for [`multi_leg_payoff`].
///
/// An unrecognized `name` yields the empty [`PayoffCurve::not_found`] sentinel
/// rather than an error; invalid numeric inputs still fail.
pub fn multi_leg_payoff_by_name(
    name: &str,
    spot: f64,
    ladder: StrikeLadder,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<PayoffCurve, PricingError> {
    match name.parse::<MultiLegStrategy>() {
        Ok(strategy) => multi_leg_payoff(strategy, spot, ladder, rate, vol, expiry),
        Err(_) => Ok(PayoffCurve::not_found()),
    }
}
