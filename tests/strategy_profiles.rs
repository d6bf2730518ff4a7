//! Exercises every strategy variant through the public composer API and
//! checks the shape, labelling, and serialization of the resulting curves.

use serde::de::DeserializeOwned;
use serde::Serialize;
use vanillic::strategies::{
    multi_leg_payoff, multi_leg_payoff_by_name, single_leg_payoff, single_leg_payoff_by_name,
    MultiLegStrategy, PayoffCurve, SingleLegStrategy, StrategyLeg, StrikeLadder, PAYOFF_POINTS,
    STRATEGY_NOT_FOUND,
};

const SPOT: f64 = 100.0;
const RATE: f64 = 0.05;
const VOL: f64 = 0.2;
const EXPIRY: f64 = 1.0;

fn ladder() -> StrikeLadder {
    StrikeLadder::new(95.0, 105.0, 115.0, 85.0)
}

fn assert_well_formed(curve: &PayoffCurve, label: &str) {
    assert_eq!(curve.prices.len(), PAYOFF_POINTS, "{label}: price axis length");
    assert_eq!(curve.payoffs.len(), PAYOFF_POINTS, "{label}: payoff length");
    assert!(
        curve.prices.iter().all(|p| p.is_finite()),
        "{label}: price axis must be finite"
    );
    assert!(
        curve.payoffs.iter().all(|p| p.is_finite()),
        "{label}: payoffs must be finite"
    );
    assert_eq!(
        curve.description,
        format!("{label}: Expected payoff as stock price changes.")
    );
    assert!((curve.prices[0] - (SPOT - 50.0)).abs() < 1e-9);
    assert!((curve.prices[PAYOFF_POINTS - 1] - (SPOT + 50.0)).abs() < 1e-9);
}

#[test]
fn every_single_leg_variant_produces_a_full_curve() {
    for strategy in SingleLegStrategy::ALL {
        let curve = single_leg_payoff(strategy, SPOT, 100.0, RATE, VOL, EXPIRY)
            .unwrap_or_else(|e| panic!("{strategy} failed: {e}"));
        assert_well_formed(&curve, strategy.label());
    }
}

#[test]
fn every_multi_leg_variant_produces_a_full_curve() {
    for strategy in MultiLegStrategy::ALL {
        let curve = multi_leg_payoff(strategy, SPOT, ladder(), RATE, VOL, EXPIRY)
            .unwrap_or_else(|e| panic!("{strategy} failed: {e}"));
        assert_well_formed(&curve, strategy.label());
    }
}

#[test]
fn straddle_curve_is_v_shaped_around_the_strike() {
    let curve = multi_leg_payoff(MultiLegStrategy::Straddle, SPOT, ladder(), RATE, VOL, EXPIRY)
        .expect("straddle should price");

    // Both legs strike at k1 = 95; the curve bottoms out near there and
    // rises toward both edges of the price axis.
    let (min_idx, _) = curve
        .payoffs
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).expect("finite payoffs"))
        .expect("non-empty curve");
    let min_price = curve.prices[min_idx];
    assert!(
        (min_price - 95.0).abs() < 2.0,
        "straddle trough at {min_price}, expected near 95"
    );
    assert!(curve.payoffs[0] > curve.payoffs[min_idx]);
    assert!(curve.payoffs[PAYOFF_POINTS - 1] > curve.payoffs[min_idx]);
}

#[test]
fn unknown_names_return_the_sentinel_curve() {
    let single = single_leg_payoff_by_name("calendar_spread", SPOT, 100.0, RATE, VOL, EXPIRY)
        .expect("unknown names are not an error");
    assert!(single.prices.is_empty());
    assert!(single.payoffs.is_empty());
    assert_eq!(single.description, STRATEGY_NOT_FOUND);

    let multi = multi_leg_payoff_by_name("jade_lizard", SPOT, ladder(), RATE, VOL, EXPIRY)
        .expect("unknown names are not an error");
    assert!(multi.payoffs.is_empty());
    assert_eq!(multi.description, STRATEGY_NOT_FOUND);
}

#[test]
fn by_name_dispatch_matches_typed_dispatch() {
    for strategy in MultiLegStrategy::ALL {
        let typed = multi_leg_payoff(strategy, SPOT, ladder(), RATE, VOL, EXPIRY)
            .expect("typed dispatch should price");
        let named =
            multi_leg_payoff_by_name(strategy.as_str(), SPOT, ladder(), RATE, VOL, EXPIRY)
                .expect("named dispatch should price");
        assert_eq!(typed.payoffs, named.payoffs, "{strategy}: dispatch mismatch");
    }
}

fn round_trip<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_string(value).expect("serialize");
    serde_json::from_str(&json).expect("deserialize")
}

#[test]
fn strategies_and_curves_round_trip_through_json() {
    let json = serde_json::to_string(&MultiLegStrategy::IronCondor).expect("serialize");
    assert_eq!(json, "\"iron_condor\"");
    assert_eq!(round_trip(&MultiLegStrategy::IronCondor), MultiLegStrategy::IronCondor);
    assert_eq!(round_trip(&SingleLegStrategy::CoveredCall), SingleLegStrategy::CoveredCall);

    let leg = StrategyLeg::long(vanillic::core::OptionType::Put, 85.0);
    let leg_back = round_trip(&leg);
    assert_eq!(leg_back.strike, leg.strike);
    assert_eq!(leg_back.option_type, leg.option_type);
    assert_eq!(leg_back.direction, leg.direction);

    let curve = single_leg_payoff(SingleLegStrategy::LongCall, SPOT, 100.0, RATE, VOL, EXPIRY)
        .expect("curve should price");
    let curve_back: PayoffCurve = round_trip(&curve);
    assert_eq!(curve_back.prices, curve.prices);
    assert_eq!(curve_back.payoffs, curve.payoffs);
    assert_eq!(curve_back.description, curve.description);
}

#[test]
fn cash_secured_put_curve_is_flat() {
    let curve =
        single_leg_payoff(SingleLegStrategy::CashSecuredPut, SPOT, 100.0, RATE, VOL, EXPIRY)
            .expect("cash-secured put should price");
    let first = curve.payoffs[0];
    assert!(
        curve.payoffs.iter().all(|p| (p - first).abs() < 1e-12),
        "cash-secured put marks the collected premium at every price point"
    );
    assert!(first < 0.0, "the curve records the negated put premium");
}
