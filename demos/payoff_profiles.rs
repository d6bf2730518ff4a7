//! Strategy payoff profiles: single-leg positions and multi-leg spreads.

use vanillic::strategies::{
    multi_leg_payoff, single_leg_payoff, single_leg_payoff_by_name, MultiLegStrategy,
    SingleLegStrategy, StrikeLadder,
};

fn main() {
    let spot = 100.0;
    let rate = 0.05;
    let vol = 0.20;
    let expiry = 1.0;

    // 1. Long call at the money
    let long_call =
        single_leg_payoff(SingleLegStrategy::LongCall, spot, 100.0, rate, vol, expiry).unwrap();
    println!("{}", long_call.description);
    println!(
        "  S = {:6.2} -> PnL = {:8.4}",
        long_call.prices[0], long_call.payoffs[0]
    );
    println!(
        "  S = {:6.2} -> PnL = {:8.4}",
        long_call.prices[99], long_call.payoffs[99]
    );

    // 2. Iron condor across a four-strike ladder
    let ladder = StrikeLadder::new(95.0, 105.0, 115.0, 85.0);
    let condor =
        multi_leg_payoff(MultiLegStrategy::IronCondor, spot, ladder, rate, vol, expiry).unwrap();
    println!("\n{}", condor.description);
    for i in (0..condor.len()).step_by(20) {
        println!("  S = {:6.2} -> PnL = {:8.4}", condor.prices[i], condor.payoffs[i]);
    }

    // 3. Straddle: loses between the strikes, wins on a large move either way
    let straddle =
        multi_leg_payoff(MultiLegStrategy::Straddle, spot, ladder, rate, vol, expiry).unwrap();
    println!("\n{}", straddle.description);
    println!("  left edge  PnL = {:8.4}", straddle.payoffs[0]);
    println!("  mid        PnL = {:8.4}", straddle.payoffs[50]);
    println!("  right edge PnL = {:8.4}", straddle.payoffs[99]);

    // 4. String dispatch falls back to a sentinel for unknown names
    let missing = single_leg_payoff_by_name("calendar_spread", spot, 100.0, rate, vol, expiry)
        .unwrap();
    println!("\nLookup of \"calendar_spread\": {}", missing.description);
}
