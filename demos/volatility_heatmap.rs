//! Volatility x spot valuation surface for a European option.

use vanillic::core::OptionType;
use vanillic::risk::{default_value_grid, GridDefinition};

fn main() {
    let strike = 100.0;
    let rate = 0.05;
    let expiry = 1.0;

    // 1. Call value surface over the default axes (20 vols x 20 spots)
    let grid = default_value_grid(OptionType::Call, strike, rate, expiry).unwrap();
    let (rows, cols) = grid.shape();
    println!("Call value grid, K = {strike}, r = {rate}, T = {expiry} ({rows} x {cols})");

    print!("  vol \\ S ");
    for j in (0..cols).step_by(4) {
        print!("{:>9.1}", grid.spots[j]);
    }
    println!();
    for i in (0..rows).step_by(3) {
        print!("  {:7.2} ", grid.vols[i]);
        for j in (0..cols).step_by(4) {
            print!("{:>9.4}", grid.values[i][j]);
        }
        println!();
    }

    // 2. The same request expressed as a serializable definition
    let json = r#"{"option_type":"put","strike":100.0,"rate":0.05,"expiry":1.0}"#;
    let definition: GridDefinition = serde_json::from_str(json).unwrap();
    let put_grid = definition.evaluate().unwrap();
    println!(
        "\nPut grid from JSON request: shape = {:?}, corner value = {:.4}",
        put_grid.shape(),
        put_grid.values[19][0]
    );
}
