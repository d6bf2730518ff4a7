//! Module `risk::pnl`.
//!
//! Mark-to-market PnL of a single contract against its recorded purchase
//! price. Positions are one lot; scale externally for size.

use crate::core::OptionType;

/// Signed PnL of holding one contract bought at `purchase_price` and now
/// marked at `current_price`.
///
/// Calls gain when the mark rises above the purchase price. Puts follow the
/// house inverted convention and gain when the mark falls below it, so
/// `mark_to_market(Put, 10.0, 10.45)` is `-0.45`.
#[inline]
pub fn mark_to_market(option_type: OptionType, purchase_price: f64, current_price: f64) -> f64 {
    match option_type {
        OptionType::Call => current_price - purchase_price,
        OptionType::Put => purchase_price - current_price,
    }
}
