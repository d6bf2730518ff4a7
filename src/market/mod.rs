//! Market data container.

pub mod market;

pub use market::{Market, MarketBuilder};
