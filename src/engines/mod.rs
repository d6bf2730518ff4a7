//! Pricing engine implementations.

pub mod analytic;
