//! Module `market::market`.
//!
//! Implements the market snapshot consumed by the pricing engine and the
//! sweep evaluators.
//!
//! References: Hull (11th ed.) for market conventions; rates and volatilities
//! are continuously compounded decimals (0.2 = 20%).
//!
//! Key types and purpose: `Market` and `MarketBuilder` define the validated
//! spot/rate/vol triple every pricing call consumes.
//!
//! Numerical considerations: validation happens once at build; downstream
//! kernels may then assume `spot > 0` and `vol > 0`.

use crate::core::PricingError;

/// Market snapshot used by the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Market {
    /// Spot price.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Flat implied volatility.
    pub vol: f64,
}

impl Market {
    /// Starts a market builder.
    #[inline]
    pub fn builder() -> MarketBuilder {
        MarketBuilder::default()
    }

    /// Returns spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the flat volatility.
    #[inline]
    pub fn vol(&self) -> f64 {
        self.vol
    }
}

/// Builder for [`Market`].
///
/// # Examples
/// ```
/// use vanillic::market::Market;
///
/// let market = Market::builder()
///     .spot(100.0)
///     .rate(0.05)
///     .flat_vol(0.2)
///     .build()
///     .unwrap();
/// assert_eq!(market.spot(), 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarketBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    flat_vol: Option<f64>,
}

impl MarketBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the flat risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the flat volatility.
    #[inline]
    pub fn flat_vol(mut self, vol: f64) -> Self {
        self.flat_vol = Some(vol);
        self
    }

    /// Validates and builds a [`Market`].
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when spot is missing or not a
    /// finite positive number, when vol is missing or not a finite positive
    /// number, or when rate is not finite. Rate defaults to 0.
    pub fn build(self) -> Result<Market, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::InvalidInput("market spot is required".to_string()))?;
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market spot must be finite and > 0".to_string(),
            ));
        }

        let rate = self.rate.unwrap_or(0.0);
        if !rate.is_finite() {
            return Err(PricingError::InvalidInput(
                "market rate must be finite".to_string(),
            ));
        }

        let vol = self
            .flat_vol
            .ok_or_else(|| PricingError::InvalidInput("market flat_vol is required".to_string()))?;
        if !vol.is_finite() || vol <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market flat_vol must be finite and > 0".to_string(),
            ));
        }

        Ok(Market { spot, rate, vol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults_and_fields() {
        let market = Market::builder()
            .spot(100.0)
            .flat_vol(0.2)
            .build()
            .unwrap();
        assert_eq!(market.rate(), 0.0);
        assert_eq!(market.vol(), 0.2);
    }

    #[test]
    fn builder_rejects_missing_spot() {
        let err = Market::builder().flat_vol(0.2).build().unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidInput("market spot is required".to_string())
        );
    }

    #[test]
    fn builder_rejects_non_positive_inputs() {
        assert!(Market::builder().spot(0.0).flat_vol(0.2).build().is_err());
        assert!(Market::builder().spot(-10.0).flat_vol(0.2).build().is_err());
        assert!(Market::builder().spot(100.0).flat_vol(0.0).build().is_err());
        assert!(Market::builder().spot(100.0).flat_vol(-0.2).build().is_err());
    }

    #[test]
    fn builder_rejects_non_finite_inputs() {
        assert!(
            Market::builder()
                .spot(f64::NAN)
                .flat_vol(0.2)
                .build()
                .is_err()
        );
        assert!(
            Market::builder()
                .spot(100.0)
                .rate(f64::INFINITY)
                .flat_vol(0.2)
                .build()
                .is_err()
        );
    }
}
