//! Canonical plain-vanilla option contract definition used throughout the library.
//!
//! [`VanillaOption`] stores side, strike, and expiry; every contract is
//! European (exercise at expiry only).
//! References: Hull (2018), Ch. 10-13 for payoff conventions.
//! Validation accepts `expiry == 0` (intrinsic-value edge case).

use crate::core::{Instrument, OptionType, PricingError};

/// Vanilla European option contract.
///
/// This is the canonical input for the Black-Scholes engine: strike `K`,
/// expiry `T` in year fractions, and option side.
///
/// # Examples
/// ```
/// use vanillic::core::OptionType;
/// use vanillic::instruments::VanillaOption;
///
/// let option = VanillaOption {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
/// };
/// assert!(option.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VanillaOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level.
    pub strike: f64,
    /// Expiry in years.
    pub expiry: f64,
}

impl VanillaOption {
    /// Builds a European call option.
    ///
    /// `strike` and `expiry` are interpreted in spot units and year fractions.
    ///
    /// # Examples
    /// ```
    /// use vanillic::core::OptionType;
    /// use vanillic::instruments::VanillaOption;
    ///
    /// let call = VanillaOption::european_call(100.0, 1.0);
    /// assert_eq!(call.option_type, OptionType::Call);
    /// ```
    pub fn european_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
        }
    }

    /// Builds a European put option.
    ///
    /// # Examples
    /// ```
    /// use vanillic::core::OptionType;
    /// use vanillic::instruments::VanillaOption;
    ///
    /// let put = VanillaOption::european_put(95.0, 0.5);
    /// assert_eq!(put.option_type, OptionType::Put);
    /// ```
    pub fn european_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when:
    /// - `strike <= 0` or not finite
    /// - `expiry < 0` or not finite
    ///
    /// # Numerical notes
    /// `expiry == 0` is accepted to support immediate-expiry intrinsic-value
    /// pricing.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla strike must be finite and > 0".to_string(),
            ));
        }
        if !self.expiry.is_finite() || self.expiry < 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla expiry must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for VanillaOption {
    fn instrument_type(&self) -> &str {
        "VanillaOption"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_side() {
        let call = VanillaOption::european_call(100.0, 1.0);
        let put = VanillaOption::european_put(100.0, 1.0);
        assert_eq!(call.option_type, OptionType::Call);
        assert_eq!(put.option_type, OptionType::Put);
        assert_eq!(call.instrument_type(), "VanillaOption");
    }

    #[test]
    fn validate_accepts_zero_expiry() {
        assert!(VanillaOption::european_call(100.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert!(VanillaOption::european_call(0.0, 1.0).validate().is_err());
        assert!(VanillaOption::european_call(-5.0, 1.0).validate().is_err());
        assert!(VanillaOption::european_call(100.0, -0.5).validate().is_err());
        assert!(VanillaOption::european_call(f64::NAN, 1.0).validate().is_err());
        assert!(
            VanillaOption::european_put(100.0, f64::INFINITY)
                .validate()
                .is_err()
        );
    }
}
