use crate::core::{DiagKey, Diagnostics, Greeks, OptionType, PricingEngine, PricingError, PricingResult};
use crate::instruments::vanilla::VanillaOption;
use crate::market::Market;
use crate::math::{normal_cdf, normal_pdf};

/// Analytic Black-Scholes engine for European vanilla options.
#[derive(Debug, Clone, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a Black-Scholes engine instance.
    pub fn new() -> Self {
        Self
    }
}

/// Exercise-now value: `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
#[inline]
pub fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

#[inline]
pub fn d1_d2(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Closed-form Black-Scholes value of a European option.
///
/// Total over the degenerate corners: `expiry <= 0` returns intrinsic value
/// and `vol <= 0` returns the discounted-forward intrinsic value, so sweeps
/// that include zero rows stay defined.
#[inline]
pub fn bs_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 {
        return intrinsic(option_type, spot, strike);
    }
    let df_r = (-rate * expiry).exp();
    if vol <= 0.0 {
        return match option_type {
            OptionType::Call => (spot - strike * df_r).max(0.0),
            OptionType::Put => (strike * df_r - spot).max(0.0),
        };
    }

    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    match option_type {
        OptionType::Call => spot * normal_cdf(d1) - strike * df_r * normal_cdf(d2),
        OptionType::Put => strike * df_r * normal_cdf(-d2) - spot * normal_cdf(-d1),
    }
}

#[inline]
pub fn bs_delta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    match option_type {
        OptionType::Call => normal_cdf(d1),
        OptionType::Put => normal_cdf(d1) - 1.0,
    }
}

#[inline]
pub fn bs_gamma(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    normal_pdf(d1) / (spot * vol * expiry.sqrt())
}

/// Raw vega, per unit (1.0 = 100 percentage points) of volatility.
#[inline]
pub fn bs_vega(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    spot * normal_pdf(d1) * expiry.sqrt()
}

/// Raw theta, per year. Calls and puts use distinct term structures.
#[inline]
pub fn bs_theta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let sqrt_t = expiry.sqrt();
    let df_r = (-rate * expiry).exp();
    match option_type {
        OptionType::Call => {
            -spot * normal_pdf(d1) * vol / (2.0 * sqrt_t) - rate * strike * df_r * normal_cdf(d2)
        }
        OptionType::Put => {
            -spot * normal_pdf(d1) * vol / (2.0 * sqrt_t) + rate * strike * df_r * normal_cdf(-d2)
        }
    }
}

/// Raw rho, per unit of rate.
#[inline]
pub fn bs_rho(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (_, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let df_r = (-rate * expiry).exp();
    match option_type {
        OptionType::Call => strike * expiry * df_r * normal_cdf(d2),
        OptionType::Put => -strike * expiry * df_r * normal_cdf(-d2),
    }
}

impl PricingEngine<VanillaOption> for BlackScholesEngine {
    fn price(
        &self,
        instrument: &VanillaOption,
        market: &Market,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;

        if market.vol <= 0.0 {
            return Err(PricingError::InvalidInput(
                "market volatility must be > 0".to_string(),
            ));
        }

        if instrument.expiry <= 0.0 {
            return Ok(PricingResult {
                price: intrinsic(instrument.option_type, market.spot, instrument.strike),
                greeks: Some(Greeks {
                    delta: 0.0,
                    gamma: 0.0,
                    vega: 0.0,
                    theta: 0.0,
                    rho: 0.0,
                }),
                diagnostics: Diagnostics::new(),
            });
        }

        let price = bs_price(
            instrument.option_type,
            market.spot,
            instrument.strike,
            market.rate,
            market.vol,
            instrument.expiry,
        );
        let greeks = crate::greeks::black_scholes_greeks(
            instrument.option_type,
            market.spot,
            instrument.strike,
            market.rate,
            market.vol,
            instrument.expiry,
        );
        let (d1, d2) = d1_d2(
            market.spot,
            instrument.strike,
            market.rate,
            market.vol,
            instrument.expiry,
        );

        let mut diagnostics = Diagnostics::new();
        diagnostics.insert_key(DiagKey::Vol, market.vol);
        diagnostics.insert_key(DiagKey::D1, d1);
        diagnostics.insert_key(DiagKey::D2, d2);
        diagnostics.insert_key(
            DiagKey::DiscountFactor,
            (-market.rate * instrument.expiry).exp(),
        );

        Ok(PricingResult {
            price,
            greeks: Some(greeks),
            diagnostics,
        })
    }
}

/// One-liner convenience wrapper for Black-Scholes pricing.
///
/// # Examples
/// ```
/// use vanillic::core::OptionType;
/// use vanillic::engines::analytic::black_scholes::black_scholes;
///
/// let call = black_scholes(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<f64, PricingError> {
    let instrument = VanillaOption {
        option_type,
        strike,
        expiry,
    };
    let market = Market::builder()
        .spot(spot)
        .rate(rate)
        .flat_vol(vol)
        .build()?;
    let engine = BlackScholesEngine::new();
    Ok(engine.price(&instrument, &market)?.price)
}
