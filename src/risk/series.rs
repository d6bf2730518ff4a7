//! Module `risk::series`.
//!
//! Date-indexed series built on the analytic pricer: a per-day valuation
//! overlay (option value plus the full Greeks record at each close), an
//! intrinsic-value backtest over a date window, and a seeded lognormal close
//! generator for fixtures and demos. Output rows preserve input day order so
//! charting consumers never re-sort.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::core::{Direction, Greeks, OptionType, PricingError};
use crate::engines::analytic::black_scholes::{bs_price, intrinsic};
use crate::greeks::black_scholes_greeks;

/// Step size of the synthetic generator, one trading day in years.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// One close observation in a date-indexed history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosePrice {
    pub date: NaiveDate,
    pub close: f64,
}

/// Per-day valuation row for a fixed contract marked at that day's close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyOptionRow {
    pub date: NaiveDate,
    pub close: f64,
    pub price: f64,
    pub greeks: Greeks,
}

/// One backtest row: the leg's intrinsic value at that day's close, negated
/// for short positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestRow {
    pub date: NaiveDate,
    pub option_price: f64,
}

fn validate_contract(strike: f64, rate: f64, vol: f64, expiry: f64) -> Result<(), PricingError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::InvalidInput(
            "series strike must be finite and > 0".to_string(),
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(
            "series rate must be finite".to_string(),
        ));
    }
    if !vol.is_finite() || vol <= 0.0 {
        return Err(PricingError::InvalidInput(
            "series vol must be finite and > 0".to_string(),
        ));
    }
    if !expiry.is_finite() || expiry < 0.0 {
        return Err(PricingError::InvalidInput(
            "series expiry must be finite and >= 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_close(point: &ClosePrice) -> Result<(), PricingError> {
    if !point.close.is_finite() || point.close <= 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "series close on {} must be finite and > 0",
            point.date
        )));
    }
    Ok(())
}

/// Values one contract on every day of `closes`, spot taken from the close.
///
/// Row order follows `closes`. An empty history is a
/// [`PricingError::MarketDataMissing`].
pub fn option_series(
    closes: &[ClosePrice],
    option_type: OptionType,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<Vec<DailyOptionRow>, PricingError> {
    if closes.is_empty() {
        return Err(PricingError::MarketDataMissing(
            "close-price history is empty".to_string(),
        ));
    }
    validate_contract(strike, rate, vol, expiry)?;

    let mut rows = Vec::with_capacity(closes.len());
    for point in closes {
        validate_close(point)?;
        rows.push(DailyOptionRow {
            date: point.date,
            close: point.close,
            price: bs_price(option_type, point.close, strike, rate, vol, expiry),
            greeks: black_scholes_greeks(option_type, point.close, strike, rate, vol, expiry),
        });
    }
    Ok(rows)
}

/// Intrinsic-value backtest for one leg over the inclusive `[start, end]`
/// window.
///
/// Days outside the window are skipped; a window matching no days yields an
/// empty result rather than an error.
pub fn intrinsic_backtest(
    closes: &[ClosePrice],
    option_type: OptionType,
    direction: Direction,
    strike: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<BacktestRow>, PricingError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::InvalidInput(
            "series strike must be finite and > 0".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for point in closes {
        if point.date < start || point.date > end {
            continue;
        }
        validate_close(point)?;
        rows.push(BacktestRow {
            date: point.date,
            option_price: direction.sign() * intrinsic(option_type, point.close, strike),
        });
    }
    Ok(rows)
}

fn roll_to_weekday(mut date: NaiveDate) -> NaiveDate {
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date += Duration::days(1);
    }
    date
}

/// Seeded lognormal daily close series.
///
/// Steps one trading day at a time (`dt = 1/252`) and skips weekends in the
/// date column; `start` rolls forward if it lands on one. The first row is
/// `s0` exactly. Deterministic for a given seed.
pub fn synthetic_close_series(
    start: NaiveDate,
    days: usize,
    s0: f64,
    mu: f64,
    sigma: f64,
    seed: u64,
) -> Result<Vec<ClosePrice>, PricingError> {
    if !s0.is_finite() || s0 <= 0.0 {
        return Err(PricingError::InvalidInput(
            "series s0 must be finite and > 0".to_string(),
        ));
    }
    if !mu.is_finite() {
        return Err(PricingError::InvalidInput(
            "series mu must be finite".to_string(),
        ));
    }
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(PricingError::InvalidInput(
            "series sigma must be finite and >= 0".to_string(),
        ));
    }

    let dt = 1.0 / TRADING_DAYS_PER_YEAR;
    let drift = (mu - 0.5 * sigma * sigma) * dt;
    let diffusion = sigma * dt.sqrt();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut date = roll_to_weekday(start);
    let mut close = s0;
    let mut out = Vec::with_capacity(days);

    for _ in 0..days {
        out.push(ClosePrice { date, close });
        let z: f64 = StandardNormal.sample(&mut rng);
        close *= diffusion.mul_add(z, drift).exp();
        date = roll_to_weekday(date + Duration::days(1));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_history() -> Vec<ClosePrice> {
        vec![
            ClosePrice {
                date: date(2024, 1, 2),
                close: 98.0,
            },
            ClosePrice {
                date: date(2024, 1, 3),
                close: 101.5,
            },
            ClosePrice {
                date: date(2024, 1, 4),
                close: 104.0,
            },
        ]
    }

    #[test]
    fn series_marks_each_close_with_price_and_greeks() {
        let rows = option_series(&sample_history(), OptionType::Call, 100.0, 0.05, 0.2, 0.5)
            .unwrap();
        assert_eq!(rows.len(), 3);

        for (row, point) in rows.iter().zip(sample_history()) {
            assert_eq!(row.date, point.date);
            assert_relative_eq!(
                row.price,
                bs_price(OptionType::Call, point.close, 100.0, 0.05, 0.2, 0.5),
                epsilon = 1e-12
            );
            let expected =
                black_scholes_greeks(OptionType::Call, point.close, 100.0, 0.05, 0.2, 0.5);
            assert_relative_eq!(row.greeks.delta, expected.delta, epsilon = 1e-12);
            assert_relative_eq!(row.greeks.theta, expected.theta, epsilon = 1e-12);
        }
    }

    #[test]
    fn series_preserves_input_day_order() {
        let mut history = sample_history();
        history.reverse();
        let rows = option_series(&history, OptionType::Put, 100.0, 0.05, 0.2, 0.5).unwrap();
        let dates: Vec<NaiveDate> = rows.iter().map(|row| row.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 4), date(2024, 1, 3), date(2024, 1, 2)]
        );
    }

    #[test]
    fn empty_history_is_market_data_missing() {
        let err = option_series(&[], OptionType::Call, 100.0, 0.05, 0.2, 0.5).unwrap_err();
        assert!(matches!(err, PricingError::MarketDataMissing(_)));
    }

    #[test]
    fn bad_close_is_invalid_input() {
        let mut history = sample_history();
        history[1].close = -4.0;
        let err = option_series(&history, OptionType::Call, 100.0, 0.05, 0.2, 0.5).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn backtest_filters_inclusively_and_negates_shorts() {
        let history = sample_history();
        let rows = intrinsic_backtest(
            &history,
            OptionType::Call,
            Direction::Short,
            100.0,
            date(2024, 1, 3),
            date(2024, 1, 4),
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date(2024, 1, 3));
        assert_relative_eq!(rows[0].option_price, -1.5, epsilon = 1e-12);
        assert_relative_eq!(rows[1].option_price, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn backtest_with_no_matching_days_is_empty() {
        let rows = intrinsic_backtest(
            &sample_history(),
            OptionType::Put,
            Direction::Long,
            100.0,
            date(2025, 6, 1),
            date(2025, 6, 30),
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn synthetic_series_is_seed_deterministic() {
        let a = synthetic_close_series(date(2024, 1, 1), 30, 100.0, 0.07, 0.25, 42).unwrap();
        let b = synthetic_close_series(date(2024, 1, 1), 30, 100.0, 0.07, 0.25, 42).unwrap();
        let c = synthetic_close_series(date(2024, 1, 1), 30, 100.0, 0.07, 0.25, 43).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 30);
        assert_eq!(a[0].close, 100.0);
        assert!(a.iter().all(|p| p.close > 0.0));
        assert!(a
            .iter()
            .all(|p| !matches!(p.date.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn zero_sigma_series_grows_at_the_drift_rate() {
        let rows = synthetic_close_series(date(2024, 1, 2), 3, 100.0, 0.1, 0.0, 7).unwrap();
        let step = (0.1 / TRADING_DAYS_PER_YEAR).exp();
        assert_relative_eq!(rows[1].close, 100.0 * step, epsilon = 1e-12);
        assert_relative_eq!(rows[2].close, 100.0 * step * step, epsilon = 1e-12);
    }

    #[test]
    fn rows_serialize_with_iso_dates() {
        let row = DailyOptionRow {
            date: date(2024, 1, 2),
            close: 98.0,
            price: 4.21,
            greeks: Greeks {
                delta: 0.5,
                gamma: 0.02,
                vega: 0.4,
                theta: -0.01,
                rho: 0.3,
            },
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"2024-01-02\""));
        let back: DailyOptionRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
