//! Property-based tests using `proptest` for fee-curve invariants.
//!
//! Covers the curve-level guarantees:
//!
//! 1. **Bounded output**: every fee lands inside `[min_fee, max_fee]`,
//!    for any volatility in the full signed input range.
//! 2. **Exact boundaries**: zero volatility yields `min_fee` exactly;
//!    20% and above yields `max_fee` exactly.
//! 3. **Monotonicity**: a larger sample never yields a smaller fee.
//! 4. **Trend direction**: a falling trend never steepens the curve or
//!    lowers its midpoint; a rising trend never does the opposite; a
//!    flat trend changes nothing.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::curve::{sigmoid, trend, CurveParams};
use crate::domain::{Decimals, Fee, VolatilitySample};
use crate::math::FixedPoint;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Steepness in `(0, 10]`, hundredth granularity.
fn alpha_strategy() -> impl Strategy<Value = FixedPoint> {
    (1i64..=1_000).prop_map(|a| {
        let Ok(alpha) = FixedPoint::from_ratio(a, 100) else {
            panic!("valid ratio");
        };
        alpha
    })
}

/// Midpoint in `[0, 50]`, tenth granularity.
fn beta_strategy() -> impl Strategy<Value = FixedPoint> {
    (0i64..=500).prop_map(|b| {
        let Ok(beta) = FixedPoint::from_ratio(b, 10) else {
            panic!("valid ratio");
        };
        beta
    })
}

/// A valid fee band: `min < max`, both within 100%.
fn fee_band() -> impl Strategy<Value = (Fee, Fee)> {
    (0u32..10_000).prop_flat_map(|min| {
        ((min + 1)..=10_000).prop_map(move |max| (Fee::from_bps(min), Fee::from_bps(max)))
    })
}

fn decimals_strategy() -> impl Strategy<Value = Decimals> {
    (0u8..=18).prop_map(|d| {
        let Ok(decimals) = Decimals::new(d) else {
            panic!("valid decimals");
        };
        decimals
    })
}

fn eval(raw: i64, d: Decimals, p: CurveParams, min: Fee, max: Fee) -> Fee {
    let Ok(fee) = sigmoid::evaluate(VolatilitySample::new(raw), d, p, min, max) else {
        panic!("evaluate failed");
    };
    fee
}

// ---------------------------------------------------------------------------
// Sigmoid curve properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn fee_always_inside_band(
        raw in any::<i64>(),
        d in decimals_strategy(),
        alpha in alpha_strategy(),
        beta in beta_strategy(),
        (min, max) in fee_band(),
    ) {
        let fee = eval(raw, d, CurveParams::new(alpha, beta), min, max);
        prop_assert!(fee >= min);
        prop_assert!(fee <= max);
    }

    #[test]
    fn zero_volatility_is_exactly_min(
        d in decimals_strategy(),
        alpha in alpha_strategy(),
        beta in beta_strategy(),
        (min, max) in fee_band(),
    ) {
        let fee = eval(0, d, CurveParams::new(alpha, beta), min, max);
        prop_assert_eq!(fee, min);
    }

    #[test]
    fn high_volatility_is_exactly_max(
        d in 0u8..=12,
        above in 0i64..1_000_000_000,
        alpha in alpha_strategy(),
        beta in beta_strategy(),
        (min, max) in fee_band(),
    ) {
        let Ok(decimals) = Decimals::new(d) else {
            panic!("valid decimals");
        };
        // Any raw value at or past 20% descaled saturates to max.
        let raw = 20 * decimals.factor() + above;
        let fee = eval(raw, decimals, CurveParams::new(alpha, beta), min, max);
        prop_assert_eq!(fee, max);
    }

    #[test]
    fn fee_is_monotone_in_volatility(
        raw_a in any::<i64>(),
        raw_b in any::<i64>(),
        d in decimals_strategy(),
        alpha in alpha_strategy(),
        beta in beta_strategy(),
        (min, max) in fee_band(),
    ) {
        let (lo, hi) = if raw_a <= raw_b { (raw_a, raw_b) } else { (raw_b, raw_a) };
        let params = CurveParams::new(alpha, beta);
        let fee_lo = eval(lo, d, params, min, max);
        let fee_hi = eval(hi, d, params, min, max);
        prop_assert!(fee_lo <= fee_hi);
    }
}

// ---------------------------------------------------------------------------
// Trend adjustment properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn falling_trend_never_steepens_or_lowers_midpoint(
        long in i64::MIN + 1..=i64::MAX,
        delta in 1i64..1_000_000,
        alpha in alpha_strategy(),
        beta in beta_strategy(),
    ) {
        let short = long.saturating_sub(delta);
        prop_assume!(short < long);
        let base = CurveParams::new(alpha, beta);
        let Ok(adjusted) = trend::adjust(
            VolatilitySample::new(long),
            VolatilitySample::new(short),
            base,
        ) else {
            panic!("adjust failed");
        };
        prop_assert!(adjusted.alpha() <= base.alpha());
        prop_assert!(adjusted.beta() >= base.beta());
    }

    #[test]
    fn rising_trend_never_flattens_or_raises_midpoint(
        short in i64::MIN + 1..=i64::MAX,
        delta in 1i64..1_000_000,
        alpha in alpha_strategy(),
        beta in beta_strategy(),
    ) {
        let long = short.saturating_sub(delta);
        prop_assume!(long < short);
        let base = CurveParams::new(alpha, beta);
        let Ok(adjusted) = trend::adjust(
            VolatilitySample::new(long),
            VolatilitySample::new(short),
            base,
        ) else {
            panic!("adjust failed");
        };
        prop_assert!(adjusted.alpha() >= base.alpha());
        prop_assert!(adjusted.beta() <= base.beta());
    }

    #[test]
    fn flat_trend_is_identity(
        value in any::<i64>(),
        alpha in alpha_strategy(),
        beta in beta_strategy(),
    ) {
        let base = CurveParams::new(alpha, beta);
        let Ok(adjusted) = trend::adjust(
            VolatilitySample::new(value),
            VolatilitySample::new(value),
            base,
        ) else {
            panic!("adjust failed");
        };
        prop_assert_eq!(adjusted, base);
    }
}
