//! Trend-based curve parameter adjustment.
//!
//! Compares the long-horizon volatility against the short-horizon
//! volatility and biases the curve parameters accordingly before the
//! sigmoid is evaluated. Decimals cancel in the comparison because both
//! feeds of a pool share one precision.

use core::cmp::Ordering;

use super::CurveParams;
use crate::domain::VolatilitySample;
use crate::error::FeeError;
use crate::math::FixedPoint;

const TWO: FixedPoint = FixedPoint::from_int(2);
const FIVE: FixedPoint = FixedPoint::from_int(5);

/// Biases `base` by the volatility trend.
///
/// The trend is the sign of `long_horizon - short_horizon`:
///
/// - Positive (long above short, volatility perceived as falling):
///   steepness drops by half, midpoint rises by a fifth, pushing the
///   curve toward lower fees at the current short-horizon reading.
/// - Negative (short above long, volatility rising): steepness grows by
///   half, midpoint drops by a fifth, pushing toward higher fees.
/// - Zero: parameters pass through unchanged.
///
/// Pure and stateless; unaware of fee bounds.
///
/// # Errors
///
/// Propagates [`FeeError::Overflow`] / [`FeeError::Underflow`] from the
/// parameter arithmetic, reachable only for parameters near the edge of
/// the fixed-point range.
pub fn adjust(
    long_horizon: VolatilitySample,
    short_horizon: VolatilitySample,
    base: CurveParams,
) -> Result<CurveParams, FeeError> {
    // i128 keeps the subtraction exact for any pair of i64 samples.
    let trend = i128::from(long_horizon.get()) - i128::from(short_horizon.get());
    match trend.cmp(&0) {
        Ordering::Greater => {
            let alpha = base
                .alpha()
                .checked_sub(&base.alpha().checked_div(&TWO)?)?;
            let beta = base.beta().checked_add(&base.beta().checked_div(&FIVE)?)?;
            Ok(CurveParams::new(alpha, beta))
        }
        Ordering::Less => {
            let alpha = base
                .alpha()
                .checked_add(&base.alpha().checked_div(&TWO)?)?;
            let beta = base.beta().checked_sub(&base.beta().checked_div(&FIVE)?)?;
            Ok(CurveParams::new(alpha, beta))
        }
        Ordering::Equal => Ok(base),
    }
}
