//! Sigmoid fee-curve evaluation.
//!
//! Maps a short-horizon volatility sample through a logistic curve into
//! a fee inside the configured band:
//!
//! ```text
//! fee = min + (max - min) / (1 + exp(-alpha * (v - beta)))
//! ```
//!
//! Saturation shortcuts run before any curve math: extreme and zero
//! inputs return the exact boundary fees, which both pins the boundary
//! values regardless of parameter drift and keeps the exponential away
//! from its overflow range.

use crate::domain::{Decimals, Fee, VolatilitySample};
use crate::error::FeeError;
use crate::math::FixedPoint;

use super::CurveParams;

/// Descaled volatility at and above which the curve saturates to the
/// maximum fee (20%).
const HIGH_VOLATILITY: FixedPoint = FixedPoint::from_int(20);

/// Logistic-argument magnitude beyond which the curve is flat at
/// basis-point resolution (the logistic is within 2^-46 of its bound).
const ARG_SATURATION: FixedPoint = FixedPoint::from_int(32);
const ARG_SATURATION_NEG: FixedPoint = FixedPoint::from_int(-32);

/// Evaluates the fee curve for one volatility sample.
///
/// Steps:
///
/// 1. Descale the sample by `10^decimals` into curve units.
/// 2. Saturation policy: a descaled value at or above 20 returns
///    `max_fee` exactly; a value at or below zero returns `min_fee`
///    exactly. Extending the zero shortcut to negative values keeps the
///    output bounded and monotone over the whole signed input range.
/// 3. Otherwise evaluate the logistic in fixed point. Arguments past
///    the flat region of the curve return the boundary fee directly,
///    which keeps the exponential inside its representable range.
/// 4. Interpolate into `[min_fee, max_fee]`, clamp against edge
///    rounding, and truncate to integer basis points.
///
/// # Errors
///
/// Propagates fixed-point arithmetic failures
/// ([`FeeError::Overflow`] and kin). Unreachable for valid
/// configurations; never masked by clamping.
pub fn evaluate(
    volatility: VolatilitySample,
    decimals: Decimals,
    params: CurveParams,
    min_fee: Fee,
    max_fee: Fee,
) -> Result<Fee, FeeError> {
    let v = volatility.descale(decimals)?;
    if v >= HIGH_VOLATILITY {
        return Ok(max_fee);
    }
    if v <= FixedPoint::ZERO {
        return Ok(min_fee);
    }

    let x = params.alpha().checked_mul(&v.checked_sub(&params.beta())?)?;
    if x >= ARG_SATURATION {
        return Ok(max_fee);
    }
    if x <= ARG_SATURATION_NEG {
        return Ok(min_fee);
    }

    // sigmoid = 1 / (1 + exp(-x)), bounded in (0, 1)
    let exp_neg = x.checked_neg()?.checked_exp()?;
    let denominator = FixedPoint::ONE.checked_add(&exp_neg)?;
    let sigmoid = FixedPoint::ONE.checked_div(&denominator)?;

    let lo = min_fee.to_fixed();
    let hi = max_fee.to_fixed();
    let span = hi.checked_sub(&lo)?;
    let fee = lo
        .checked_add(&span.checked_mul(&sigmoid)?)?
        .clamp(lo, hi);

    let bps = u32::try_from(fee.to_i64())
        .map_err(|_| FeeError::Overflow("fee exceeds basis-point range"))?;
    Ok(Fee::from_bps(bps))
}
