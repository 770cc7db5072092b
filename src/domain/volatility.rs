//! Scaled volatility samples.

use super::Decimals;
use crate::error::FeeError;
use crate::math::FixedPoint;

/// A volatility reading as delivered by an external feed.
///
/// The raw value is a signed integer scaled by `10^decimals` and
/// represents a percentage: with `decimals = 5`, a raw value of
/// `400_000` means 4%. Samples are supplied fresh on every fee
/// computation and never stored beyond it.
///
/// # Examples
///
/// ```
/// use sigma_fee::domain::{Decimals, VolatilitySample};
///
/// let d = Decimals::new(5).expect("valid decimals");
/// let sample = VolatilitySample::new(400_000);
/// let v = sample.descale(d).expect("descaled");
/// assert_eq!(v.to_i64(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolatilitySample(i64);

impl VolatilitySample {
    /// Creates a sample from a raw scaled value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Returns `true` if the raw value is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Removes the `10^decimals` scale, yielding the percentage value
    /// as a [`FixedPoint`] in curve units.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Overflow`] if the quotient is not
    /// representable, which cannot happen for any `i64` raw value.
    pub fn descale(&self, decimals: Decimals) -> Result<FixedPoint, FeeError> {
        FixedPoint::from_int(self.0).checked_div(&FixedPoint::from_int(decimals.factor()))
    }
}
