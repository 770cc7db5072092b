//! Feed decimal precision.

use crate::error::FeeError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// The scale exponent of a pool's volatility feeds.
///
/// A feed with `decimals = 5` reports a 4% volatility as `400_000`.
/// Valid range is `0..=18`; construction is validated. Both of a pool's
/// feeds share one `Decimals` value, carried on the feed binding.
///
/// # Examples
///
/// ```
/// use sigma_fee::domain::Decimals;
///
/// let d = Decimals::new(5).expect("5 is valid");
/// assert_eq!(d.get(), 5);
/// assert_eq!(d.factor(), 100_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Decimals {
    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, FeeError> {
        if value > MAX_DECIMALS {
            return Err(FeeError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    ///
    /// Fits an `i64` for the whole valid range (`10^18 < 2^63`).
    #[must_use]
    pub const fn factor(&self) -> i64 {
        10_i64.pow(self.0 as u32)
    }
}
