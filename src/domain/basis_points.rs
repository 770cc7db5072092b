//! Basis-point representation for percentages.

use core::fmt;

use crate::math::FixedPoint;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values are technically valid, but values above 10 000 are
/// nonsensical as percentages. Use [`is_valid_percent`](Self::is_valid_percent)
/// to check; fee-bound validation rejects out-of-range values at
/// configuration time.
///
/// # Examples
///
/// ```
/// use sigma_fee::domain::BasisPoints;
///
/// let bp = BasisPoints::new(3_000);
/// assert_eq!(bp.get(), 3_000);
/// assert!(bp.is_valid_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Converts to a [`FixedPoint`] carrying the same basis-point count.
    ///
    /// The conversion is exact; curve interpolation happens in this
    /// space before truncating back to integer basis points.
    #[must_use]
    pub const fn to_fixed(&self) -> FixedPoint {
        FixedPoint::from_int(self.0 as i64)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
