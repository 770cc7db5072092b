//! Trading fee values built on [`BasisPoints`].

use core::fmt;

use super::BasisPoints;
use crate::math::FixedPoint;

/// A trading fee expressed in basis points.
///
/// The engine produces one `Fee` per invocation: either a point on the
/// sigmoid curve between the configured bounds, or the constant base fee
/// for an unconfigured pool.
///
/// # Examples
///
/// ```
/// use sigma_fee::domain::Fee;
///
/// let min = Fee::from_bps(3_000);
/// let max = Fee::from_bps(10_000);
/// assert!(min < max);
/// assert_eq!(max.bps(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fee(BasisPoints);

impl Fee {
    /// Creates a new `Fee` from [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Creates a new `Fee` from a raw basis-point count.
    pub const fn from_bps(value: u32) -> Self {
        Self(BasisPoints::new(value))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the raw basis-point count.
    #[must_use]
    pub const fn bps(&self) -> u32 {
        self.0.get()
    }

    /// Returns `true` if the fee is in the valid percentage range.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0.is_valid_percent()
    }

    /// Converts to a [`FixedPoint`] carrying the same basis-point count.
    #[must_use]
    pub const fn to_fixed(&self) -> FixedPoint {
        self.0.to_fixed()
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fee({})", self.0)
    }
}
