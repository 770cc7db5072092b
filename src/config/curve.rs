//! Configuration for the sigmoid fee curve.

use crate::curve::CurveParams;
use crate::domain::Fee;
use crate::error::FeeError;
use crate::math::FixedPoint;

/// Immutable configuration of the fee curve.
///
/// Fixed at engine construction: the fee band `[min_fee, max_fee]` and
/// the base curve parameters `base_alpha` (steepness) and `base_beta`
/// (midpoint). The base parameters are expressed in descaled volatility
/// units, the same space volatility samples land in after removing
/// their `10^decimals` scale.
///
/// # Validation
///
/// - `min_fee` must be strictly below `max_fee`.
/// - Both fees must be valid percentages (0 to 10 000 basis points).
/// - `base_alpha` must be positive; a flat or inverted curve is a
///   configuration error.
///
/// # Examples
///
/// ```
/// use sigma_fee::config::CurveConfig;
/// use sigma_fee::domain::Fee;
/// use sigma_fee::math::FixedPoint;
///
/// let config = CurveConfig::new(
///     Fee::from_bps(3_000),
///     Fee::from_bps(10_000),
///     FixedPoint::from_int(1),
///     FixedPoint::from_int(10),
/// )
/// .expect("valid config");
/// assert_eq!(config.min_fee(), Fee::from_bps(3_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConfig {
    min_fee: Fee,
    max_fee: Fee,
    base_alpha: FixedPoint,
    base_beta: FixedPoint,
}

impl CurveConfig {
    /// Creates a new `CurveConfig`.
    ///
    /// # Errors
    ///
    /// - [`FeeError::InvalidFee`] if either fee bound exceeds 100%
    ///   (10 000 basis points).
    /// - [`FeeError::InvalidConfiguration`] if `min_fee >= max_fee` or
    ///   `base_alpha` is not positive.
    pub fn new(
        min_fee: Fee,
        max_fee: Fee,
        base_alpha: FixedPoint,
        base_beta: FixedPoint,
    ) -> Result<Self, FeeError> {
        let config = Self {
            min_fee,
            max_fee,
            base_alpha,
            base_beta,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`FeeError::InvalidFee`] if either fee bound exceeds 100%
    ///   (10 000 basis points).
    /// - [`FeeError::InvalidConfiguration`] if `min_fee >= max_fee` or
    ///   `base_alpha` is not positive.
    pub fn validate(&self) -> Result<(), FeeError> {
        if !self.min_fee.is_valid_percent() || !self.max_fee.is_valid_percent() {
            return Err(FeeError::InvalidFee(
                "fee bound must not exceed 10000 basis points (100%)",
            ));
        }
        if self.min_fee >= self.max_fee {
            return Err(FeeError::InvalidConfiguration(
                "min fee must be strictly below max fee",
            ));
        }
        if self.base_alpha <= FixedPoint::ZERO {
            return Err(FeeError::InvalidConfiguration(
                "curve steepness must be positive",
            ));
        }
        Ok(())
    }

    /// Returns the minimum fee of the band.
    #[must_use]
    pub const fn min_fee(&self) -> Fee {
        self.min_fee
    }

    /// Returns the maximum fee of the band.
    #[must_use]
    pub const fn max_fee(&self) -> Fee {
        self.max_fee
    }

    /// Returns the base curve parameters, before trend adjustment.
    #[must_use]
    pub const fn base_params(&self) -> CurveParams {
        CurveParams::new(self.base_alpha, self.base_beta)
    }
}
