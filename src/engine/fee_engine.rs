//! Per-pool fee orchestration.

use core::fmt;

use crate::config::CurveConfig;
use crate::curve::{sigmoid, trend};
use crate::domain::{Fee, PoolId, VolatilitySample};
use crate::error::FeeError;
use crate::registry::FeedRegistry;
use crate::traits::VolatilityFeed;

/// Fee charged to pools that have no feed binding (50% of the band in
/// the reference configuration, 5000 basis points).
pub const DEFAULT_BASE_FEE: Fee = Fee::from_bps(5_000);

/// The volatility-responsive fee engine.
///
/// One engine serves any number of pools. Each invocation of
/// [`get_fee`](Self::get_fee) runs to completion synchronously: registry
/// lookup, two feed reads, trend adjustment, sigmoid evaluation. The
/// engine never mutates the registry on the fee path; configuration
/// flows through the administrative hooks.
///
/// The engine is generic over its [`VolatilityFeed`] collaborator, so a
/// host wires in its oracle transport at construction and the core
/// stays transport-agnostic.
pub struct FeeEngine<F> {
    config: CurveConfig,
    registry: FeedRegistry,
    feed: F,
    base_fee: Fee,
}

impl<F> fmt::Debug for FeeEngine<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeeEngine")
            .field("config", &self.config)
            .field("base_fee", &self.base_fee)
            .field("configured_pools", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl<F: VolatilityFeed> FeeEngine<F> {
    /// Creates an engine with the default base fee.
    #[must_use]
    pub fn new(config: CurveConfig, feed: F) -> Self {
        Self::with_base_fee(config, feed, DEFAULT_BASE_FEE)
    }

    /// Creates an engine with an explicit base fee for unconfigured
    /// pools.
    #[must_use]
    pub fn with_base_fee(config: CurveConfig, feed: F, base_fee: Fee) -> Self {
        Self {
            config,
            registry: FeedRegistry::new(),
            feed,
            base_fee,
        }
    }

    /// The engine's feed registry.
    #[must_use]
    pub fn registry(&self) -> &FeedRegistry {
        &self.registry
    }

    /// The engine's curve configuration.
    #[must_use]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// The fee applied to pools without a feed binding.
    #[must_use]
    pub fn base_fee(&self) -> Fee {
        self.base_fee
    }

    /// Computes the current fee for `pool`.
    ///
    /// An unconfigured pool resolves to the base fee; that is a designed
    /// default, not an error. For a configured pool, both bound feeds
    /// are read fresh, the trend between them biases the curve
    /// parameters, and the short-horizon sample is mapped through the
    /// sigmoid into the configured fee band.
    ///
    /// # Errors
    ///
    /// - [`FeeError::FeedRead`] if either feed cannot produce a reading;
    ///   the invocation aborts, nothing is cached or retried.
    /// - Arithmetic variants from the curve stages, unreachable for
    ///   valid configurations.
    pub fn get_fee(&self, pool: &PoolId) -> Result<Fee, FeeError> {
        let Some(binding) = self.registry.binding(pool) else {
            tracing::debug!(
                pool = ?pool.as_bytes(),
                fee = %self.base_fee,
                "pool has no feed binding, using base fee"
            );
            return Ok(self.base_fee);
        };

        let short = self.feed.latest_reading(binding.short_feed())?;
        let long = self.feed.latest_reading(binding.long_feed())?;
        let short_sample = VolatilitySample::new(short.value());
        let long_sample = VolatilitySample::new(long.value());

        let params = trend::adjust(long_sample, short_sample, self.config.base_params())?;
        let fee = sigmoid::evaluate(
            short_sample,
            binding.decimals(),
            params,
            self.config.min_fee(),
            self.config.max_fee(),
        )?;

        tracing::debug!(
            pool = ?pool.as_bytes(),
            short = short.value(),
            long = long.value(),
            fee = %fee,
            "computed dynamic fee"
        );
        Ok(fee)
    }
}
