//! Host-facing lifecycle hooks and administrative surface.

use crate::domain::{Decimals, Fee, FeedBinding, FeedId, PoolId};
use crate::error::FeeError;
use crate::traits::VolatilityFeed;

use super::FeeEngine;

/// How a pool's fee is determined, declared by the host at pool
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeMode {
    /// Fees come from this engine, recomputed before every trade.
    Dynamic,
    /// Fees are fixed at pool creation; incompatible with this engine.
    Static,
}

/// A fee override for exactly one trade.
///
/// Returned by [`FeeEngine::on_before_trade`]; it applies to the trade
/// being priced and is not a standing fee update. The host discards it
/// after settlement and asks again before the next trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeOverride {
    fee: Fee,
}

impl FeeOverride {
    /// Creates an override carrying `fee`.
    #[must_use]
    pub const fn new(fee: Fee) -> Self {
        Self { fee }
    }

    /// The fee to apply to the current trade.
    #[must_use]
    pub const fn fee(&self) -> Fee {
        self.fee
    }
}

impl<F: VolatilityFeed> FeeEngine<F> {
    /// Validates a pool joining the engine at initialization time.
    ///
    /// Succeeds with no state change for a dynamic-fee pool; the pool
    /// becomes priceable immediately (at the base fee until a feed
    /// binding is configured).
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::FeeModeNotDynamic`] if the pool was created
    /// with a static fee mode.
    pub fn on_pool_initialize(&self, pool: &PoolId, mode: FeeMode) -> Result<(), FeeError> {
        if mode != FeeMode::Dynamic {
            return Err(FeeError::FeeModeNotDynamic);
        }
        tracing::debug!(pool = ?pool.as_bytes(), "pool initialized with dynamic fees");
        Ok(())
    }

    /// Produces the fee override for the trade about to be priced.
    ///
    /// Invoked by the host immediately before each trade; delegates to
    /// [`get_fee`](Self::get_fee).
    ///
    /// # Errors
    ///
    /// Propagates every [`get_fee`](Self::get_fee) failure; the host
    /// decides whether the triggering trade aborts.
    pub fn on_before_trade(&self, pool: &PoolId) -> Result<FeeOverride, FeeError> {
        Ok(FeeOverride::new(self.get_fee(pool)?))
    }

    /// Binds a pair of volatility feeds to `pool`.
    ///
    /// Overwrites any existing binding as one atomic replacement. Feed
    /// liveness is not checked here; a dead feed fails at read time.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::InvalidPrecision`] if `decimals` exceeds 18.
    pub fn configure_feed(
        &self,
        pool: PoolId,
        short_feed: FeedId,
        long_feed: FeedId,
        decimals: u8,
    ) -> Result<(), FeeError> {
        let decimals = Decimals::new(decimals)?;
        self.registry()
            .set_binding(pool, FeedBinding::new(short_feed, long_feed, decimals));
        Ok(())
    }

    /// Removes the feed binding of `pool`, returning it to the base-fee
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::NotConfigured`] if the pool has no binding.
    pub fn remove_feed(&self, pool: &PoolId) -> Result<(), FeeError> {
        self.registry().delete_binding(pool)
    }
}
