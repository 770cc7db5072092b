//! Per-pool feed binding.

use super::{Decimals, FeedId};

/// The pair of volatility feeds bound to one pool, plus their shared
/// decimal precision.
///
/// A binding is created whole by
/// [`configure_feed`](crate::engine::FeeEngine::configure_feed),
/// replaced whole on reconfiguration, and removed whole on deletion.
/// Absence of a binding is a valid state: the engine falls back to its
/// base fee. The two feeds share one [`Decimals`] value by design; see
/// DESIGN.md for the rationale.
///
/// # Examples
///
/// ```
/// use sigma_fee::domain::{Decimals, FeedBinding, FeedId};
///
/// let binding = FeedBinding::new(
///     FeedId::from_bytes([1u8; 32]),
///     FeedId::from_bytes([2u8; 32]),
///     Decimals::new(5).expect("valid decimals"),
/// );
/// assert_eq!(binding.decimals().get(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedBinding {
    short_feed: FeedId,
    long_feed: FeedId,
    decimals: Decimals,
}

impl FeedBinding {
    /// Creates a new binding.
    #[must_use]
    pub const fn new(short_feed: FeedId, long_feed: FeedId, decimals: Decimals) -> Self {
        Self {
            short_feed,
            long_feed,
            decimals,
        }
    }

    /// The short-horizon (recent window) volatility feed.
    #[must_use]
    pub const fn short_feed(&self) -> FeedId {
        self.short_feed
    }

    /// The long-horizon volatility feed.
    #[must_use]
    pub const fn long_feed(&self) -> FeedId {
        self.long_feed
    }

    /// The decimal precision shared by both feeds.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}
