//! Opaque volatility-feed handle.

/// An opaque handle to an external volatility source.
///
/// The engine never interprets the bytes; they identify a feed to
/// whatever [`VolatilityFeed`](crate::traits::VolatilityFeed)
/// implementation the engine was constructed with. A feed handle is
/// owned by the binding of exactly one pool and is not shared across
/// pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedId([u8; 32]);

impl FeedId {
    /// Creates a `FeedId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}
