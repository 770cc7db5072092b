//! Chain-agnostic pool identity.

/// An opaque, chain-agnostic identifier for a liquidity pool.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid identities, so construction is infallible. The host settlement
/// engine assigns identities; this crate only uses them as registry keys.
///
/// # Examples
///
/// ```
/// use sigma_fee::domain::PoolId;
///
/// let pool = PoolId::from_bytes([1u8; 32]);
/// assert_eq!(pool.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId([u8; 32]);

impl PoolId {
    /// Creates a `PoolId` from raw bytes.
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
