//! Concurrent per-pool feed binding registry.

use dashmap::DashMap;

use crate::domain::{FeedBinding, PoolId};
use crate::error::FeeError;

/// Maps each configured pool to its [`FeedBinding`].
///
/// Backed by a sharded concurrent map: all operations take `&self`, so
/// the engine and the administrative surface can share one registry
/// without external locking. The binding value is replaced as a whole
/// on every update, which is exactly the per-key atomic replacement the
/// concurrency model requires. Operations on different pools are fully
/// independent.
///
/// # Examples
///
/// ```
/// use sigma_fee::domain::{Decimals, FeedBinding, FeedId, PoolId};
/// use sigma_fee::registry::FeedRegistry;
///
/// let registry = FeedRegistry::new();
/// let pool = PoolId::from_bytes([1u8; 32]);
/// let binding = FeedBinding::new(
///     FeedId::from_bytes([2u8; 32]),
///     FeedId::from_bytes([3u8; 32]),
///     Decimals::new(5).expect("valid decimals"),
/// );
///
/// registry.set_binding(pool, binding);
/// assert_eq!(registry.binding(&pool), Some(binding));
///
/// registry.delete_binding(&pool).expect("was configured");
/// assert_eq!(registry.binding(&pool), None);
/// ```
#[derive(Debug, Default)]
pub struct FeedRegistry {
    bindings: DashMap<PoolId, FeedBinding>,
}

impl FeedRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: DashMap::new(),
        }
    }

    /// Unconditionally upserts the binding for `pool`.
    ///
    /// Overwrites any existing binding in one atomic replacement. Feed
    /// liveness is not validated here; a dead feed surfaces as a
    /// [`FeeError::FeedRead`] at computation time.
    pub fn set_binding(&self, pool: PoolId, binding: FeedBinding) {
        self.bindings.insert(pool, binding);
    }

    /// Returns the binding for `pool`, or `None` if the pool was never
    /// configured or its binding was deleted.
    #[must_use]
    pub fn binding(&self, pool: &PoolId) -> Option<FeedBinding> {
        self.bindings.get(pool).map(|entry| *entry.value())
    }

    /// Removes the binding for `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::NotConfigured`] if the pool has no binding.
    pub fn delete_binding(&self, pool: &PoolId) -> Result<(), FeeError> {
        self.bindings
            .remove(pool)
            .map(|_| ())
            .ok_or(FeeError::NotConfigured)
    }

    /// Number of configured pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no pool is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
