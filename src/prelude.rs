//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use sigma_fee::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the curve configuration, the
//! engine with its host-facing hook types, the feed seam, and the error
//! types, so consumers don't need to import from individual submodules.

// Domain value types
pub use crate::domain::{
    BasisPoints, Decimals, Fee, FeedBinding, FeedId, FeedReading, PoolId, VolatilitySample,
};

// Configuration
pub use crate::config::CurveConfig;

// Curve parameters (outputs of trend adjustment)
pub use crate::curve::CurveParams;

// Engine and host surface
pub use crate::engine::{FeeEngine, FeeMode, FeeOverride, DEFAULT_BASE_FEE};

// External feed seam
pub use crate::traits::VolatilityFeed;

// Fixed-point arithmetic
pub use crate::math::FixedPoint;

// Registry
pub use crate::registry::FeedRegistry;

// Error types
pub use crate::error::{FeeError, Result};
