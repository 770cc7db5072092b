//! Fundamental domain value types used throughout the fee engine.
//!
//! This module contains the core value types that model the dynamic-fee
//! domain: pool and feed identities, fee values, decimal precision,
//! volatility samples, and the per-pool feed binding. All types use
//! newtypes with validated constructors to enforce invariants.

mod basis_points;
mod decimals;
mod fee;
mod feed_binding;
mod feed_id;
mod feed_reading;
mod pool_id;
mod volatility;

pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use fee::Fee;
pub use feed_binding::FeedBinding;
pub use feed_id::FeedId;
pub use feed_reading::FeedReading;
pub use pool_id::PoolId;
pub use volatility::VolatilitySample;
