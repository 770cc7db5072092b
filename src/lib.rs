//! # Sigma Fee
//!
//! Volatility-responsive dynamic fee engine for automated market-making
//! pools.
//!
//! The engine observes two external volatility signals per pool, a
//! short-horizon measure (reference: 24 hours) and a long-horizon
//! measure (reference: 7 days), derives a trend from their difference,
//! and maps the short-horizon reading through a trend-adjusted sigmoid
//! curve into a trading fee bounded by a configured band:
//!
//! ```text
//! fee = min + (max - min) / (1 + exp(-alpha * (v - beta)))
//! ```
//!
//! All arithmetic runs on a deterministic 64.64 fixed-point type; the
//! same inputs produce the same fee on every platform, bit for bit.
//!
//! Swap execution, liquidity accounting, and settlement live in the
//! host AMM. The host calls
//! [`FeeEngine::on_before_trade`](engine::FeeEngine::on_before_trade)
//! before pricing each trade and enforces the returned fee itself.
//!
//! # Quick Start
//!
//! ```rust
//! use sigma_fee::prelude::*;
//!
//! // The host supplies the oracle transport.
//! struct StaticFeed;
//!
//! impl VolatilityFeed for StaticFeed {
//!     fn latest_reading(&self, _feed: FeedId) -> Result<FeedReading> {
//!         // 4% volatility at five decimals
//!         Ok(FeedReading::new(400_000, 1_700_000_000, 1))
//!     }
//! }
//!
//! // 1. Fix the curve at construction: fee band plus base parameters.
//! let config = CurveConfig::new(
//!     Fee::from_bps(3_000),
//!     Fee::from_bps(10_000),
//!     FixedPoint::from_int(1),   // steepness
//!     FixedPoint::from_int(10),  // midpoint, in percent
//! )
//! .expect("valid curve config");
//!
//! let engine = FeeEngine::new(config, StaticFeed);
//!
//! // 2. A pool joins with dynamic fees and gets its feeds bound.
//! let pool = PoolId::from_bytes([1u8; 32]);
//! engine
//!     .on_pool_initialize(&pool, FeeMode::Dynamic)
//!     .expect("dynamic pool");
//! engine
//!     .configure_feed(
//!         pool,
//!         FeedId::from_bytes([2u8; 32]),
//!         FeedId::from_bytes([3u8; 32]),
//!         5,
//!     )
//!     .expect("feeds bound");
//!
//! // 3. Before each trade the host asks for the fee override.
//! let fee_override = engine.on_before_trade(&pool).expect("fee computed");
//! let fee = fee_override.fee();
//! assert!(fee >= Fee::from_bps(3_000) && fee <= Fee::from_bps(10_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  AMM host    │  on_pool_initialize / on_before_trade / configure_feed
//! └──────┬──────┘
//!        │ get_fee(pool)
//!        ▼
//! ┌─────────────┐
//! │   Engine     │  registry lookup, base-fee fallback, feed reads
//! └──────┬──────┘
//!        │ two samples
//!        ▼
//! ┌─────────────┐
//! │    Curve     │  trend::adjust → sigmoid::evaluate
//! └──────┬──────┘
//!        │ checked 64.64 arithmetic
//!        ▼
//! ┌─────────────┐
//! │    Math      │  FixedPoint
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`PoolId`](domain::PoolId), [`Fee`](domain::Fee), [`VolatilitySample`](domain::VolatilitySample), etc. |
//! | [`traits`] | The [`VolatilityFeed`](traits::VolatilityFeed) oracle seam |
//! | [`config`] | [`CurveConfig`](config::CurveConfig), validated at construction |
//! | [`curve`]  | Pure curve stages: [`trend`](curve::trend) and [`sigmoid`](curve::sigmoid) |
//! | [`registry`] | [`FeedRegistry`](registry::FeedRegistry), per-pool feed bindings |
//! | [`engine`] | [`FeeEngine`](engine::FeeEngine) orchestration and host hooks |
//! | [`math`]   | [`FixedPoint`](math::FixedPoint) checked 64.64 arithmetic |
//! | [`error`]  | [`FeeError`](error::FeeError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod curve;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod registry;
pub mod traits;
