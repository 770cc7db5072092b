//! Fee orchestration and the host-facing surface.
//!
//! [`FeeEngine`] is the per-pool entry point: it owns the
//! [`FeedRegistry`](crate::registry::FeedRegistry), the
//! [`CurveConfig`](crate::config::CurveConfig), and the feed
//! collaborator, and drives the curve stages on every invocation.
//! The hook methods expose the engine to an AMM host:
//! pool-initialization validation, the per-trade fee override
//! ([`FeeOverride`]), and the administrative feed configuration
//! wrappers.

mod fee_engine;
mod hooks;

pub use fee_engine::{FeeEngine, DEFAULT_BASE_FEE};
pub use hooks::{FeeMode, FeeOverride};
