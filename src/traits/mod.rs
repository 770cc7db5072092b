//! Trait seams toward external collaborators.
//!
//! This module defines [`VolatilityFeed`], the boundary between the fee
//! engine and whatever oracle network supplies volatility readings. The
//! engine is generic over the implementation, so hosts plug in their
//! transport without the core knowing about it.

mod volatility_feed;

pub use volatility_feed::VolatilityFeed;
