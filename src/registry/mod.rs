//! Per-pool feed binding storage.
//!
//! [`FeedRegistry`] maps pool identities to their volatility feed
//! bindings. Updates replace the whole binding atomically per key, so a
//! fee computation in flight observes either the old pair or the new
//! pair, never a mix.

mod feed_registry;

pub use feed_registry::FeedRegistry;
