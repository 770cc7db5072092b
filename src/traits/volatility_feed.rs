//! External volatility feed seam.

use crate::domain::{FeedId, FeedReading};
use crate::error::FeeError;

/// Source of volatility readings, implemented by the host.
///
/// The engine calls [`latest_reading`](Self::latest_reading) once per
/// bound feed per fee computation and treats the returned value as
/// instantaneously authoritative. There is no retry or polling inside
/// the core: a failed read aborts the fee computation.
///
/// # Contract
///
/// - A returned reading is current enough to price a trade against.
///   The core does not inspect [`FeedReading::timestamp`]; an
///   implementation that can observe staleness must surface a stale
///   round as [`FeeError::FeedRead`] instead of returning it.
/// - Reads must not block indefinitely; whatever timeout discipline the
///   transport has is the only one applied.
/// - Implementations are free to be `&self`-concurrent; the engine may
///   read two feeds of the same pool back to back.
pub trait VolatilityFeed {
    /// Returns the latest reading of `feed`.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::FeedRead`] when no fresh value can be
    /// produced, for whatever reason the transport encounters.
    fn latest_reading(&self, feed: FeedId) -> Result<FeedReading, FeeError>;
}
