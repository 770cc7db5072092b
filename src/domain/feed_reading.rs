//! External feed reading.

/// One reading delivered by an external volatility feed.
///
/// The core consumes only [`value`](Self::value); `timestamp` and
/// `round_id` travel with the reading for feed implementations and
/// diagnostics. See
/// [`VolatilityFeed`](crate::traits::VolatilityFeed) for the staleness
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedReading {
    value: i64,
    timestamp: u64,
    round_id: u64,
}

impl FeedReading {
    /// Creates a new reading.
    #[must_use]
    pub const fn new(value: i64, timestamp: u64, round_id: u64) -> Self {
        Self {
            value,
            timestamp,
            round_id,
        }
    }

    /// The scaled volatility value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Unix timestamp of the reading.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Oracle round identifier.
    #[must_use]
    pub const fn round_id(&self) -> u64 {
        self.round_id
    }
}
