//! Integration tests exercising the full system from configuration to
//! per-trade fee.
//!
//! These tests verify end-to-end flows through the public API: engine
//! construction, pool initialization, feed configuration, the
//! before-trade hook, failure propagation, and the reference fee
//! scenarios.

#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::Mutex;

use sigma_fee::config::CurveConfig;
use sigma_fee::domain::{Fee, FeedId, FeedReading, PoolId};
use sigma_fee::engine::{FeeEngine, FeeMode, DEFAULT_BASE_FEE};
use sigma_fee::error::FeeError;
use sigma_fee::math::FixedPoint;
use sigma_fee::traits::VolatilityFeed;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const MIN_FEE: Fee = Fee::from_bps(3_000);
const MAX_FEE: Fee = Fee::from_bps(10_000);

/// A mutable in-memory oracle: per-feed values behind a mutex so tests
/// can move the market between invocations.
struct TestOracle {
    values: Mutex<HashMap<FeedId, i64>>,
}

impl TestOracle {
    fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }

    fn set(&self, feed: FeedId, value: i64) {
        let Ok(mut values) = self.values.lock() else {
            panic!("oracle lock poisoned");
        };
        values.insert(feed, value);
    }

    fn clear(&self, feed: FeedId) {
        let Ok(mut values) = self.values.lock() else {
            panic!("oracle lock poisoned");
        };
        values.remove(&feed);
    }
}

impl VolatilityFeed for &TestOracle {
    fn latest_reading(&self, feed: FeedId) -> Result<FeedReading, FeeError> {
        let Ok(values) = self.values.lock() else {
            return Err(FeeError::FeedRead("oracle lock poisoned"));
        };
        values
            .get(&feed)
            .map(|value| FeedReading::new(*value, 1_700_000_000, 1))
            .ok_or(FeeError::FeedRead("feed has no value"))
    }
}

fn reference_config() -> CurveConfig {
    let Ok(cfg) = CurveConfig::new(
        MIN_FEE,
        MAX_FEE,
        FixedPoint::from_int(1),
        FixedPoint::from_int(10),
    ) else {
        panic!("valid config");
    };
    cfg
}

fn pool() -> PoolId {
    PoolId::from_bytes([1u8; 32])
}

fn short_feed() -> FeedId {
    FeedId::from_bytes([2u8; 32])
}

fn long_feed() -> FeedId {
    FeedId::from_bytes([3u8; 32])
}

/// Engine with the reference config, the pool initialized and its feeds
/// bound at five decimals.
fn configured_engine(oracle: &TestOracle) -> FeeEngine<&TestOracle> {
    let engine = FeeEngine::new(reference_config(), oracle);
    let Ok(()) = engine.on_pool_initialize(&pool(), FeeMode::Dynamic) else {
        panic!("dynamic pool accepted");
    };
    let Ok(()) = engine.configure_feed(pool(), short_feed(), long_feed(), 5) else {
        panic!("feeds bound");
    };
    engine
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn construction_rejects_inverted_fee_band() {
    let result = CurveConfig::new(
        MAX_FEE,
        MIN_FEE,
        FixedPoint::from_int(1),
        FixedPoint::from_int(10),
    );
    assert!(matches!(result, Err(FeeError::InvalidConfiguration(_))));
}

#[test]
fn construction_rejects_degenerate_fee_band() {
    let result = CurveConfig::new(
        MIN_FEE,
        MIN_FEE,
        FixedPoint::from_int(1),
        FixedPoint::from_int(10),
    );
    assert!(matches!(result, Err(FeeError::InvalidConfiguration(_))));
}

// ---------------------------------------------------------------------------
// Pool lifecycle
// ---------------------------------------------------------------------------

#[test]
fn static_fee_pool_is_rejected_at_initialization() {
    let oracle = TestOracle::new();
    let engine = FeeEngine::new(reference_config(), &oracle);
    assert_eq!(
        engine.on_pool_initialize(&pool(), FeeMode::Static),
        Err(FeeError::FeeModeNotDynamic)
    );
}

#[test]
fn removing_feeds_requires_a_binding() {
    let oracle = TestOracle::new();
    let engine = FeeEngine::new(reference_config(), &oracle);
    assert_eq!(engine.remove_feed(&pool()), Err(FeeError::NotConfigured));
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_zero_volatility_prices_at_min_fee() {
    let oracle = TestOracle::new();
    oracle.set(short_feed(), 0);
    oracle.set(long_feed(), 0);
    let engine = configured_engine(&oracle);
    let Ok(fee) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(fee, Fee::from_bps(3_000));
}

#[test]
fn scenario_b_hundred_percent_volatility_prices_at_max_fee() {
    let oracle = TestOracle::new();
    oracle.set(short_feed(), 10_000_000); // 100% at five decimals
    oracle.set(long_feed(), 9_000_000);
    let engine = configured_engine(&oracle);
    let Ok(fee) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(fee, Fee::from_bps(10_000));
}

#[test]
fn scenario_c_unconfigured_pool_prices_at_base_fee() {
    let oracle = TestOracle::new();
    // Feed state is irrelevant without a binding.
    oracle.set(short_feed(), 10_000_000);
    let engine = FeeEngine::new(reference_config(), &oracle);
    let Ok(fee) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(fee, DEFAULT_BASE_FEE);
    assert_eq!(fee, Fee::from_bps(5_000));
}

#[test]
fn scenario_d_rising_volatility_never_lowers_the_fee() {
    let oracle = TestOracle::new();
    let engine = configured_engine(&oracle);

    // 1%, 5%, 10%, 20% with the long horizon held below each reading.
    let mut previous = Fee::from_bps(0);
    for short in [100_000, 500_000, 1_000_000, 2_000_000] {
        oracle.set(short_feed(), short);
        oracle.set(long_feed(), short - 50_000);
        let Ok(fee) = engine.get_fee(&pool()) else {
            panic!("fee computed");
        };
        assert!(fee >= previous, "fee decreased at short = {short}");
        previous = fee;
    }
    assert_eq!(previous, Fee::from_bps(10_000));
}

// ---------------------------------------------------------------------------
// Trend behavior through the full stack
// ---------------------------------------------------------------------------

#[test]
fn equal_horizons_at_the_midpoint_price_mid_band() {
    let oracle = TestOracle::new();
    oracle.set(short_feed(), 1_000_000); // 10%, the configured midpoint
    oracle.set(long_feed(), 1_000_000);
    let engine = configured_engine(&oracle);
    let Ok(fee) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(fee, Fee::from_bps(6_500));
}

#[test]
fn trend_direction_moves_the_fee() {
    let oracle = TestOracle::new();
    let engine = configured_engine(&oracle);
    oracle.set(short_feed(), 900_000); // 9%

    oracle.set(long_feed(), 400_000); // rising market
    let Ok(rising) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };

    oracle.set(long_feed(), 1_200_000); // falling market
    let Ok(falling) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };

    oracle.set(long_feed(), 900_000); // flat
    let Ok(flat) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };

    assert!(rising > flat, "rising trend should raise the fee");
    assert!(falling < flat, "falling trend should lower the fee");
}

// ---------------------------------------------------------------------------
// Failure propagation
// ---------------------------------------------------------------------------

#[test]
fn missing_reading_aborts_the_invocation() {
    let oracle = TestOracle::new();
    oracle.set(short_feed(), 400_000);
    // long feed never set
    let engine = configured_engine(&oracle);
    assert_eq!(
        engine.get_fee(&pool()),
        Err(FeeError::FeedRead("feed has no value"))
    );
}

#[test]
fn feed_failure_is_per_invocation() {
    let oracle = TestOracle::new();
    oracle.set(short_feed(), 400_000);
    oracle.set(long_feed(), 400_000);
    let engine = configured_engine(&oracle);

    let Ok(first) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };

    oracle.clear(long_feed());
    assert!(engine.get_fee(&pool()).is_err());

    // The next invocation with a healthy feed succeeds again.
    oracle.set(long_feed(), 400_000);
    let Ok(second) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Reconfiguration
// ---------------------------------------------------------------------------

#[test]
fn rebinding_swaps_the_feed_pair_atomically() {
    let oracle = TestOracle::new();
    let engine = configured_engine(&oracle);
    oracle.set(short_feed(), 0);
    oracle.set(long_feed(), 0);
    let Ok(before) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(before, Fee::from_bps(3_000));

    // Rebind the pool to a different feed pair at another precision.
    let new_short = FeedId::from_bytes([4u8; 32]);
    let new_long = FeedId::from_bytes([5u8; 32]);
    oracle.set(new_short, 100_000_000); // 100% at eight decimals
    oracle.set(new_long, 100_000_000);
    let Ok(()) = engine.configure_feed(pool(), new_short, new_long, 8) else {
        panic!("feeds rebound");
    };

    let Ok(after) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(after, Fee::from_bps(10_000));
}

#[test]
fn removing_the_binding_restores_the_base_fee() {
    let oracle = TestOracle::new();
    oracle.set(short_feed(), 2_000_000);
    oracle.set(long_feed(), 2_000_000);
    let engine = configured_engine(&oracle);
    let Ok(bound) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(bound, Fee::from_bps(10_000));

    let Ok(()) = engine.remove_feed(&pool()) else {
        panic!("binding removed");
    };
    let Ok(unbound) = engine.get_fee(&pool()) else {
        panic!("fee computed");
    };
    assert_eq!(unbound, DEFAULT_BASE_FEE);
}

// ---------------------------------------------------------------------------
// Multi-pool independence
// ---------------------------------------------------------------------------

#[test]
fn pools_are_priced_independently() {
    let oracle = TestOracle::new();
    let engine = FeeEngine::new(reference_config(), &oracle);

    let calm_pool = PoolId::from_bytes([10u8; 32]);
    let calm_short = FeedId::from_bytes([11u8; 32]);
    let calm_long = FeedId::from_bytes([12u8; 32]);
    oracle.set(calm_short, 0);
    oracle.set(calm_long, 0);
    let Ok(()) = engine.configure_feed(calm_pool, calm_short, calm_long, 5) else {
        panic!("feeds bound");
    };

    let wild_pool = PoolId::from_bytes([20u8; 32]);
    let wild_short = FeedId::from_bytes([21u8; 32]);
    let wild_long = FeedId::from_bytes([22u8; 32]);
    oracle.set(wild_short, 5_000_000);
    oracle.set(wild_long, 5_000_000);
    let Ok(()) = engine.configure_feed(wild_pool, wild_short, wild_long, 5) else {
        panic!("feeds bound");
    };

    let unbound_pool = PoolId::from_bytes([30u8; 32]);

    let (Ok(calm), Ok(wild), Ok(unbound)) = (
        engine.get_fee(&calm_pool),
        engine.get_fee(&wild_pool),
        engine.get_fee(&unbound_pool),
    ) else {
        panic!("fees computed");
    };
    assert_eq!(calm, Fee::from_bps(3_000));
    assert_eq!(wild, Fee::from_bps(10_000));
    assert_eq!(unbound, DEFAULT_BASE_FEE);
}

// ---------------------------------------------------------------------------
// Hook surface
// ---------------------------------------------------------------------------

#[test]
fn before_trade_override_carries_the_current_fee() {
    let oracle = TestOracle::new();
    oracle.set(short_feed(), 1_000_000);
    oracle.set(long_feed(), 1_000_000);
    let engine = configured_engine(&oracle);

    let Ok(fee_override) = engine.on_before_trade(&pool()) else {
        panic!("override produced");
    };
    assert_eq!(fee_override.fee(), Fee::from_bps(6_500));

    // The override is per trade: moving the market changes the next one.
    oracle.set(short_feed(), 0);
    oracle.set(long_feed(), 0);
    let Ok(next_override) = engine.on_before_trade(&pool()) else {
        panic!("override produced");
    };
    assert_eq!(next_override.fee(), Fee::from_bps(3_000));
}
