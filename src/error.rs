//! Unified error types for the sigma-fee library.
//!
//! All fallible operations across the crate return [`FeeError`] as their
//! error type. Every variant is fatal for the current invocation: nothing
//! is retried or recovered internally, errors propagate to the immediate
//! caller. The single designed fallback (unconfigured pool resolves to
//! the base fee) is an `Ok` path, not an error.

use thiserror::Error;

/// Unified error enum for all fee-engine operations.
///
/// Arithmetic variants carry a `&'static str` describing the failing
/// operation so callers can distinguish, say, a sigmoid overflow from a
/// fee-conversion overflow without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeeError {
    /// Construction-time configuration violation, e.g. a minimum fee at
    /// or above the maximum fee, or a non-positive curve steepness.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A fee bound outside the valid percentage range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Feed decimal precision outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Pool initialization was attempted without the dynamic fee flag.
    #[error("pool is not configured for dynamic fees")]
    FeeModeNotDynamic,

    /// A feed binding was deleted for a pool that has none.
    #[error("no feed binding configured for pool")]
    NotConfigured,

    /// The external volatility feed could not produce a reading.
    #[error("feed read failure: {0}")]
    FeedRead(&'static str),

    /// A fixed-point operation exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A fixed-point subtraction fell below the representable range.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero in fixed-point arithmetic.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, FeeError>;
