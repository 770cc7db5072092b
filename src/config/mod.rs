//! Construction-time configuration.
//!
//! This module contains [`CurveConfig`], the immutable blueprint for the
//! fee curve: the fee bounds and the base curve parameters. Validation
//! happens once at construction; a successfully built config is valid
//! for the lifetime of the engine.

mod curve;

pub use curve::CurveConfig;
