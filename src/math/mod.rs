//! Deterministic arithmetic for fee computation.
//!
//! This module provides [`FixedPoint`], the signed 64.64 fixed-point
//! number type backing every intermediate value in the fee curve. All
//! operations are checked and bit-for-bit reproducible; native floating
//! point never enters non-test code.

mod fixed_point;

pub use fixed_point::FixedPoint;
