// ============================================================================
// Numeric Module
// Fixed-point types for deterministic DSP-style calculations
// ============================================================================
//
// This module provides:
// - Q31: signed fractional value with 31 fractional bits
// - Q63: widened intermediate for Q31 products
// - MathStatus / NumericError: status codes and error types
//
// Design principles:
// - Integer arithmetic only on the value path
// - All fallible operations return Result or a status (no panics)
// - Products go through the 64-bit intermediate, never wrap in 32 bits

mod errors;
mod q31;

pub use errors::{MathStatus, NumericError, NumericResult};
pub use q31::Q31;

/// Widened signed intermediate for products of two Q31 values.
pub type Q63 = i64;
