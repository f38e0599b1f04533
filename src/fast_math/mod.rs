// ============================================================================
// Fast Math Module
// Fixed-point transcendental routines for cores without an FPU sqrt
// ============================================================================
//
// This module contains:
// - primitives: leading-zero count, Q63 multiply-shift, inverse sqrt seed
// - sqrt: the Q31 square root routine
// - batch: slice driver applying the routine element-wise

pub mod primitives;

mod batch;
mod sqrt;

pub use batch::{sqrt_q31_slice, BatchReport};
pub use sqrt::{sqrt_q31, NEWTON_ITERATIONS};
