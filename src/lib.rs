// ============================================================================
// Q31 Square Root Library
// Deterministic fixed-point square root for FPU-less numeric pipelines
// ============================================================================

//! # Q31 Square Root
//!
//! Square root of signed Q31 fixed-point values (31 fractional bits) without
//! a hardware floating-point square root.
//!
//! ## Features
//!
//! - **Constant-time core**: range reduction, a fast inverse square root
//!   seed and exactly three Newton-Raphson steps
//! - **No overflow** in intermediate products, all routed through a
//!   64-bit Q63 intermediate
//! - **Status codes** instead of panics: non-positive input yields zero and
//!   `MathStatus::ArgumentError`
//! - **Allocation-free** scalar routine and slice driver
//!
//! ## Example
//!
//! ```rust
//! use q31_sqrt::prelude::*;
//!
//! // sqrt(0.5) ~= 0.70710678
//! let (root, status) = sqrt_q31(Q31::HALF);
//! assert_eq!(status, MathStatus::Success);
//! assert!((root.raw_value() - 0x5a82_799a).abs() <= 4);
//!
//! // Zero and negative inputs are rejected
//! let (root, status) = Q31::MIN.fixed_sqrt();
//! assert_eq!(status, MathStatus::ArgumentError);
//! assert_eq!(root, Q31::ZERO);
//!
//! // Result-based form
//! let quarter: Q31 = "0.25".parse().unwrap();
//! println!("sqrt({}) = {}", quarter, quarter.checked_sqrt().unwrap());
//! ```

pub mod fast_math;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::fast_math::{sqrt_q31, sqrt_q31_slice, BatchReport, NEWTON_ITERATIONS};
    pub use crate::interfaces::FixedSqrt;
    pub use crate::numeric::{MathStatus, NumericError, NumericResult, Q31, Q63};
}
