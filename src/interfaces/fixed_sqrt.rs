// ============================================================================
// Fixed Square Root Interface
// Contract for fixed-point types that provide a status-returning sqrt
// ============================================================================

use crate::fast_math::sqrt_q31;
use crate::numeric::{MathStatus, Q31};

/// Fixed-point square root returning the result together with a status.
///
/// Implementations must be pure: the same input always yields the same
/// bit pattern, and a non-`Success` status always comes with a zero output.
pub trait FixedSqrt: Sized {
    /// Square root of `self` plus the outcome of the computation.
    fn fixed_sqrt(self) -> (Self, MathStatus);
}

impl FixedSqrt for Q31 {
    #[inline]
    fn fixed_sqrt(self) -> (Self, MathStatus) {
        sqrt_q31(self)
    }
}

/// Raw Q31 words.
impl FixedSqrt for i32 {
    #[inline]
    fn fixed_sqrt(self) -> (Self, MathStatus) {
        let (root, status) = sqrt_q31(Q31::from_raw(self));
        (root.raw_value(), status)
    }
}
