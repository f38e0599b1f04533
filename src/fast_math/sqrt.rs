// ============================================================================
// Q31 Square Root
// Range reduction + fast inverse sqrt seed + fixed Newton-Raphson refinement
// ============================================================================

use super::primitives::{count_leading_zeros, inv_sqrt_seed, mul_q31};
use crate::numeric::{MathStatus, NumericResult, Q31, Q63};

/// Number of Newton-Raphson refinement steps. Fixed, never data-dependent.
pub const NEWTON_ITERATIONS: usize = 3;

/// 1.5 at the Q29 scale used inside the refinement step.
const THREE_HALVES_Q29: Q63 = 0x3000_0000;

/// One Newton-Raphson step for `y ≈ 1/sqrt(x)`: `y * (1.5 - (x/2) * y^2)`.
///
/// `y` is in Q30, `half` is `x/2` in Q31. Every product is formed in the
/// Q63 intermediate.
#[inline(always)]
fn newton_step(y: i32, half: i32) -> i32 {
    let y_squared = mul_q31(y, y);
    let half_x_y_squared = mul_q31(y_squared, half);
    let correction = THREE_HALVES_Q29 - half_x_y_squared as Q63;

    (((y as Q63 * correction) >> 31) as i32) << 2
}

/// Square root of a Q31 value.
///
/// Returns the root and `MathStatus::Success` for positive input. For zero
/// or negative input the output is `Q31::ZERO` and the status is
/// `MathStatus::ArgumentError`.
///
/// The input is normalized by an even left shift, refined through a
/// fixed number of Newton-Raphson steps on its inverse square root, then
/// descaled by half the shift. Execution time does not depend on the
/// input value.
///
/// # Example
/// ```
/// use q31_sqrt::fast_math::sqrt_q31;
/// use q31_sqrt::numeric::{MathStatus, Q31};
///
/// let (root, status) = sqrt_q31(Q31::from_raw(0x2000_0000)); // sqrt(0.25)
/// assert_eq!(status, MathStatus::Success);
/// assert!((root.raw_value() - 0x4000_0000).abs() <= 2);
///
/// let (root, status) = sqrt_q31(Q31::ZERO);
/// assert_eq!(status, MathStatus::ArgumentError);
/// assert_eq!(root, Q31::ZERO);
/// ```
pub fn sqrt_q31(input: Q31) -> (Q31, MathStatus) {
    let number = input.raw_value();
    if number <= 0 {
        return (Q31::ZERO, MathStatus::ArgumentError);
    }

    // Redundant bits above the top set bit, rounded down to an even count
    // so the root can be descaled by exactly half the shift.
    let sign_bits = count_leading_zeros(number) - 1;
    let shift = sign_bits & !1;

    let normalized = number << shift;
    let half = normalized >> 1;

    let mut inv_sqrt = inv_sqrt_seed(normalized);
    for _ in 0..NEWTON_ITERATIONS {
        inv_sqrt = newton_step(inv_sqrt, half);
    }

    // x * (1/sqrt(x)) lands in Q30, one more bit brings it to Q31
    let root = mul_q31(normalized, inv_sqrt) << 1;

    (Q31::from_raw(root >> (shift / 2)), MathStatus::Success)
}

impl Q31 {
    /// Square root as a `Result`.
    ///
    /// # Errors
    /// Returns `ArgumentError` if `self` is zero or negative.
    #[inline]
    pub fn checked_sqrt(self) -> NumericResult<Self> {
        let (root, status) = sqrt_q31(self);
        status.into_result(root)
    }
}
