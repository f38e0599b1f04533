// ============================================================================
// Fast-Math Primitives
// Bit counting, widened multiply-shift and the float-seeded inverse sqrt
// ============================================================================

use crate::numeric::Q63;

/// Magic constant of the classic fast inverse square root.
pub const INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Scale from a raw Q31 word to its real value (2^-31).
const Q31_TO_F32: f32 = 1.0 / 2_147_483_648.0;

/// Scale of the fixed-point seed (2^30).
const Q30_SCALE: f32 = 1_073_741_824.0;

/// Number of zero bits above the most significant set bit.
///
/// Returns 32 for zero and 0 for any negative value.
#[inline]
pub const fn count_leading_zeros(value: i32) -> u32 {
    value.leading_zeros()
}

/// Multiply two 32-bit words in the Q63 intermediate, shift right
/// (arithmetic), and narrow back to 32 bits.
///
/// Narrowing keeps the low 32 bits of the shifted product.
#[inline]
pub const fn mul_shift(a: i32, b: i32, shift: u32) -> i32 {
    ((a as Q63 * b as Q63) >> shift) as i32
}

/// Q31 × Q31 product renormalized to the scale of the left operand.
#[inline]
pub const fn mul_q31(a: i32, b: i32) -> i32 {
    mul_shift(a, b, 31)
}

/// Initial estimate of `1/sqrt(x)` for a positive raw Q31 word, in Q30.
///
/// The word is converted to an IEEE-754 single, its bit pattern is run
/// through the magic-constant transform, and the resulting float is
/// scaled back to fixed point. The float-to-int conversion saturates,
/// though no normalized input reaches the saturation bound.
#[inline]
pub fn inv_sqrt_seed(number: i32) -> i32 {
    let x = number as f32 * Q31_TO_F32;
    let bits = INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1);

    (f32::from_bits(bits) * Q30_SCALE) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_leading_zeros() {
        assert_eq!(count_leading_zeros(0), 32);
        assert_eq!(count_leading_zeros(1), 31);
        assert_eq!(count_leading_zeros(0x4000_0000), 1);
        assert_eq!(count_leading_zeros(i32::MAX), 1);
        assert_eq!(count_leading_zeros(-1), 0);
    }

    #[test]
    fn test_mul_q31() {
        // 0.5 * 0.5 = 0.25
        assert_eq!(mul_q31(0x4000_0000, 0x4000_0000), 0x2000_0000);
        // -0.5 * 0.5 = -0.25
        assert_eq!(mul_q31(-0x4000_0000, 0x4000_0000), -0x2000_0000);
        // arithmetic shift rounds toward negative infinity
        assert_eq!(mul_q31(-1, 1), -1);
        assert_eq!(mul_q31(1, 1), 0);
    }

    #[test]
    fn test_mul_shift_no_intermediate_overflow() {
        // Would overflow in 32 bits, fits in the Q63 intermediate
        assert_eq!(mul_shift(i32::MAX, i32::MAX, 31), 0x7fff_fffe);
        assert_eq!(mul_shift(i32::MIN, i32::MAX, 31), -0x7fff_ffff);
    }

    #[test]
    fn test_inv_sqrt_seed_bit_pattern() {
        // 0.5 has bits 0x3f00_0000; the transform yields 0x3fb7_59df
        let x = 0x4000_0000 as f32 * Q31_TO_F32;
        assert_eq!(x.to_bits(), 0x3f00_0000);
        assert_eq!(INV_SQRT_MAGIC - (x.to_bits() >> 1), 0x3fb7_59df);
    }

    #[test]
    fn test_inv_sqrt_seed_values() {
        assert_eq!(inv_sqrt_seed(0x4000_0000), 1_538_060_160);
        assert_eq!(inv_sqrt_seed(0x2000_0000), 2_074_931_072);
        assert_eq!(inv_sqrt_seed(0x6000_0000), 1_269_624_704);
        // i32::MAX rounds up to 1.0 as a float
        assert_eq!(inv_sqrt_seed(i32::MAX), 1_037_465_536);
    }

    #[test]
    fn test_inv_sqrt_seed_accuracy() {
        // Within 4% of the true inverse square root across the normalized range
        for raw in [0x2000_0000, 0x3000_0000, 0x4000_0000, 0x5555_5555, 0x7fff_ffff] {
            let x = raw as f64 / 2_147_483_648.0;
            let exact = (1.0 / x.sqrt()) * 1_073_741_824.0;
            let seed = inv_sqrt_seed(raw) as f64;
            assert!(
                ((seed - exact) / exact).abs() < 0.04,
                "seed for {:#x} too far off: {} vs {}",
                raw,
                seed,
                exact
            );
        }
    }
}
