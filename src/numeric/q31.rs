// ============================================================================
// Q31 Fixed-Point Value
// Signed fractional number with 31 fractional bits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::Q63;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed Q31 fixed-point number.
///
/// Internally stores `value × 2^31` as an i32, so the representable
/// range is [-1, 1) with a resolution of 2^-31.
///
/// # Example
/// ```
/// use q31_sqrt::numeric::Q31;
///
/// let half: Q31 = "0.5".parse().unwrap();
/// assert_eq!(half, Q31::HALF);
/// assert_eq!(half.raw_value(), 0x4000_0000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Q31(i32);

impl Q31 {
    /// Number of fractional bits
    pub const FRAC_BITS: u32 = 31;

    /// The scale factor (2^31)
    pub const SCALE: Q63 = 1 << Self::FRAC_BITS;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One half (0.5)
    pub const HALF: Self = Self(0x4000_0000);

    /// Largest representable value, just below 1.0
    pub const MAX: Self = Self(i32::MAX);

    /// Smallest representable value (-1.0)
    pub const MIN: Self = Self(i32::MIN);

    /// One least-significant bit (2^-31)
    pub const EPSILON: Self = Self(1);

    // ========================================================================
    // Construction / Accessors
    // ========================================================================

    /// Create from the raw Q31 word.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw Q31 word.
    #[inline]
    pub const fn raw_value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked Q31 multiplication, truncating toward negative infinity.
    ///
    /// The product is formed in the Q63 intermediate. `-1 × -1` is the only
    /// pair that does not fit back into Q31.
    ///
    /// # Errors
    /// Returns `Overflow` if the product is 1.0.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let product = (self.0 as Q63 * rhs.0 as Q63) >> Self::FRAC_BITS;
        i32::try_from(product)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Decimal conversion (API boundaries only)
    // ========================================================================

    /// Convert from `rust_decimal::Decimal`, truncating toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is outside [-1, 1).
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;
        let raw = scaled.trunc().to_i64().ok_or(NumericError::Overflow)?;

        i32::try_from(raw)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Exact up to Decimal's 28 fractional digits. Intended for display and
    /// debugging.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(Self::SCALE)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Q31 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q31({}, raw={:#010x})", self, self.0)
    }
}

impl fmt::Display for Q31 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Q31 {
    type Err = NumericError;

    /// Parse from a decimal string such as `"0.25"` or `"-1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let d: Decimal = s.parse().map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(d)
    }
}

impl From<Q31> for i32 {
    #[inline]
    fn from(value: Q31) -> Self {
        value.0
    }
}
