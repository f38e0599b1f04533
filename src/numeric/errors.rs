// ============================================================================
// Numeric Errors
// Status codes and error types for fixed-point math routines
// ============================================================================

use super::q31::Q31;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status returned alongside every fixed-point math result.
///
/// Only two outcomes exist. On `ArgumentError` the accompanying output
/// is always zero.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathStatus {
    /// The result is valid
    Success,
    /// The input was outside the routine's domain
    ArgumentError,
}

impl MathStatus {
    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, MathStatus::Success)
    }

    /// Pair this status with its output and turn it into a `Result`.
    #[inline]
    pub fn into_result(self, out: Q31) -> NumericResult<Q31> {
        match self {
            MathStatus::Success => Ok(out),
            MathStatus::ArgumentError => Err(NumericError::ArgumentError),
        }
    }
}

impl fmt::Display for MathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathStatus::Success => write!(f, "success"),
            MathStatus::ArgumentError => write!(f, "argument error"),
        }
    }
}

/// Errors that can occur in fixed-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input outside the operation's domain (e.g. sqrt of a non-positive value)
    ArgumentError,
    /// Source and destination slices differ in length
    LengthMismatch,
    /// Result does not fit in [-1, 1)
    Overflow,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::ArgumentError => {
                write!(f, "argument error: input outside the function domain")
            },
            NumericError::LengthMismatch => {
                write!(f, "length mismatch: source and destination differ")
            },
            NumericError::Overflow => write!(f, "overflow: value outside [-1, 1)"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
