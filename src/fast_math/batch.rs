// ============================================================================
// Slice Driver
// Element-wise square root over source/destination buffers
// ============================================================================

use super::sqrt::sqrt_q31;
use crate::numeric::{NumericError, NumericResult, Q31};

/// Outcome of a slice run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// Elements written to the destination
    pub processed: usize,
    /// Elements rejected with `ArgumentError` (written as zero)
    pub rejected: usize,
}

impl BatchReport {
    /// True when every element was in the domain.
    #[inline]
    pub fn all_succeeded(&self) -> bool {
        self.rejected == 0
    }
}

/// Compute `dst[i] = sqrt(src[i])` for every element.
///
/// Rejected elements are written as zero and counted; the run never stops
/// early. Nothing is allocated.
///
/// # Errors
/// Returns `LengthMismatch` without touching `dst` when the slices differ
/// in length.
pub fn sqrt_q31_slice(src: &[Q31], dst: &mut [Q31]) -> NumericResult<BatchReport> {
    if src.len() != dst.len() {
        return Err(NumericError::LengthMismatch);
    }

    let mut report = BatchReport {
        processed: src.len(),
        rejected: 0,
    };

    for (input, out) in src.iter().zip(dst.iter_mut()) {
        let (root, status) = sqrt_q31(*input);
        *out = root;
        if !status.is_success() {
            report.rejected += 1;
        }
    }

    if report.all_succeeded() {
        tracing::trace!(processed = report.processed, "q31 sqrt slice complete");
    } else {
        tracing::debug!(
            processed = report.processed,
            rejected = report.rejected,
            "q31 sqrt slice rejected non-positive inputs"
        );
    }

    Ok(report)
}
