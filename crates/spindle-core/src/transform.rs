//! Transform direction, plan options, and buffer-length rules.

use std::fmt;

use crate::error::PlanError;

/// Direction of a transform.
///
/// `Forward` converts time-domain samples into frequency bins;
/// `Backward` converts frequency bins into time-domain samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Time domain to frequency domain.
    Forward,
    /// Frequency domain to time domain.
    Backward,
}

impl Direction {
    /// Whether this is the time-to-frequency direction.
    #[must_use]
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Forward)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Options accepted at plan-creation time.
///
/// The destination buffer is scaled by `1/n` after each execution unless
/// `scale_output` is cleared. Unscaled output follows the raw transform
/// convention: values are not normalized into the `-1..=1` range, and a
/// backward transform of a forward transform multiplies by the length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanOptions {
    /// Scale the destination buffer by the reciprocal of the transform
    /// length after execution. Default: `true`.
    pub scale_output: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self { scale_output: true }
    }
}

impl PlanOptions {
    /// Options with output scaling disabled.
    #[must_use]
    pub fn unscaled() -> Self {
        Self {
            scale_output: false,
        }
    }
}

/// Validate time/frequency buffer lengths for `direction`.
///
/// The destination must be at least as long as the source: `Forward`
/// reads `time_len` samples and writes into the frequency buffer,
/// `Backward` reads `freq_len` bins and writes into the time buffer.
/// An empty source is rejected outright.
///
/// This check is pure and cheap; callers run it before a request ever
/// crosses a thread boundary.
pub fn validate_lengths(
    direction: Direction,
    time_len: usize,
    freq_len: usize,
) -> Result<(), PlanError> {
    let (src_len, dst_len) = match direction {
        Direction::Forward => (time_len, freq_len),
        Direction::Backward => (freq_len, time_len),
    };
    if src_len == 0 {
        return Err(PlanError::EmptyBuffer { direction });
    }
    if dst_len < src_len {
        return Err(PlanError::DstTooSmall {
            direction,
            src_len,
            dst_len,
        });
    }
    Ok(())
}
