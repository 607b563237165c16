//! Error types for transform planning, organized by subsystem: the
//! planner itself and the broker that serializes access to it.

use std::error::Error;
use std::fmt;

use crate::transform::Direction;

/// Errors from plan construction.
///
/// Every variant is surfaced to the caller as a value; the planner never
/// panics on bad input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The destination buffer is shorter than the source buffer for the
    /// requested direction. Recoverable: resize and retry.
    DstTooSmall {
        /// Requested transform direction.
        direction: Direction,
        /// Length of the buffer the transform reads from.
        src_len: usize,
        /// Length of the buffer the transform writes into.
        dst_len: usize,
    },
    /// The transform source buffer is empty.
    EmptyBuffer {
        /// Requested transform direction.
        direction: Direction,
    },
    /// A planning call was attempted off the planner's designated thread.
    ///
    /// The planner caches thread-local state across planning calls, so
    /// the first thread to plan owns the planner for its lifetime. Fatal
    /// to this call only, never to the process.
    NonAffineThread,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DstTooSmall {
                direction,
                src_len,
                dst_len,
            } => write!(
                f,
                "destination too small for {direction} transform: source {src_len}, destination {dst_len}"
            ),
            Self::EmptyBuffer { direction } => {
                write!(f, "{direction} transform source buffer is empty")
            }
            Self::NonAffineThread => {
                write!(f, "plans must be created on the planner's designated thread")
            }
        }
    }
}

impl Error for PlanError {}

/// Errors from submitting a planning request through the broker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrokerError {
    /// The broker's cancellation signal has fired; no further requests
    /// are accepted and pending ones have been failed. Not retryable on
    /// this broker instance.
    Closed,
    /// The planning call itself failed; the planner's error is passed
    /// through verbatim to the caller that issued the request.
    Plan(PlanError),
}

impl fmt::Display for BrokerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "plan broker is closed"),
            Self::Plan(e) => write!(f, "planning failed: {e}"),
        }
    }
}

impl Error for BrokerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Plan(e) => Some(e),
            Self::Closed => None,
        }
    }
}

impl From<PlanError> for BrokerError {
    fn from(e: PlanError) -> Self {
        Self::Plan(e)
    }
}
