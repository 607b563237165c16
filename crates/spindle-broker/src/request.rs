//! Request envelopes carried from caller threads to the pinned worker.

use crossbeam_channel::Sender;

use spindle_core::{Complex32, Direction, PlanError, PlanOptions};
use spindle_fft::{Plan, PlanSource, RealPlan};

/// A planning request plus its single-use reply channel.
///
/// Dropping a request without serving it closes the reply channel,
/// which the blocked caller observes as
/// [`BrokerError::Closed`](spindle_core::BrokerError::Closed). That
/// makes drain-and-fail on shutdown a plain `drop`.
pub(crate) enum PlanRequest {
    /// Complex-to-complex plan.
    Complex {
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
        reply: Sender<Result<Plan, PlanError>>,
    },
    /// Real-to-complex / complex-to-real plan.
    Real {
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
        reply: Sender<Result<RealPlan, PlanError>>,
    },
}

impl PlanRequest {
    /// Serve this request against `source` and deliver the result.
    pub fn serve(self, source: &dyn PlanSource) {
        match self {
            Self::Complex {
                time,
                freq,
                direction,
                options,
                reply,
            } => {
                // Best-effort reply — the caller may have given up.
                let _ = reply.send(source.plan(time, freq, direction, options));
            }
            Self::Real {
                samples,
                freq,
                direction,
                options,
                reply,
            } => {
                let _ = reply.send(source.plan_real(samples, freq, direction, options));
            }
        }
    }
}
