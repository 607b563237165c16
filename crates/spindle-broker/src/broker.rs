//! The thread-affine plan broker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use spindle_core::{validate_lengths, BrokerError, Complex32, Direction, PlanOptions};
use spindle_fft::{Plan, PlanSource, Planner, RealPlan};

use crate::cancel::CancelSignal;
use crate::request::PlanRequest;
use crate::worker::worker_loop;

/// Depth of the request queue. Submissions beyond this block until the
/// worker catches up; order is preserved either way.
const REQUEST_QUEUE_DEPTH: usize = 64;

/// Serializes transform planning onto one dedicated OS thread.
///
/// The planner caches thread-local state across planning calls, so
/// every plan must be created on the same fixed thread for the life of
/// the planner. `PlanBroker` owns that thread: any number of caller
/// threads may [`request`](PlanBroker::request) plans concurrently;
/// each request crosses to the pinned worker, is served one at a time
/// in submission order, and its result is handed back to the caller
/// that issued it. The call is synchronous from the caller's point of
/// view.
///
/// The broker runs until its cancellation signal fires (state machine
/// `Running → Closed`, one-way). After that, new requests fail with
/// [`BrokerError::Closed`] and requests still queued are failed rather
/// than left hanging. A planning call already in progress when the
/// signal fires runs to completion.
#[derive(Debug)]
pub struct PlanBroker {
    req_tx: Option<Sender<PlanRequest>>,
    worker: Option<JoinHandle<()>>,
    fired: Arc<AtomicBool>,
    stopped: Arc<AtomicBool>,
}

impl PlanBroker {
    /// Spawn a broker around the production [`Planner`].
    ///
    /// The worker thread starts immediately and owns the planner for
    /// its entire life; the binding is never released between requests.
    /// Failure to spawn the thread is fatal to construction.
    #[must_use]
    pub fn new(signal: CancelSignal) -> Self {
        Self::with_source(signal, Box::new(Planner::new()))
    }

    /// Spawn a broker around an arbitrary [`PlanSource`].
    #[must_use]
    pub fn with_source(signal: CancelSignal, source: Box<dyn PlanSource>) -> Self {
        let (req_tx, req_rx) = crossbeam_channel::bounded(REQUEST_QUEUE_DEPTH);
        let fired = Arc::clone(&signal.fired);
        let stopped = Arc::new(AtomicBool::new(false));
        let worker_stopped = Arc::clone(&stopped);
        let worker = thread::Builder::new()
            .name("spindle-plan".into())
            .spawn(move || worker_loop(source, req_rx, signal, worker_stopped))
            .expect("failed to spawn plan worker thread");
        Self {
            req_tx: Some(req_tx),
            worker: Some(worker),
            fired,
            stopped,
        }
    }

    /// Request a complex-to-complex plan with default options.
    ///
    /// Blocks the calling thread until the pinned worker has served the
    /// request (or the broker closes). Buffer lengths are validated
    /// locally first; a [`PlanError::DstTooSmall`] or
    /// [`PlanError::EmptyBuffer`] failure never reaches the worker.
    ///
    /// [`PlanError::DstTooSmall`]: spindle_core::PlanError::DstTooSmall
    /// [`PlanError::EmptyBuffer`]: spindle_core::PlanError::EmptyBuffer
    pub fn request(
        &self,
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
    ) -> Result<Plan, BrokerError> {
        self.request_with(time, freq, direction, PlanOptions::default())
    }

    /// Request a complex-to-complex plan with explicit options.
    pub fn request_with(
        &self,
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Plan, BrokerError> {
        validate_lengths(direction, time.len(), freq.len())?;
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        self.submit(PlanRequest::Complex {
            time,
            freq,
            direction,
            options,
            reply: reply_tx,
        })?;
        match reply_rx.recv() {
            Ok(result) => result.map_err(BrokerError::Plan),
            // The worker exited, or drained this request on shutdown,
            // before replying.
            Err(_) => Err(BrokerError::Closed),
        }
    }

    /// Request a real-data plan with default options.
    pub fn request_real(
        &self,
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
    ) -> Result<RealPlan, BrokerError> {
        self.request_real_with(samples, freq, direction, PlanOptions::default())
    }

    /// Request a real-data plan with explicit options.
    pub fn request_real_with(
        &self,
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<RealPlan, BrokerError> {
        validate_lengths(direction, samples.len(), freq.len())?;
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        self.submit(PlanRequest::Real {
            samples,
            freq,
            direction,
            options,
            reply: reply_tx,
        })?;
        match reply_rx.recv() {
            Ok(result) => result.map_err(BrokerError::Plan),
            Err(_) => Err(BrokerError::Closed),
        }
    }

    /// Whether the broker has stopped accepting requests.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.fired.load(Ordering::Acquire) || self.stopped.load(Ordering::Acquire)
    }

    fn submit(&self, request: PlanRequest) -> Result<(), BrokerError> {
        if self.is_closed() {
            return Err(BrokerError::Closed);
        }
        let req_tx = self.req_tx.as_ref().ok_or(BrokerError::Closed)?;
        req_tx.send(request).map_err(|_| BrokerError::Closed)
    }
}

impl Drop for PlanBroker {
    fn drop(&mut self) {
        // Dropping the sender disconnects the queue; the worker exits
        // at its next wait.
        self.req_tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::cancel_pair;
    use spindle_core::PlanError;
    use spindle_test_utils::CountingSource;

    fn ramp(n: usize) -> Vec<Complex32> {
        (0..n).map(|i| Complex32::new(i as f32, 0.0)).collect()
    }

    #[test]
    fn request_round_trips_through_the_worker() {
        let (_token, signal) = cancel_pair();
        let broker = PlanBroker::new(signal);

        let mut plan = broker
            .request(ramp(8), vec![Complex32::ZERO; 8], Direction::Forward)
            .unwrap();
        plan.execute().unwrap();
        assert!((plan.freq()[0].re - 3.5).abs() < 1e-5);
    }

    #[test]
    fn size_mismatch_fails_before_the_worker_sees_it() {
        let (_token, signal) = cancel_pair();
        let source = CountingSource::new();
        let probe = source.handle();
        let broker = PlanBroker::with_source(signal, Box::new(source));

        let err = broker
            .request(ramp(8), vec![Complex32::ZERO; 4], Direction::Forward)
            .unwrap_err();
        assert_eq!(
            err,
            BrokerError::Plan(PlanError::DstTooSmall {
                direction: Direction::Forward,
                src_len: 8,
                dst_len: 4,
            })
        );
        assert_eq!(probe.entered(), 0);
    }

    #[test]
    fn cancelled_broker_rejects_without_planning() {
        let (token, signal) = cancel_pair();
        let source = CountingSource::new();
        let probe = source.handle();
        let broker = PlanBroker::with_source(signal, Box::new(source));

        token.cancel();
        let err = broker
            .request(ramp(8), vec![Complex32::ZERO; 8], Direction::Forward)
            .unwrap_err();
        assert_eq!(err, BrokerError::Closed);
        assert_eq!(probe.entered(), 0);
        assert!(broker.is_closed());
    }

    #[test]
    fn real_requests_share_the_same_queue() {
        let (_token, signal) = cancel_pair();
        let broker = PlanBroker::new(signal);

        let mut plan = broker
            .request_real(
                vec![1.0f32; 16],
                vec![Complex32::ZERO; 16],
                Direction::Forward,
            )
            .unwrap();
        plan.execute().unwrap();
        assert!((plan.freq()[0].re - 1.0).abs() < 1e-5);
    }

    #[test]
    fn drop_joins_the_worker() {
        let (_token, signal) = cancel_pair();
        let broker = PlanBroker::new(signal);
        drop(broker);
        // If this returns, the worker exited on queue disconnect.
    }
}
