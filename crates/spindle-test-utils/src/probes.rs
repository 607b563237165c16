//! Instrumented plan sources for concurrency tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

use spindle_core::{Complex32, Direction, PlanError, PlanOptions};
use spindle_fft::{Plan, PlanSource, Planner, RealPlan};

/// One record in a probe's ordered event log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeEvent {
    /// A planning call entered with this transform length.
    Enter(usize),
    /// A planning call exited with this transform length.
    Exit(usize),
}

#[derive(Default)]
struct ProbeState {
    entered: AtomicUsize,
    exited: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    threads: Mutex<Vec<ThreadId>>,
    events: Mutex<Vec<ProbeEvent>>,
}

/// Shared view onto a [`CountingSource`]'s counters, usable after the
/// source has been boxed and moved into a broker.
#[derive(Clone)]
pub struct ProbeHandle {
    state: Arc<ProbeState>,
}

impl ProbeHandle {
    /// Planning calls started.
    pub fn entered(&self) -> usize {
        self.state.entered.load(Ordering::SeqCst)
    }

    /// Planning calls finished.
    pub fn exited(&self) -> usize {
        self.state.exited.load(Ordering::SeqCst)
    }

    /// Highest number of overlapping planning calls ever observed.
    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }

    /// Thread id of every planning call, in call order.
    pub fn thread_ids(&self) -> Vec<ThreadId> {
        self.state.threads.lock().unwrap().clone()
    }

    /// Ordered enter/exit log.
    pub fn events(&self) -> Vec<ProbeEvent> {
        self.state.events.lock().unwrap().clone()
    }
}

/// Instrumented [`PlanSource`] wrapping a real [`Planner`].
///
/// Records entry/exit counts, the maximum number of overlapping calls,
/// the thread id of every call, and an ordered event log. An optional
/// service delay widens race windows in concurrency tests.
#[derive(Default)]
pub struct CountingSource {
    inner: Planner,
    delay: Option<Duration>,
    state: Arc<ProbeState>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that sleeps for `delay` inside every planning call.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// A handle that keeps reading the counters after the source moves
    /// into a broker.
    pub fn handle(&self) -> ProbeHandle {
        ProbeHandle {
            state: Arc::clone(&self.state),
        }
    }

    fn enter(&self, transform_len: usize) {
        self.state.entered.fetch_add(1, Ordering::SeqCst);
        let now = self.state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.state.threads.lock().unwrap().push(thread::current().id());
        self.state
            .events
            .lock()
            .unwrap()
            .push(ProbeEvent::Enter(transform_len));
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
    }

    fn exit(&self, transform_len: usize) {
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.state.exited.fetch_add(1, Ordering::SeqCst);
        self.state
            .events
            .lock()
            .unwrap()
            .push(ProbeEvent::Exit(transform_len));
    }
}

impl PlanSource for CountingSource {
    fn plan(
        &self,
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Plan, PlanError> {
        let n = match direction {
            Direction::Forward => time.len(),
            Direction::Backward => freq.len(),
        };
        self.enter(n);
        let result = self.inner.plan(time, freq, direction, options);
        self.exit(n);
        result
    }

    fn plan_real(
        &self,
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<RealPlan, PlanError> {
        let n = match direction {
            Direction::Forward => samples.len(),
            Direction::Backward => freq.len(),
        };
        self.enter(n);
        let result = self.inner.plan_real(samples, freq, direction, options);
        self.exit(n);
        result
    }
}
