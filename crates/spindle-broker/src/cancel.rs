//! One-shot cancellation for the plan broker.
//!
//! The pair splits a single settable-once signal into the side that
//! fires it ([`CancelToken`]) and the side the broker's worker observes
//! ([`CancelSignal`]). The signal is visible two ways: a fast flag for
//! pre-enqueue rejection on caller threads, and a channel whose
//! disconnect wakes the worker's `select!` wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crossbeam_channel::{bounded, Receiver, Sender};

/// Create a linked token/signal pair.
#[must_use]
pub fn cancel_pair() -> (CancelToken, CancelSignal) {
    let (tx, rx) = bounded::<()>(0);
    let fired = Arc::new(AtomicBool::new(false));
    (
        CancelToken {
            fired: Arc::clone(&fired),
            guard: Arc::new(Mutex::new(Some(tx))),
        },
        CancelSignal { fired, rx },
    )
}

/// Fires the broker's cancellation signal.
///
/// Clones share the same signal; any clone may fire it, and firing is
/// idempotent. Dropping every clone without calling
/// [`cancel`](CancelToken::cancel) also fires the signal (the channel
/// disconnects), mirroring scope-exit cancellation.
#[derive(Clone, Debug)]
pub struct CancelToken {
    fired: Arc<AtomicBool>,
    guard: Arc<Mutex<Option<Sender<()>>>>,
}

impl CancelToken {
    /// Fire the signal. Safe to call more than once.
    pub fn cancel(&self) {
        self.fired.store(true, Ordering::Release);
        // Dropping the sender disconnects the channel, which is the
        // event the worker's select arm wakes on.
        self.guard.lock().unwrap().take();
    }

    /// Whether the signal has fired via [`cancel`](Self::cancel).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

/// Receive side of the cancellation signal, consumed by
/// [`PlanBroker::new`](crate::PlanBroker::new).
#[derive(Debug)]
pub struct CancelSignal {
    pub(crate) fired: Arc<AtomicBool>,
    pub(crate) rx: Receiver<()>,
}
