//! The pinned worker loop.
//!
//! Runs once, on one OS thread, for the broker's whole life. The plan
//! source is moved in and owned exclusively; no lock guards the
//! planning call because this loop is the only caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{select, Receiver};

use spindle_fft::PlanSource;

use crate::cancel::CancelSignal;
use crate::request::PlanRequest;

/// Serve requests one at a time, in submission order, until the
/// cancellation signal fires or every request sender is gone.
pub(crate) fn worker_loop(
    source: Box<dyn PlanSource>,
    req_rx: Receiver<PlanRequest>,
    cancel: CancelSignal,
    stopped: Arc<AtomicBool>,
) {
    loop {
        select! {
            recv(req_rx) -> msg => match msg {
                Ok(req) => req.serve(source.as_ref()),
                // Every sender dropped: the broker itself is gone.
                Err(_) => break,
            },
            recv(cancel.rx) -> _ => {
                // The cancellation channel never carries messages; this
                // arm fires on disconnect. Drain what is already queued,
                // then stop consuming. Dropping a request unblocks its
                // caller with `Closed`.
                while let Ok(req) = req_rx.try_recv() {
                    drop(req);
                }
                break;
            }
        }
    }
    stopped.store(true, Ordering::Release);
}
