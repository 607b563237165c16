//! Thread-affine request broker for transform planning.
//!
//! Planning is not safe to invoke from arbitrary threads: the planner
//! requires that every planning call originate from one fixed OS
//! thread for its lifetime. [`PlanBroker`] hides that constraint behind
//! a concurrency-safe facade — it pins one dedicated worker thread,
//! accepts requests from any number of concurrent callers, executes
//! each request exclusively on the pinned thread in submission order,
//! and returns the result to the caller that issued it.
//!
//! # Architecture
//!
//! ```text
//! Caller Thread(s)                  Pinned Worker (spindle-plan)
//!     |                                  |
//!     |--request()---------------------->| select! {
//!     |   validate lengths locally       |   recv(req_rx) -> serve,
//!     |   [req_tx: bounded(64)]          |   recv(cancel) -> drain + exit,
//!     |   blocks on reply_rx             | }
//!     |<--plan via reply_tx (bounded 1)--|
//! ```
//!
//! Cancellation fires once, transitions the broker `Running → Closed`,
//! and fails queued-but-unserviced requests instead of leaving their
//! callers blocked.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod broker;
pub mod cancel;
mod request;
mod worker;

pub use broker::PlanBroker;
pub use cancel::{cancel_pair, CancelSignal, CancelToken};
