//! Spindle: thread-affine transform planning for multi-threaded
//! applications.
//!
//! The planner backing [`Plan`](fft::Plan) construction caches
//! thread-local state between calls, so all planning must happen on one
//! fixed OS thread. [`PlanBroker`](broker::PlanBroker) owns that
//! thread: callers on any thread submit planning requests and block
//! until the pinned worker has served them, one at a time, in
//! submission order. This is the top-level facade crate that
//! re-exports the public API from the spindle sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use spindle::prelude::*;
//!
//! let (token, signal) = cancel_pair();
//! let broker = PlanBroker::new(signal);
//!
//! // Any thread may request a plan; planning itself happens on the
//! // broker's pinned worker thread.
//! let time: Vec<Complex32> = (0..8)
//!     .map(|i| Complex32::new(i as f32, 0.0))
//!     .collect();
//! let freq = vec![Complex32::ZERO; 8];
//! let mut plan = broker.request(time, freq, Direction::Forward).unwrap();
//! plan.execute().unwrap();
//!
//! // Bin 0 holds the scaled mean of the input.
//! assert!((plan.freq()[0].re - 3.5).abs() < 1e-5);
//!
//! token.cancel();
//! assert!(broker.is_closed());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spindle-core` | Complex samples, direction, options, errors |
//! | [`fft`] | `spindle-fft` | Plans, the planner, the affinity guard |
//! | [`broker`] | `spindle-broker` | The request broker and cancellation pair |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: complex samples, direction, options, and errors
/// (`spindle-core`).
pub use spindle_core as types;

/// Plan construction and execution (`spindle-fft`).
///
/// Contains [`fft::Plan`], [`fft::RealPlan`], the thread-affine
/// [`fft::Planner`], and the [`fft::PlanSource`] seam the broker
/// forwards requests to.
pub use spindle_fft as fft;

/// The thread-affine request broker (`spindle-broker`).
///
/// [`broker::PlanBroker`] serializes planning requests from concurrent
/// callers onto one pinned worker thread;
/// [`broker::cancel_pair`] creates the one-shot cancellation signal
/// that tears it down.
pub use spindle_broker as broker;

/// Common imports for typical spindle usage.
///
/// ```rust
/// use spindle::prelude::*;
/// ```
pub mod prelude {
    pub use spindle_broker::{cancel_pair, CancelSignal, CancelToken, PlanBroker};
    pub use spindle_core::{
        BrokerError, Complex32, Direction, PlanError, PlanOptions,
    };
    pub use spindle_fft::{Plan, PlanSource, Planner, RealPlan};
}
