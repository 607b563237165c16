//! Test fixtures and instrumented collaborators for spindle development.
//!
//! Provides deterministic signal generators ([`real_cw`],
//! [`complex_cw`], [`seeded_noise`]) and [`CountingSource`], an
//! instrumented [`PlanSource`](spindle_fft::PlanSource) that records
//! how and where planning calls execute.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod probes;

pub use fixtures::{complex_cw, real_cw, seeded_noise};
pub use probes::{CountingSource, ProbeEvent, ProbeHandle};
