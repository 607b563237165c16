//! Plan construction entry points and the broker-facing seam.

use spindle_core::{Complex32, Direction, PlanError, PlanOptions};

use crate::affinity::ThreadAffinity;
use crate::plan::Plan;
use crate::real::RealPlan;

/// The planning interface the broker forwards requests to.
///
/// The production implementor is [`Planner`]; tests substitute
/// instrumented sources to observe call serialization. Implementations
/// are invoked from exactly one thread at a time — the broker's pinned
/// worker — and never concurrently with themselves.
pub trait PlanSource: Send {
    /// Create a complex-to-complex plan.
    fn plan(
        &self,
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Plan, PlanError>;

    /// Create a real-to-complex (`Forward`) or complex-to-real
    /// (`Backward`) plan.
    fn plan_real(
        &self,
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<RealPlan, PlanError>;
}

/// Thread-affine plan factory.
///
/// The first thread to create a plan owns the planner: planning from
/// any other thread fails with [`PlanError::NonAffineThread`]. Route
/// requests through a broker when multiple threads need plans.
#[derive(Debug, Default)]
pub struct Planner {
    affinity: ThreadAffinity,
}

impl Planner {
    /// A planner with an unclaimed thread affinity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            affinity: ThreadAffinity::new(),
        }
    }

    /// The affinity guard, for inspecting which thread owns planning.
    #[must_use]
    pub fn affinity(&self) -> &ThreadAffinity {
        &self.affinity
    }

    /// Create a complex-to-complex plan on the calling thread.
    pub fn plan(
        &self,
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Plan, PlanError> {
        self.affinity.verify()?;
        Plan::new(time, freq, direction, options)
    }

    /// Create a real-data plan on the calling thread.
    pub fn plan_real(
        &self,
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<RealPlan, PlanError> {
        self.affinity.verify()?;
        RealPlan::new(samples, freq, direction, options)
    }
}

impl PlanSource for Planner {
    fn plan(
        &self,
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Plan, PlanError> {
        Planner::plan(self, time, freq, direction, options)
    }

    fn plan_real(
        &self,
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<RealPlan, PlanError> {
        Planner::plan_real(self, samples, freq, direction, options)
    }
}
