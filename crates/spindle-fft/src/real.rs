//! Real-data transform plans.
//!
//! `Forward` lifts real samples into the complex domain and keeps the
//! half spectrum plus the Nyquist bin; `Backward` reconstructs real
//! samples from a complex spectrum, discarding residual imaginary
//! parts. Both reuse the complex kernels; the lift/projection workspace
//! is allocated once at plan time.

use spindle_core::{validate_lengths, Complex32, Direction, PlanError, PlanOptions};

use crate::kernel::Kernel;
use crate::plan::scale;

/// A reusable real-to-complex (`Forward`) or complex-to-real
/// (`Backward`) transform plan.
///
/// A forward execution writes bins `0..=n/2` of the frequency buffer
/// and leaves the remainder untouched. A backward execution writes
/// `m` samples into the front of the sample buffer, where `m` is the
/// frequency buffer's length.
#[derive(Debug)]
pub struct RealPlan {
    kernel: Kernel,
    samples: Vec<f32>,
    freq: Vec<Complex32>,
    /// Complex lift of the real input; forward direction only.
    lifted: Vec<Complex32>,
    /// Kernel destination workspace.
    work: Vec<Complex32>,
    direction: Direction,
    options: PlanOptions,
}

impl RealPlan {
    pub(crate) fn new(
        samples: Vec<f32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<RealPlan, PlanError> {
        validate_lengths(direction, samples.len(), freq.len())?;
        let n = match direction {
            Direction::Forward => samples.len(),
            Direction::Backward => freq.len(),
        };
        let lifted = match direction {
            Direction::Forward => vec![Complex32::ZERO; n],
            Direction::Backward => Vec::new(),
        };
        Ok(Self {
            kernel: Kernel::for_len(n),
            samples,
            freq,
            lifted,
            work: vec![Complex32::ZERO; n],
            direction,
            options,
        })
    }

    /// Run the transform.
    ///
    /// The destination is scaled by `1/n` afterwards unless the plan was
    /// created with `scale_output` cleared.
    pub fn execute(&mut self) -> Result<(), PlanError> {
        let n = self.kernel.len();
        match self.direction {
            Direction::Forward => {
                for (lifted, &sample) in self.lifted.iter_mut().zip(&self.samples) {
                    *lifted = Complex32::new(sample, 0.0);
                }
                self.kernel.execute(&self.lifted, &mut self.work, false);
                if self.options.scale_output {
                    scale(&mut self.work);
                }
                let bins = n / 2 + 1;
                self.freq[..bins].copy_from_slice(&self.work[..bins]);
            }
            Direction::Backward => {
                self.kernel.execute(&self.freq, &mut self.work, true);
                for (sample, value) in self.samples[..n].iter_mut().zip(&self.work) {
                    *sample = value.re;
                }
                if self.options.scale_output {
                    let factor = 1.0 / n as f32;
                    for sample in &mut self.samples[..n] {
                        *sample *= factor;
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of points the transform operates on (the source length).
    #[must_use]
    pub fn transform_len(&self) -> usize {
        self.kernel.len()
    }

    /// Direction this plan was created with.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Real sample buffer.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Mutable real sample buffer, for refilling between executions.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Frequency-domain buffer.
    #[must_use]
    pub fn freq(&self) -> &[Complex32] {
        &self.freq
    }

    /// Mutable frequency-domain buffer, for refilling between executions.
    pub fn freq_mut(&mut self) -> &mut [Complex32] {
        &mut self.freq
    }

    /// Consume the plan and recover its buffers as `(samples, freq)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f32>, Vec<Complex32>) {
        (self.samples, self.freq)
    }
}
