//! Complex-to-complex transform plans.
//!
//! A [`Plan`] owns its time-domain and frequency-domain buffers plus the
//! precomputed kernel for its length. Construction validates buffer
//! lengths and builds the kernel once; [`execute`](Plan::execute) may
//! then run any number of times. Release is `Drop`.

use spindle_core::{validate_lengths, Complex32, Direction, PlanError, PlanOptions};

use crate::kernel::Kernel;

/// A reusable complex-to-complex transform plan.
///
/// `Forward` reads the whole time buffer and writes that many bins into
/// the front of the frequency buffer; `Backward` reads the whole
/// frequency buffer and writes that many samples into the front of the
/// time buffer. The destination may be longer than the source; the
/// excess is left untouched.
#[derive(Debug)]
pub struct Plan {
    kernel: Kernel,
    time: Vec<Complex32>,
    freq: Vec<Complex32>,
    direction: Direction,
    options: PlanOptions,
}

impl Plan {
    pub(crate) fn new(
        time: Vec<Complex32>,
        freq: Vec<Complex32>,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Plan, PlanError> {
        validate_lengths(direction, time.len(), freq.len())?;
        let n = match direction {
            Direction::Forward => time.len(),
            Direction::Backward => freq.len(),
        };
        Ok(Self {
            kernel: Kernel::for_len(n),
            time,
            freq,
            direction,
            options,
        })
    }

    /// Run the transform.
    ///
    /// The destination buffer is scaled by `1/n` afterwards unless the
    /// plan was created with `scale_output` cleared.
    pub fn execute(&mut self) -> Result<(), PlanError> {
        let n = self.kernel.len();
        match self.direction {
            Direction::Forward => {
                self.kernel.execute(&self.time, &mut self.freq[..n], false);
                if self.options.scale_output {
                    scale(&mut self.freq[..n]);
                }
            }
            Direction::Backward => {
                self.kernel.execute(&self.freq, &mut self.time[..n], true);
                if self.options.scale_output {
                    scale(&mut self.time[..n]);
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

    /// Time-domain buffer.
    #[must_use]
    pub fn time(&self) -> &[Complex32] {
        &self.time
    }

    /// Mutable time-domain buffer, for refilling between executions.
    pub fn time_mut(&mut self) -> &mut [Complex32] {
        &mut self.time
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

    /// Consume the plan and recover its buffers as `(time, freq)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Complex32>, Vec<Complex32>) {
        (self.time, self.freq)
    }
}

/// Divide every element by the slice length.
pub(crate) fn scale(buf: &mut [Complex32]) {
    let factor = 1.0 / buf.len() as f32;
    for v in buf.iter_mut() {
        *v = v.scaled(factor);
    }
}
