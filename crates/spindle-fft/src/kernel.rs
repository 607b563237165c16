//! Transform kernels.
//!
//! A kernel is the precomputed part of a plan: for power-of-two lengths
//! an iterative radix-2 butterfly network with a twiddle table and
//! bit-reversal map, otherwise a naive DFT. Precomputation happens once
//! at plan-creation time; execution reuses it for every run.

use std::f32::consts::TAU;

use spindle_core::Complex32;

/// Precomputed transform state for one fixed length.
#[derive(Debug)]
pub(crate) enum Kernel {
    /// Iterative radix-2 FFT, power-of-two lengths only.
    Radix2(Radix2),
    /// Direct O(n²) evaluation for lengths radix-2 cannot serve.
    Naive(NaiveDft),
}

impl Kernel {
    /// Select and precompute a kernel for transform length `n`.
    pub fn for_len(n: usize) -> Kernel {
        if n.is_power_of_two() {
            Kernel::Radix2(Radix2::new(n))
        } else {
            Kernel::Naive(NaiveDft { len: n })
        }
    }

    /// Transform length this kernel was built for.
    pub fn len(&self) -> usize {
        match self {
            Kernel::Radix2(k) => k.len,
            Kernel::Naive(k) => k.len,
        }
    }

    /// Run the transform from `src` into `dst`.
    ///
    /// Both slices must be exactly [`len`](Self::len) long. `inverse`
    /// flips the twiddle sign (no scaling is applied here; scaling is
    /// the plan's concern).
    pub fn execute(&self, src: &[Complex32], dst: &mut [Complex32], inverse: bool) {
        debug_assert_eq!(src.len(), self.len());
        debug_assert_eq!(dst.len(), self.len());
        match self {
            Kernel::Radix2(k) => k.execute(src, dst, inverse),
            Kernel::Naive(k) => k.execute(src, dst, inverse),
        }
    }
}

/// Iterative radix-2 Cooley-Tukey kernel.
///
/// Twiddles are the forward-direction roots `e^(-2πik/n)` for
/// `k < n/2`; the inverse run conjugates on the fly. The bit-reversal
/// map reorders the input once so every butterfly stage is in-place
/// over `dst`.
#[derive(Debug)]
pub(crate) struct Radix2 {
    len: usize,
    rev: Vec<usize>,
    twiddles: Vec<Complex32>,
}

impl Radix2 {
    fn new(n: usize) -> Self {
        debug_assert!(n.is_power_of_two());
        let bits = n.trailing_zeros();
        let rev = if bits == 0 {
            vec![0]
        } else {
            (0..n)
                .map(|i| i.reverse_bits() >> (usize::BITS - bits))
                .collect()
        };
        let twiddles = (0..n / 2)
            .map(|k| {
                let angle = -TAU * k as f32 / n as f32;
                Complex32::new(angle.cos(), angle.sin())
            })
            .collect();
        Self {
            len: n,
            rev,
            twiddles,
        }
    }

    fn execute(&self, src: &[Complex32], dst: &mut [Complex32], inverse: bool) {
        let n = self.len;
        for (i, &r) in self.rev.iter().enumerate() {
            dst[i] = src[r];
        }

        let mut m = 2;
        while m <= n {
            let half = m / 2;
            let stride = n / m;
            for block in (0..n).step_by(m) {
                for k in 0..half {
                    let mut w = self.twiddles[k * stride];
                    if inverse {
                        w = w.conj();
                    }
                    let a = dst[block + k];
                    let b = dst[block + k + half] * w;
                    dst[block + k] = a + b;
                    dst[block + k + half] = a - b;
                }
            }
            m *= 2;
        }
    }
}

/// Naive DFT kernel for non-power-of-two lengths.
#[derive(Debug)]
pub(crate) struct NaiveDft {
    len: usize,
}

impl NaiveDft {
    fn execute(&self, src: &[Complex32], dst: &mut [Complex32], inverse: bool) {
        let n = self.len;
        let sign = if inverse { 1.0 } else { -1.0 };
        for (k, out) in dst.iter_mut().enumerate() {
            let mut acc = Complex32::ZERO;
            for (t, &value) in src.iter().enumerate() {
                let angle = sign * TAU * (k as f32) * (t as f32) / (n as f32);
                acc += value * Complex32::new(angle.cos(), angle.sin());
            }
            *out = acc;
        }
    }
}
