//! Benchmark profiles for the spindle workspace.
//!
//! Provides shared input builders so the plan and broker benches
//! measure the same workloads.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spindle_core::Complex32;

/// Transform lengths the benches sweep: radix-2 sizes plus one
/// naive-DFT fallback size.
pub const BENCH_LENGTHS: [usize; 4] = [256, 1024, 4096, 1000];

/// A deterministic complex input buffer of length `n`.
pub fn bench_signal(n: usize) -> Vec<Complex32> {
    (0..n)
        .map(|i| {
            let x = i as f32;
            Complex32::new((x * 0.37).sin(), (x * 0.91).cos())
        })
        .collect()
}

/// A zeroed frequency buffer of length `n`.
pub fn bench_spectrum(n: usize) -> Vec<Complex32> {
    vec![Complex32::ZERO; n]
}
