//! Deterministic signal fixtures.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use spindle_core::Complex32;

/// Real-valued continuous wave at `freq_hz`, sampled at `sample_rate`
/// Hz. Computed in f64 and narrowed per sample.
pub fn real_cw(len: usize, freq_hz: f64, sample_rate: f64, phase: f64) -> Vec<f32> {
    let tau = std::f64::consts::TAU;
    (0..len)
        .map(|i| {
            let now = i as f64 / sample_rate;
            (tau * freq_hz * now + phase).sin() as f32
        })
        .collect()
}

/// Unit complex exponential centred on `bin` of a `len`-point transform.
pub fn complex_cw(len: usize, bin: usize) -> Vec<Complex32> {
    let tau = std::f64::consts::TAU;
    (0..len)
        .map(|i| {
            let angle = tau * bin as f64 * i as f64 / len as f64;
            Complex32::new(angle.cos() as f32, angle.sin() as f32)
        })
        .collect()
}

/// Deterministic white noise in `-1.0..1.0`, seeded ChaCha8.
pub fn seeded_noise(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.random::<f32>() * 2.0 - 1.0)
        .collect()
}
