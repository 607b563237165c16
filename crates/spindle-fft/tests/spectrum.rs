//! Integration test: single-tone spectra through real and complex plans.
//!
//! A bin-aligned sinusoid must concentrate its energy at the expected
//! frequency bin of a 1024-point forward transform.

use spindle_core::{Complex32, Direction, PlanOptions};
use spindle_fft::Planner;

const SAMPLE_RATE: f64 = 1.8e6;

/// Real-valued continuous wave, computed in f64 and narrowed per sample.
fn real_cw(len: usize, freq_hz: f64, phase: f64) -> Vec<f32> {
    let tau = std::f64::consts::TAU;
    (0..len)
        .map(|i| {
            let now = i as f64 / SAMPLE_RATE;
            (tau * freq_hz * now + phase).sin() as f32
        })
        .collect()
}

/// Index of the strongest bin.
fn peak_bin(spectrum: &[Complex32]) -> usize {
    let mut max = -1.0f32;
    let mut at = 0;
    for (i, bin) in spectrum.iter().enumerate() {
        let power = bin.norm();
        if power > max {
            max = power;
            at = i;
        }
    }
    at
}

#[test]
fn forward_real_tone_peaks_at_expected_bin() {
    // Bin width is 1.8e6 / 1024 ≈ 1758 Hz.
    let cases = [
        (10.0, 0usize),
        (225_000.0, 128),
        (450_000.0, 256),
    ];

    let planner = Planner::new();
    for (freq_hz, expected) in cases {
        let cw = real_cw(1024, freq_hz, 0.0);
        let mut plan = planner
            .plan_real(
                cw,
                vec![Complex32::ZERO; 1024],
                Direction::Forward,
                PlanOptions::default(),
            )
            .unwrap();
        plan.execute().unwrap();

        // Only bins 0..=512 are written; the mirror half stays zero.
        let at = peak_bin(&plan.freq()[..513]);
        assert_eq!(at, expected, "{freq_hz} Hz tone peaked at bin {at}");
    }
}

#[test]
fn forward_complex_tone_peaks_at_its_bin() {
    let n = 256;
    let bin = 77;
    let tau = std::f64::consts::TAU;
    let tone: Vec<Complex32> = (0..n)
        .map(|i| {
            let angle = tau * bin as f64 * i as f64 / n as f64;
            Complex32::new(angle.cos() as f32, angle.sin() as f32)
        })
        .collect();

    let planner = Planner::new();
    let mut plan = planner
        .plan(
            tone,
            vec![Complex32::ZERO; n],
            Direction::Forward,
            PlanOptions::default(),
        )
        .unwrap();
    plan.execute().unwrap();
    assert_eq!(peak_bin(plan.freq()), bin);

    // Scaled output: a unit complex exponential concentrates all of its
    // (unit) amplitude in one bin.
    assert!((plan.freq()[bin].norm() - 1.0).abs() < 1e-3);
}

#[test]
fn backward_delta_reconstructs_complex_tone() {
    let n = 64;
    let bin = 5;
    let mut spectrum = vec![Complex32::ZERO; n];
    spectrum[bin] = Complex32::new(n as f32, 0.0);

    let planner = Planner::new();
    let mut plan = planner
        .plan(
            vec![Complex32::ZERO; n],
            spectrum,
            Direction::Backward,
            PlanOptions::default(),
        )
        .unwrap();
    plan.execute().unwrap();

    let tau = std::f64::consts::TAU;
    for (i, value) in plan.time().iter().enumerate() {
        let angle = tau * bin as f64 * i as f64 / n as f64;
        let expected = Complex32::new(angle.cos() as f32, angle.sin() as f32);
        assert!(
            (*value - expected).norm() < 1e-3,
            "sample {i}: {value} vs {expected}"
        );
    }
}

#[test]
fn unscaled_forward_leaves_raw_magnitudes() {
    let n = 128;
    let cw = real_cw(n, 225_000.0, 0.0);
    let planner = Planner::new();

    let mut plan = planner
        .plan_real(
            cw,
            vec![Complex32::ZERO; n],
            Direction::Forward,
            PlanOptions::unscaled(),
        )
        .unwrap();
    plan.execute().unwrap();

    // A unit sinusoid splits n/2 of raw amplitude into each of the
    // positive- and negative-frequency bins; unscaled output keeps it.
    let at = peak_bin(&plan.freq()[..n / 2 + 1]);
    assert!((plan.freq()[at].norm() - (n as f32) / 2.0).abs() < 1.0);
}
