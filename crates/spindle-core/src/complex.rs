//! Single-precision complex samples.
//!
//! Transform buffers are interleaved `Complex32` values. The type is a
//! plain `#[repr(C)]` pair so buffers lay out the way signal-processing
//! consumers expect.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A complex number with `f32` components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex32 {
    /// Real component.
    pub re: f32,
    /// Imaginary component.
    pub im: f32,
}

impl Complex32 {
    /// The additive identity.
    pub const ZERO: Complex32 = Complex32 { re: 0.0, im: 0.0 };

    /// Construct from real and imaginary parts.
    #[must_use]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Complex conjugate.
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Magnitude (Euclidean norm).
    #[must_use]
    pub fn norm(self) -> f32 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude. Cheaper than [`norm`](Self::norm) when only
    /// relative ordering matters.
    #[must_use]
    pub fn norm_sqr(self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    /// Multiply both components by a real scalar.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }
}

impl Add for Complex32 {
    type Output = Complex32;

    fn add(self, rhs: Complex32) -> Complex32 {
        Complex32::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl AddAssign for Complex32 {
    fn add_assign(&mut self, rhs: Complex32) {
        *self = *self + rhs;
    }
}

impl Sub for Complex32 {
    type Output = Complex32;

    fn sub(self, rhs: Complex32) -> Complex32 {
        Complex32::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex32 {
    type Output = Complex32;

    fn mul(self, rhs: Complex32) -> Complex32 {
        Complex32::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl From<(f32, f32)> for Complex32 {
    fn from((re, im): (f32, f32)) -> Self {
        Self::new(re, im)
    }
}

impl From<f32> for Complex32 {
    fn from(re: f32) -> Self {
        Self::new(re, 0.0)
    }
}

impl fmt::Display for Complex32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
