//! Direct O(N^2) DFT.
//!
//! Far too slow for real work, but it defines what every fast path must agree
//! with, and it accepts any length.

use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;
use crate::radix2::sin_cos;
use crate::sample::Sample;

fn direct<S: Sample>(input: &[S], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input.iter().enumerate().fold(Complex64::default(), |acc, (j, x)| {
                // k*j mod N keeps the angle small for large N.
                let angle = sign * 2.0 * PI * ((k * j) % n) as f64 / n as f64;
                let (sin, cos) = sin_cos(angle);
                acc + x.to_complex() * Complex64::new(cos, sin)
            })
        })
        .collect()
}

/// Unnormalized forward DFT: `X[k] = sum x[j] * exp(-2*pi*i*j*k/N)`.
pub fn dft<S: Sample>(input: &[S]) -> Vec<Complex64> {
    direct(input, -1.0)
}

/// Inverse DFT, divided by N.
pub fn idft(input: &[Complex64]) -> Vec<Complex64> {
    let scale = 1.0 / input.len() as f64;
    direct(input, 1.0).into_iter().map(|v| v.scale(scale)).collect()
}
