//! Helpers around the coefficient buffer: which frequency a bin is, how
//! loud it is, and how to shape a signal into power-of-two frames.

use alloc::vec::Vec;
use num_complex::Complex64;
use crate::radix2::sqrt;

/// Frequencies of bins `0..N/2` for an N-point transform at `sample_rate` Hz.
/// Bin k sits at `k * sample_rate / N`.
pub fn bin_frequencies(n: usize, sample_rate: u32) -> Vec<f64> {
    let rate = sample_rate as f64;
    (0..n / 2).map(|k| k as f64 * rate / n as f64).collect()
}

/// Amplitude of every coefficient, `|X[k]|`.
pub fn magnitudes(coeffs: &[Complex64]) -> Vec<f64> {
    coeffs.iter().map(|c| sqrt(c.norm_sqr())).collect()
}

/// Sum of squared magnitudes. With the default normalization Parseval gives
/// `energy(x) == energy(forward_transform(x)) / N`.
pub fn energy(values: &[Complex64]) -> f64 {
    values.iter().map(|v| v.norm_sqr()).sum()
}

/// Positive-frequency view of one transformed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub amplitudes: Vec<f64>,
    /// N, the length of the transformed frame.
    pub total_samples: usize,
    pub sample_rate: u32,
    /// Duration of one sample, `1 / sample_rate`; zero for an empty frame.
    /// Callers placing frames on a timeline overwrite it.
    pub start_time: f64,
}

impl Spectrum {
    /// Keeps bins `0..N/2`; the upper half of a real signal's spectrum mirrors them.
    pub fn from_coefficients(coeffs: &[Complex64], sample_rate: u32) -> Self {
        let n = coeffs.len();
        let half = n / 2;

        let start_time = if n > 0 && sample_rate > 0 {
            1.0 / sample_rate as f64
        } else {
            0.0
        };

        Self {
            frequencies: bin_frequencies(n, sample_rate),
            amplitudes: magnitudes(&coeffs[..half]),
            total_samples: n,
            sample_rate,
            start_time,
        }
    }

    /// Frequency of the loudest bin, skipping DC.
    pub fn peak_frequency(&self) -> Option<f64> {
        self.amplitudes
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| self.frequencies[k])
    }
}

/// Zero-pads `samples` up to the next power of two. Empty input stays empty.
pub fn pad_to_power_of_two(samples: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }
    let mut padded = samples.to_vec();
    padded.resize(samples.len().next_power_of_two(), 0.0);
    padded
}

/// Splits `samples` into consecutive frames of `frame_len`, zero-padding the
/// last one. A zero `frame_len` yields no frames.
pub fn frames(samples: &[f64], frame_len: usize) -> Vec<Vec<f64>> {
    if frame_len == 0 {
        return Vec::new();
    }
    samples
        .chunks(frame_len)
        .map(|chunk| {
            let mut frame = chunk.to_vec();
            frame.resize(frame_len, 0.0);
            frame
        })
        .collect()
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
