// src/radix2/core.rs

use num_complex::Complex64;
use core::f64::consts::PI;

/// Computes the rotation factors (Twiddle Factors) for an FFT of size N.
pub(crate) fn precompute_twiddles(twiddles: &mut [Complex64], n: usize) {
    // Only N/2 factors: the second half of the circle is the negation of the first.
    for j in 0..(n / 2) {
        let angle = -2.0 * PI * (j as f64) / (n as f64);
        let (sin, cos) = sin_cos(angle);
        twiddles[j] = Complex64::new(cos, sin);
    }
}

/// Fills the bit-reversal table.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    if n == 0 {
        return;
    }
    bitrev[0] = 0;
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        bitrev[i] = j;
    }
}

/// std/no_std agnostic sin/cos
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

pub(crate) fn sqrt(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(value);
}

/// Radix-2 decimation-in-time FFT, in place, unnormalized in both directions.
///
/// `twiddles` holds `exp(-2*pi*i*j/L)` for a table length `L`; an N-point
/// transform reads every `twiddle_stride`-th entry, so `L = N * twiddle_stride`.
/// The real-input path uses a stride of 2 to run N/2 points on an N-point table.
pub(crate) fn radix_2_dit_fft_core<const INVERSE: bool>(
    buffer: &mut [Complex64],
    twiddles: &[Complex64],
    bitrev: &[usize],
    twiddle_stride: usize
) {
    let n = buffer.len();
    if n < 2 {
        return;
    }

    // 1. Bit-reverse
    for i in 1..(n - 1) {
        let j = bitrev[i];
        if i < j {
            buffer.swap(i, j);
        }
    }

    // 2. Butterfly
    let mut stride = 1;
    let mut tw_index = n >> 1;

    while stride < n {
        let jmax = n - stride;

        for j in (0..jmax).step_by(stride << 1) {
            for i in 0..stride {
                let mut w = twiddles[i * tw_index * twiddle_stride];

                // INVERSE is a compile-time constant, this branch disappears.
                if INVERSE {
                    w = w.conj();
                }

                let index = j + i;
                let a = buffer[index];
                let t = buffer[index + stride] * w;

                buffer[index] = a + t;
                buffer[index + stride] = a - t;
            }
        }
        stride <<= 1;
        tw_index >>= 1;
    }
}

/// Multiplies every element by `factor`; a factor of exactly 1 is a no-op.
pub(crate) fn scale_buffer(buffer: &mut [Complex64], factor: f64) {
    if factor == 1.0 {
        return;
    }
    for value in buffer.iter_mut() {
        *value = value.scale(factor);
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
