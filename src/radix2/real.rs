use crate::common::{FftError, ensure_valid_length};
use num_complex::Complex64;
use core::slice;
use super::core::{radix_2_dit_fft_core, precompute_twiddles, precompute_bitrev, scale_buffer};

/// Real-input FFT of N points computed with one complex FFT of N/2 points.
///
/// Even samples go to the real part and odd samples to the imaginary part of
/// the half-size buffer; a post-processing pass ("unweaving") separates the
/// two spectra and combines them with the N-point twiddles.
pub struct RealFft<'a> {
    twiddles: &'a [Complex64],
    bitrev: &'a [usize],
    n: usize,
}

impl<'a> RealFft<'a> {
    /// Initializes the real FFT.
    /// `n` is the number of REAL samples; both tables need N/2 entries.
    pub fn new(
        twiddles: &'a mut [Complex64],
        bitrev: &'a mut [usize],
        n: usize
    ) -> Result<Self, FftError> {
        ensure_valid_length(n)?;
        if !n.is_power_of_two() {
            return Err(FftError::UnsupportedLength);
        }
        if twiddles.len() < n / 2 || bitrev.len() < n / 2 {
            return Err(FftError::BufferTooSmall);
        }

        // Bit reversal for the inner N/2 transform, twiddles for the full circle.
        // The inner transform reads the twiddles with a stride of 2.
        precompute_bitrev(bitrev, n / 2);
        precompute_twiddles(twiddles, n);

        Ok(Self { twiddles, bitrev, n })
    }

    /// Wraps tables that are already filled: `twiddles` for size N (as the
    /// shared twiddle cache hands them out) and `bitrev` for size N/2.
    pub(crate) fn from_tables(
        twiddles: &'a [Complex64],
        bitrev: &'a [usize],
        n: usize
    ) -> Self {
        debug_assert!(n.is_power_of_two());
        debug_assert!(twiddles.len() >= n / 2 && bitrev.len() >= n / 2);
        Self { twiddles, bitrev, n }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Length of the non-redundant half spectrum, N/2 + 1.
    pub fn spectrum_len(&self) -> usize {
        self.n / 2 + 1
    }

    /// Forward real FFT.
    ///
    /// Writes coefficients 0..=N/2 into `output`; the rest of the spectrum is
    /// `X[N-k] = conj(X[k])`. DC and Nyquist come out with a zero imaginary part.
    pub fn process(&self, input: &[f64], output: &mut [Complex64]) -> Result<(), FftError> {
        if input.len() != self.n || output.len() != self.spectrum_len() {
            return Err(FftError::SizeMismatch);
        }

        if self.n == 1 {
            output[0] = Complex64::new(input[0], 0.0);
            return Ok(());
        }

        let m = self.n / 2;

        // 1. Pack pairs of real samples and run the N/2-point complex FFT
        for (k, pair) in input.chunks_exact(2).enumerate() {
            output[k] = Complex64::new(pair[0], pair[1]);
        }
        radix_2_dit_fft_core::<false>(&mut output[..m], self.twiddles, self.bitrev, 2);

        // 2. Unweave. DC and Nyquist share bin 0 of the packed spectrum.
        let z0 = output[0];
        output[0] = Complex64::new(z0.re + z0.im, 0.0);
        output[m] = Complex64::new(z0.re - z0.im, 0.0);

        // Bins k and M-k are produced together from the same pair of inputs.
        for k in 1..=(m / 2) {
            let a = output[k];
            let b = output[m - k].conj();

            let even = (a + b).scale(0.5);
            // (a - b) / 2i
            let odd = (a - b) * Complex64::new(0.0, -0.5);
            let t = self.twiddles[k] * odd;

            output[k] = even + t;
            if k != m - k {
                output[m - k] = (even - t).conj();
            }
        }

        Ok(())
    }

    /// Inverse real FFT: N/2 + 1 coefficients in, N real samples out, divided by N.
    ///
    /// Only the half spectrum is read, so the imaginary parts of DC and
    /// Nyquist are ignored as the real-signal assumption requires.
    pub fn process_inv(&self, input: &[Complex64], output: &mut [f64]) -> Result<(), FftError> {
        if input.len() != self.spectrum_len() || output.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        if self.n == 1 {
            output[0] = input[0].re;
            return Ok(());
        }

        let m = self.n / 2;

        // Reinterpret the real output as M complex values: the inner inverse
        // FFT then leaves x[2j] and x[2j+1] exactly where they belong.
        // Safety: Complex64 is repr(C) of two f64s, the alignment is the same,
        // and `output` holds exactly 2*M f64s.
        let cbuffer = unsafe {
            slice::from_raw_parts_mut(
                output.as_mut_ptr() as *mut Complex64,
                m
            )
        };

        // DC and Nyquist of a real signal are real.
        let bin = |k: usize| {
            if k == 0 || k == m {
                Complex64::new(input[k].re, 0.0)
            } else {
                input[k]
            }
        };

        // 1. Weave the even/odd spectra back into one packed spectrum
        for k in 0..m {
            let a = bin(k);
            let b = bin(m - k).conj();

            let even = (a + b).scale(0.5);
            let odd = (a - b) * self.twiddles[k].conj().scale(0.5);

            // Z = E + i * O
            cbuffer[k] = even + Complex64::new(-odd.im, odd.re);
        }

        // 2. N/2-point complex inverse FFT
        radix_2_dit_fft_core::<true>(cbuffer, self.twiddles, self.bitrev, 2);
        scale_buffer(cbuffer, 1.0 / m as f64);

        Ok(())
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
