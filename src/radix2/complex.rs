use crate::common::{FftError, FftProcess, ensure_valid_length};
use num_complex::Complex64;
use super::core::{radix_2_dit_fft_core, precompute_twiddles, precompute_bitrev, scale_buffer};

/// Structure that holds the precomputed tables (Twiddle factors and Bit Reverse).
///
/// The tables live in caller storage, so a plan can be built without the
/// process-wide twiddle cache. The transform runs in place: `process`
/// overwrites the caller's buffer.
pub struct CplxFft<'a> {
    twiddles: &'a mut [Complex64],
    bitrev: &'a mut [usize],
    n: usize,
}

impl<'a> CplxFft<'a> {
    /// Initializes the tables. `twiddles` needs N/2 entries, `bitrev` N.
    pub fn new(
        twiddles: &'a mut [Complex64],
        bitrev: &'a mut [usize],
        n: usize
    ) -> Result<Self, FftError> {
        ensure_valid_length(n)?;
        if !n.is_power_of_two() {
            return Err(FftError::UnsupportedLength);
        }
        if twiddles.len() < n / 2 || bitrev.len() < n {
            return Err(FftError::BufferTooSmall);
        }

        let mut fft = Self { twiddles, bitrev, n };
        fft.precompute();
        Ok(fft)
    }

    /// Precomputes Twiddle Factors and Bit Reverse Table
    fn precompute(&mut self) {
        precompute_bitrev(self.bitrev, self.n);
        precompute_twiddles(self.twiddles, self.n);
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Executes the FFT in-place. The inverse is divided by N.
    pub fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        if inverse {
            radix_2_dit_fft_core::<true>(buffer, self.twiddles, self.bitrev, 1);
            scale_buffer(buffer, 1.0 / self.n as f64);
        } else {
            radix_2_dit_fft_core::<false>(buffer, self.twiddles, self.bitrev, 1);
        }

        Ok(())
    }
}

impl<'a> FftProcess<Complex64> for CplxFft<'a> {
    fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        self.process(buffer, inverse)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
