use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;
use crate::common::{FftError, FftProcess, ensure_valid_length};
use crate::radix2::{precompute_bitrev, radix_2_dit_fft_core, scale_buffer, sin_cos};
use crate::twiddles;

#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::sync::{Mutex, OnceLock};

#[cfg(feature = "std")]
static PLAN_CACHE: OnceLock<Mutex<HashMap<usize, Arc<BluesteinFft>>>> = OnceLock::new();

/// Bluestein (chirp-z) FFT for lengths the radix-2 network cannot handle.
///
/// Rewrites `j*k = (j^2 + k^2 - (k-j)^2) / 2`, which turns an N-point DFT
/// into a circular convolution of length `M = next_pow2(2N - 1)`. The
/// convolution runs on the radix-2 core.
pub struct BluesteinFft {
    n: usize,
    /// `w[k] = exp(-pi*i*k^2/N)`
    chirp: Vec<Complex64>,
    /// Spectrum of the conjugate chirp, pre-divided by M.
    kernel: Vec<Complex64>,
    twiddles: Arc<[Complex64]>,
    bitrev: Vec<usize>,
}

/// `exp(-pi*i*k^2/N)` with `k^2` reduced mod 2N before the float conversion;
/// the chirp is periodic in 2N and the reduction keeps the angle exact.
fn make_chirp(n: usize) -> Vec<Complex64> {
    let twice_len = 2 * n as u128;
    (0..n)
        .map(|k| {
            let k_squared = (k as u128 * k as u128) % twice_len;
            let angle = -PI * k_squared as f64 / n as f64;
            let (sin, cos) = sin_cos(angle);
            Complex64::new(cos, sin)
        })
        .collect()
}

impl BluesteinFft {
    pub fn new(n: usize) -> Result<Self, FftError> {
        ensure_valid_length(n)?;
        let m = (2 * n - 1).next_power_of_two();

        let twiddles = twiddles::for_size(m);
        let mut bitrev = vec![0; m];
        precompute_bitrev(&mut bitrev, m);

        let chirp = make_chirp(n);

        // Conjugate chirp laid out circularly (indices -(N-1)..N-1) and transformed once.
        let inv_m = 1.0 / m as f64;
        let mut kernel = vec![Complex64::default(); m];
        kernel[0] = chirp[0].conj().scale(inv_m);
        for l in 1..n {
            let value = chirp[l].conj().scale(inv_m);
            kernel[l] = value;
            kernel[m - l] = value;
        }
        radix_2_dit_fft_core::<false>(&mut kernel, &twiddles, &bitrev, 1);

        Ok(Self { n, chirp, kernel, twiddles, bitrev })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Length of the inner radix-2 convolution.
    pub fn convolution_len(&self) -> usize {
        self.kernel.len()
    }

    /// Unnormalized transform in both directions. The caller checks the length.
    pub(crate) fn execute(&self, buffer: &mut [Complex64], inverse: bool) {
        // The inverse is conj(DFT(conj(x))).
        let mut scratch = vec![Complex64::default(); self.kernel.len()];
        for ((s, x), w) in scratch.iter_mut().zip(buffer.iter()).zip(self.chirp.iter()) {
            let x = if inverse { x.conj() } else { *x };
            *s = x * w;
        }

        radix_2_dit_fft_core::<false>(&mut scratch, &self.twiddles, &self.bitrev, 1);
        for (s, k) in scratch.iter_mut().zip(self.kernel.iter()) {
            *s = *s * k;
        }
        // Kernel already carries the 1/M of this inverse.
        radix_2_dit_fft_core::<true>(&mut scratch, &self.twiddles, &self.bitrev, 1);

        for ((x, s), w) in buffer.iter_mut().zip(scratch.iter()).zip(self.chirp.iter()) {
            let value = s * w;
            *x = if inverse { value.conj() } else { value };
        }
    }

    /// Executes the FFT in place. The inverse is divided by N.
    pub fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        self.execute(buffer, inverse);
        if inverse {
            scale_buffer(buffer, 1.0 / self.n as f64);
        }

        Ok(())
    }
}

/// Returns the shared plan for size `n`, building chirp and kernel once per process.
#[cfg(feature = "std")]
pub fn for_size(n: usize) -> Result<Arc<BluesteinFft>, FftError> {
    let cache = PLAN_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    // Plans are inserted whole, so a poisoned lock still holds valid ones.
    let mut plans = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(plan) = plans.get(&n) {
        return Ok(Arc::clone(plan));
    }
    let plan = Arc::new(BluesteinFft::new(n)?);
    plans.insert(n, Arc::clone(&plan));
    Ok(plan)
}

#[cfg(not(feature = "std"))]
pub fn for_size(n: usize) -> Result<Arc<BluesteinFft>, FftError> {
    Ok(Arc::new(BluesteinFft::new(n)?))
}

impl FftProcess<Complex64> for BluesteinFft {
    fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        self.process(buffer, inverse)
    }
}

#[cfg(test)]
#[path = "bluestein_tests.rs"]
mod tests;
