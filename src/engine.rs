// src/engine.rs

use alloc::sync::Arc;
use alloc::vec::Vec;
use num_complex::Complex64;
use crate::bluestein::{self, BluesteinFft};
use crate::common::{FftError, FftOptions, FftProcess, ensure_valid_length};
use crate::radix2::{RealFft, precompute_bitrev, radix_2_dit_fft_core, scale_buffer};
use crate::sample::Sample;
use crate::twiddles;

enum Algorithm {
    Radix2 {
        twiddles: Arc<[Complex64]>,
        bitrev: Vec<usize>,
    },
    Bluestein(Arc<BluesteinFft>),
}

/// Owned, reusable plan for one transform size.
///
/// Powers of two run the radix-2 network directly; every other length goes
/// through Bluestein. Twiddle tables and Bluestein kernels come from
/// process-wide caches, so building several plans of the same size is cheap. `forward`/`inverse`
/// work in place on the caller's buffer.
pub struct FftPlan {
    n: usize,
    options: FftOptions,
    algorithm: Algorithm,
}

impl FftPlan {
    pub fn new(n: usize) -> Result<Self, FftError> {
        Self::with_options(n, FftOptions::default())
    }

    pub fn with_options(n: usize, options: FftOptions) -> Result<Self, FftError> {
        ensure_valid_length(n)?;

        let algorithm = if n.is_power_of_two() {
            let mut bitrev = vec![0; n];
            precompute_bitrev(&mut bitrev, n);
            Algorithm::Radix2 { twiddles: twiddles::for_size(n), bitrev }
        } else {
            Algorithm::Bluestein(bluestein::for_size(n)?)
        };

        Ok(Self { n, options, algorithm })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn options(&self) -> &FftOptions {
        &self.options
    }

    /// True when the size runs on the radix-2 fast path.
    pub fn is_radix2(&self) -> bool {
        matches!(self.algorithm, Algorithm::Radix2 { .. })
    }

    pub fn forward(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        self.process(buffer, false)
    }

    pub fn inverse(&self, buffer: &mut [Complex64]) -> Result<(), FftError> {
        self.process(buffer, true)
    }

    /// Validates, then transforms in place and applies the normalization.
    /// On error the buffer is left untouched.
    pub fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }
        if self.options.check_finite {
            ensure_finite(buffer)?;
        }

        self.transform(buffer, inverse);
        Ok(())
    }

    fn transform(&self, buffer: &mut [Complex64], inverse: bool) {
        match &self.algorithm {
            Algorithm::Radix2 { twiddles, bitrev } => {
                if inverse {
                    radix_2_dit_fft_core::<true>(buffer, twiddles, bitrev, 1);
                } else {
                    radix_2_dit_fft_core::<false>(buffer, twiddles, bitrev, 1);
                }
            }
            Algorithm::Bluestein(fft) => fft.execute(buffer, inverse),
        }
        scale_buffer(buffer, self.options.normalization.scale(self.n, inverse));
    }
}

impl FftProcess<Complex64> for FftPlan {
    fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        self.process(buffer, inverse)
    }
}

fn ensure_finite(values: &[Complex64]) -> Result<(), FftError> {
    if values.iter().all(|v| v.re.is_finite() && v.im.is_finite()) {
        Ok(())
    } else {
        Err(FftError::NumericInstability)
    }
}

/// Forward DFT of `input` into a fresh buffer, natural order, index 0 = DC.
///
/// Unnormalized: `X[k] = sum x[j] * exp(-2*pi*i*j*k/N)`. Any N >= 1 is accepted.
pub fn forward_transform<S: Sample>(input: &[S]) -> Result<Vec<Complex64>, FftError> {
    forward_transform_with(input, &FftOptions::default())
}

pub fn forward_transform_with<S: Sample>(
    input: &[S],
    options: &FftOptions,
) -> Result<Vec<Complex64>, FftError> {
    let n = input.len();
    ensure_valid_length(n)?;

    let mut output: Vec<Complex64> = input.iter().map(|x| x.to_complex()).collect();
    if options.check_finite {
        ensure_finite(&output)?;
    }

    if S::IS_REAL && n >= 2 && n.is_power_of_two() {
        let samples: Vec<f64> = output.iter().map(|v| v.re).collect();
        forward_real(&samples, &mut output)?;
        scale_buffer(&mut output, options.normalization.scale(n, false));
    } else {
        FftPlan::with_options(n, *options)?.transform(&mut output, false);
    }

    ensure_finite(&output)?;
    Ok(output)
}

/// Half-size real path; mirrors the upper half by conjugate symmetry.
fn forward_real(samples: &[f64], output: &mut [Complex64]) -> Result<(), FftError> {
    let n = samples.len();
    let half = n / 2;

    let twiddles = twiddles::for_size(n);
    let mut bitrev = vec![0; half];
    precompute_bitrev(&mut bitrev, half);

    let fft = RealFft::from_tables(&twiddles, &bitrev, n);
    fft.process(samples, &mut output[..=half])?;

    for k in (half + 1)..n {
        output[k] = output[n - k].conj();
    }
    Ok(())
}

/// Inverse DFT into a fresh buffer, divided by N under the default normalization.
pub fn inverse_transform(coeffs: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    inverse_transform_with(coeffs, &FftOptions::default())
}

pub fn inverse_transform_with(
    coeffs: &[Complex64],
    options: &FftOptions,
) -> Result<Vec<Complex64>, FftError> {
    let n = coeffs.len();
    ensure_valid_length(n)?;
    if options.check_finite {
        ensure_finite(coeffs)?;
    }

    let mut output = coeffs.to_vec();
    FftPlan::with_options(n, *options)?.transform(&mut output, true);

    ensure_finite(&output)?;
    Ok(output)
}

/// Inverse DFT for spectra of real signals; returns only the real samples.
///
/// Always equals the real part of `inverse_transform(coeffs)`. For
/// power-of-two N the spectrum is first folded onto its Hermitian part,
/// `(X[k] + conj(X[N-k])) / 2`, which is exactly what the real part keeps,
/// and the half-size real path runs on bins 0..=N/2 of that.
pub fn inverse_transform_real(coeffs: &[Complex64]) -> Result<Vec<f64>, FftError> {
    inverse_transform_real_with(coeffs, &FftOptions::default())
}

pub fn inverse_transform_real_with(
    coeffs: &[Complex64],
    options: &FftOptions,
) -> Result<Vec<f64>, FftError> {
    let n = coeffs.len();
    ensure_valid_length(n)?;

    if n < 2 || !n.is_power_of_two() {
        let output = inverse_transform_with(coeffs, options)?;
        return Ok(output.into_iter().map(|v| v.re).collect());
    }

    if options.check_finite {
        ensure_finite(coeffs)?;
    }

    let half = n / 2;
    let hermitian: Vec<Complex64> = (0..=half)
        .map(|k| (coeffs[k] + coeffs[(n - k) % n].conj()).scale(0.5))
        .collect();

    let twiddles = twiddles::for_size(n);
    let mut bitrev = vec![0; half];
    precompute_bitrev(&mut bitrev, half);

    let mut output = vec![0.0; n];
    RealFft::from_tables(&twiddles, &bitrev, n).process_inv(&hermitian, &mut output)?;

    // RealFft already divided by N.
    let scale = options.normalization.scale(n, true) * n as f64;
    if scale != 1.0 {
        for value in output.iter_mut() {
            *value *= scale;
        }
    }

    if output.iter().all(|v| v.is_finite()) {
        Ok(output)
    } else {
        Err(FftError::NumericInstability)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
