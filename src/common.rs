// src/common.rs

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    InvalidLength,
    UnsupportedLength,
    SizeMismatch,
    BufferTooSmall,
    NumericInstability,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidLength => write!(f, "FFT size must be at least 1"),
            FftError::UnsupportedLength => write!(f, "Size must be a power of 2"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::BufferTooSmall => write!(f, "Auxiliary buffers are too small"),
            FftError::NumericInstability => write!(f, "Non-finite value in FFT data"),
        }
    }
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Where the 1/N factor goes.
///
/// `Backward` leaves the forward transform unscaled and divides the inverse
/// by N. `Forward` does the opposite, `Ortho` scales both by 1/sqrt(N).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    Forward,
    #[default]
    Backward,
    Ortho,
}

impl Normalization {
    /// Factor applied to the output of one direction of an N-point transform.
    pub fn scale(self, n: usize, inverse: bool) -> f64 {
        let n = n as f64;
        match (self, inverse) {
            (Normalization::Backward, false) | (Normalization::Forward, true) => 1.0,
            (Normalization::Backward, true) | (Normalization::Forward, false) => 1.0 / n,
            (Normalization::Ortho, _) => 1.0 / crate::radix2::sqrt(n),
        }
    }
}

/// Options shared by the owned transform entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FftOptions {
    pub normalization: Normalization,
    /// Reject NaN/infinite input with `NumericInstability` before transforming.
    pub check_finite: bool,
}

impl FftOptions {
    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }
}

/// Length check shared by every entry point: N = 0 is never a valid transform.
pub(crate) fn ensure_valid_length(n: usize) -> Result<(), FftError> {
    if n == 0 {
        return Err(FftError::InvalidLength);
    }
    Ok(())
}
