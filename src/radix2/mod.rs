pub mod complex;
pub mod real;
mod core;

pub(crate) use self::core::{
    precompute_bitrev, precompute_twiddles, radix_2_dit_fft_core, scale_buffer, sin_cos, sqrt,
};

pub use crate::common::{ FftError, FftProcess };
pub use complex::CplxFft;
pub use real::RealFft;
