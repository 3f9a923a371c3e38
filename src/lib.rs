#![no_std]

// The owned API (plans, copying transforms, spectrum helpers) needs Vec/Arc.
#[macro_use]
extern crate alloc;

// Enables the standard library for tests and for the twiddle cache,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod sample;
pub mod radix2;
pub mod bluestein;
pub mod twiddles;
pub mod naive;
pub mod engine;
pub mod spectrum;

pub use common::{FftError, FftOptions, FftProcess, Normalization};
pub use engine::{
    FftPlan, forward_transform, forward_transform_with, inverse_transform,
    inverse_transform_real, inverse_transform_real_with, inverse_transform_with,
};
pub use num_complex::{Complex32, Complex64};
pub use sample::Sample;
