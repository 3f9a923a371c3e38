use num_complex::{Complex32, Complex64};

/// A value that can enter the transform engine.
///
/// Everything is widened to `Complex64` before the butterflies run, so the
/// accumulated rounding error does not depend on the caller's precision.
pub trait Sample: Copy {
    /// True when the imaginary part is always zero.
    /// Lets the engine pick the half-size real-input path.
    const IS_REAL: bool;

    fn to_complex(self) -> Complex64;
}

impl Sample for f64 {
    const IS_REAL: bool = true;

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
}

impl Sample for f32 {
    const IS_REAL: bool = true;

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self as f64, 0.0)
    }
}

impl Sample for Complex64 {
    const IS_REAL: bool = false;

    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

impl Sample for Complex32 {
    const IS_REAL: bool = false;

    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }
}
