use num_complex::Complex64;
use alloc::vec::Vec;
use super::RealFft;
use crate::common::FftError;
use crate::naive::dft;

fn assert_float_close(val: f64, expected: f64) {
    let tolerance = 1e-9;
    let diff = (val - expected).abs();
    assert!(
        diff < tolerance,
        "Error. Expected: {}, Got: {}", expected, val
    );
}

fn assert_complex_close(val: Complex64, expected: Complex64) {
    assert_float_close(val.re, expected.re);
    assert_float_close(val.im, expected.im);
}

const INPUT: [f64; 16] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0,
    -8.0, -7.0, -6.0, -5.0, -4.0, -3.0, -2.0, -1.0
];

const EXPECTED_FFT: [(f64, f64); 9] = [
    (0.0, 0.0),
    (9.0, -45.24605542913263),
    (-8.0, 19.31370849898476),
    (9.0, -13.469451863989402),
    (-8.0, 8.0),
    (9.0, -6.013607741273688),
    (-8.0, 3.313708498984761),
    (9.0, -1.7902113064169214),
    (-8.0, 0.0),
];

#[test]
fn test_fft_forward() {
    let n = 16;
    let mut output = vec![Complex64::default(); n / 2 + 1];
    let mut twiddles = vec![Complex64::new(0., 0.); n / 2];
    let mut bitrev = vec![0; n / 2];

    let fft = RealFft::new(&mut twiddles, &mut bitrev, n).unwrap();
    fft.process(&INPUT, &mut output).unwrap();

    for (val, &(re, im)) in output.iter().zip(EXPECTED_FFT.iter()) {
        assert_complex_close(*val, Complex64::new(re, im));
    }
}

#[test]
fn test_fft_reverse() {
    let n = 16;
    let spectrum: Vec<Complex64> = EXPECTED_FFT
        .iter()
        .map(|&(re, im)| Complex64::new(re, im))
        .collect();
    let mut output = vec![0.0; n];

    let mut twiddles = vec![Complex64::new(0., 0.); n / 2];
    let mut bitrev = vec![0; n / 2];

    let fft = RealFft::new(&mut twiddles, &mut bitrev, n).unwrap();
    fft.process_inv(&spectrum, &mut output).unwrap();

    for (i, &val) in output.iter().enumerate() {
        assert_float_close(val, INPUT[i]);
    }
}

#[test]
fn test_matches_reference_dft_for_every_small_size() {
    for log2 in 0..7 {
        let n = 1usize << log2;
        let input: Vec<f64> = (0..n).map(|i| ((i * 7 + 3) % 11) as f64 - 4.5).collect();
        let reference = dft(&input);

        let mut twiddles = vec![Complex64::default(); n / 2];
        let mut bitrev = vec![0; n / 2];
        let fft = RealFft::new(&mut twiddles, &mut bitrev, n).unwrap();

        let mut output = vec![Complex64::default(); fft.spectrum_len()];
        fft.process(&input, &mut output).unwrap();
        for (val, expected) in output.iter().zip(reference.iter()) {
            assert_complex_close(*val, *expected);
        }

        let mut restored = vec![0.0; n];
        fft.process_inv(&output, &mut restored).unwrap();
        for (val, expected) in restored.iter().zip(input.iter()) {
            assert_float_close(*val, *expected);
        }
    }
}

#[test]
fn test_inverse_ignores_imaginary_dc_and_nyquist() {
    let n = 8;
    let mut twiddles = vec![Complex64::default(); n / 2];
    let mut bitrev = vec![0; n / 2];
    let fft = RealFft::new(&mut twiddles, &mut bitrev, n).unwrap();

    let clean = [
        Complex64::new(4.0, 0.0),
        Complex64::new(1.0, -2.0),
        Complex64::new(0.5, 0.25),
        Complex64::new(-1.0, 3.0),
        Complex64::new(2.0, 0.0),
    ];
    let mut noisy = clean;
    noisy[0].im = 7.0;
    noisy[4].im = -3.0;

    let mut expected = vec![0.0; n];
    let mut restored = vec![0.0; n];
    fft.process_inv(&clean, &mut expected).unwrap();
    fft.process_inv(&noisy, &mut restored).unwrap();
    for (val, exp) in restored.iter().zip(expected.iter()) {
        assert_float_close(*val, *exp);
    }
}

#[test]
fn test_rejects_bad_sizes() {
    let mut twiddles = vec![Complex64::default(); 8];
    let mut bitrev = vec![0; 8];

    assert_eq!(
        RealFft::new(&mut twiddles, &mut bitrev, 0).err(),
        Some(FftError::InvalidLength)
    );
    assert_eq!(
        RealFft::new(&mut twiddles, &mut bitrev, 6).err(),
        Some(FftError::UnsupportedLength)
    );
    assert_eq!(
        RealFft::new(&mut twiddles, &mut bitrev, 32).err(),
        Some(FftError::BufferTooSmall)
    );

    let fft = RealFft::new(&mut twiddles, &mut bitrev, 8).unwrap();
    let mut output = vec![Complex64::default(); 8];
    assert_eq!(fft.process(&[0.0; 8], &mut output), Err(FftError::SizeMismatch));
    let mut samples = vec![0.0; 4];
    assert_eq!(
        fft.process_inv(&[Complex64::default(); 5], &mut samples),
        Err(FftError::SizeMismatch)
    );
}
