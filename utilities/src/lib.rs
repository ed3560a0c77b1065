pub extern crate rustfft;

// export rustfft to radixft as the independent test oracle
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Direct O(N^2) DFT used as a reference for lengths the fast paths
/// cannot cover, and for validating the arbitrary-length engine.
///
/// `X[k] = sum_n x[n] * exp(-2*pi*i*n*k / N)`, unnormalized.
///
/// # Panics
///
/// Panics if the input and output slices differ in length.
pub fn reference_dft(
    input_re: &[f64],
    input_im: &[f64],
    output_re: &mut [f64],
    output_im: &mut [f64],
) {
    let n = input_re.len();
    assert!(input_im.len() == n && output_re.len() == n && output_im.len() == n);

    for k in 0..n {
        let mut sum_re = 0.0;
        let mut sum_im = 0.0;
        for (j, (x_re, x_im)) in input_re.iter().zip(input_im.iter()).enumerate() {
            let angle = -2.0 * std::f64::consts::PI * (j as f64) * (k as f64) / (n as f64);
            let (s, c) = angle.sin_cos();
            sum_re += x_re * c - x_im * s;
            sum_im += x_re * s + x_im * c;
        }
        output_re[k] = sum_re;
        output_im[k] = sum_im;
    }
}
