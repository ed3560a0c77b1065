//! Real-valued FFT through a half-length complex transform.
//!
//! The DFT of a real sequence is Hermitian-symmetric, so only the first
//! `N/2 + 1` bins are unique. The even-indexed samples ride the real channel
//! and the odd-indexed samples the imaginary channel of an `N/2`-point
//! complex transform; an O(N) post-pass splits the two interleaved spectra
//! back apart and applies the final twiddle.

use crate::fft::fft_64_with_planner;
use crate::planner::{Direction, Planner64, ReorderMode};

/// Real-valued FFT for `f64`, building a one-shot half-length planner.
///
/// See [`real_fft_64_with_planner`] for the output layout and panics.
pub fn real_fft_64(input: &[f64], output_re: &mut [f64], output_im: &mut [f64]) {
    let planner = Planner64::new(input.len() / 2, Direction::Forward, ReorderMode::OnTheFly);
    real_fft_64_with_planner(input, output_re, output_im, &planner);
}

/// Real-valued FFT for `f64` with a pre-computed planner for `N/2`.
///
/// Output layout is the packed half-spectrum: for `1 <= k < N/2`,
/// `output_re[k]` and `output_im[k]` hold bin `k`; `output_re[0]` holds bin 0
/// (DC) and `output_im[0]` holds bin `N/2` (Nyquist), both of which are
/// purely real for real input. Bins above `N/2` are redundant by Hermitian
/// symmetry and are not produced.
///
/// Runs entirely in the caller's output buffers; nothing is allocated.
///
/// # Panics
///
/// Panics if `input.len()` is not a power of two >= 2, if the output slices
/// are not `input.len() / 2` long, or if the planner is not a forward planner
/// built for `input.len() / 2`.
pub fn real_fft_64_with_planner(
    input: &[f64],
    output_re: &mut [f64],
    output_im: &mut [f64],
    planner: &Planner64,
) {
    let big_n = input.len();
    assert!(big_n >= 2 && big_n.is_power_of_two());
    let half = big_n / 2;
    assert!(output_re.len() == half && output_im.len() == half);
    assert!(matches!(planner.direction, Direction::Forward));

    // Even samples into the real channel, odd samples into the imaginary one
    for (j, pair) in input.chunks_exact(2).enumerate() {
        output_re[j] = pair[0];
        output_im[j] = pair[1];
    }

    fft_64_with_planner(output_re, output_im, planner);

    // Unscramble: with Z the half-length spectrum,
    //   Fe[k] =  (Z[k] + conj(Z[half-k])) / 2   (spectrum of even samples)
    //   Fo[k] = -(Z[k] - conj(Z[half-k])) * i/2 (spectrum of odd samples)
    //   X[k]        = Fe[k] + W_N^k * Fo[k]
    //   X[half - k] = conj(Fe[k] - W_N^k * Fo[k])
    let z0_re = output_re[0];
    let z0_im = output_im[0];
    output_re[0] = z0_re + z0_im;
    output_im[0] = z0_re - z0_im;

    let angle_mult = -std::f64::consts::PI / half as f64;
    for k in 1..=half / 2 {
        let m = half - k;
        let zk_re = output_re[k];
        let zk_im = output_im[k];
        let zm_re = output_re[m];
        let zm_im = output_im[m];

        let fe_re = 0.5 * (zk_re + zm_re);
        let fe_im = 0.5 * (zk_im - zm_im);
        let fo_re = 0.5 * (zk_im + zm_im);
        let fo_im = 0.5 * (zm_re - zk_re);

        let (w_im, w_re) = (angle_mult * k as f64).sin_cos();
        let t_re = w_re * fo_re - w_im * fo_im;
        let t_im = w_re * fo_im + w_im * fo_re;

        output_re[k] = fe_re + t_re;
        output_im[k] = fe_im + t_im;
        output_re[m] = fe_re - t_re;
        output_im[m] = t_im - fe_im;
    }
}
