//! Arbitrary-length DFT via the chirp z-transform (Bluestein's algorithm).
//!
//! A length-N DFT for any N can be written as a linear convolution with a
//! quadratic-phase ("chirp") sequence: with `c[j] = exp(-i*pi*j^2/N)`,
//!
//! ```text
//! X[k] = c[k] * sum_j (x[j] * c[j]) * conj(c[k - j])
//! ```
//!
//! The convolution runs circularly at a power-of-two working length
//! `M >= 2N - 1` through the radix-2 core, so the whole transform stays
//! O(M log M). When N is itself a power of two the planner skips the chirp
//! machinery and degenerates to the plain radix-2 core.

use crate::fft::fft_64_with_planner;
use crate::planner::{Direction, Planner64, ReorderMode};

/// Whether an arbitrary-length plan goes through Bluestein's convolution or
/// straight to the power-of-two core.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CztMode {
    /// The requested length is a power of two; no chirp machinery needed.
    Direct,
    /// Full chirp pre/post-multiplication plus convolution.
    Bluestein,
}

/// Pre-computed coefficient set for a fixed arbitrary transform length.
///
/// Built once per length, immutable, reusable across calls. The chirp window
/// serves both the pre- and the post-multiplication; the time-domain
/// weighting sequence exists only transiently at setup and is retained as
/// its forward transform (the frequency-domain convolution kernel), because
/// nothing else consumes it.
pub struct CztPlanner64 {
    /// The transform length.
    pub n: usize,
    /// The padded power-of-two convolution length, `>= 2n - 1`
    /// (equal to `n` in [`CztMode::Direct`] mode).
    pub working_len: usize,
    /// log2 of `working_len`.
    pub working_log2: usize,
    /// Which pipeline the transform takes.
    pub mode: CztMode,
    /// Chirp window `c[j] = exp(-i*pi*j^2/n)`, length `n`; empty in
    /// [`CztMode::Direct`] mode.
    pub window_re: Vec<f64>,
    pub window_im: Vec<f64>,
    /// Forward spectrum of the circularly-placed conjugate chirp, length
    /// `working_len`; empty in [`CztMode::Direct`] mode.
    pub kernel_re: Vec<f64>,
    pub kernel_im: Vec<f64>,
    forward: Planner64,
    inverse: Option<Planner64>,
}

impl CztPlanner64 {
    /// Build the coefficient set for transforms of length `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n > 0);

        if n.is_power_of_two() {
            let forward = Planner64::new(n, Direction::Forward, ReorderMode::Precomputed);
            return Self {
                n,
                working_len: n,
                working_log2: n.ilog2() as usize,
                mode: CztMode::Direct,
                window_re: Vec::new(),
                window_im: Vec::new(),
                kernel_re: Vec::new(),
                kernel_im: Vec::new(),
                forward,
                inverse: None,
            };
        }

        // Smallest power of two that keeps the circular convolution free of
        // wrap-around aliasing over the first n outputs.
        let working_len = (2 * n - 1).next_power_of_two();

        // j^2 is reduced mod 2n before the angle: exp(-i*pi*j^2/n) has
        // period 2n in j^2, and the reduction keeps the argument small.
        let mut window_re = vec![0.0; n];
        let mut window_im = vec![0.0; n];
        for j in 0..n {
            let angle = -std::f64::consts::PI * ((j * j) % (2 * n)) as f64 / n as f64;
            window_re[j] = angle.cos();
            window_im[j] = angle.sin();
        }

        // Conjugate chirp placed circularly: index j and index m - j both
        // hold conj(c[j]), covering lags -(n-1)..=n-1 of the convolution.
        let mut kernel_re = vec![0.0; working_len];
        let mut kernel_im = vec![0.0; working_len];
        for j in 0..n {
            kernel_re[j] = window_re[j];
            kernel_im[j] = -window_im[j];
            if j > 0 {
                kernel_re[working_len - j] = window_re[j];
                kernel_im[working_len - j] = -window_im[j];
            }
        }

        let forward = Planner64::new(working_len, Direction::Forward, ReorderMode::Precomputed);
        let inverse = Planner64::new(working_len, Direction::Reverse, ReorderMode::Precomputed);

        // The convolution theorem wants the kernel's spectrum, so take it
        // once here rather than on every call.
        fft_64_with_planner(&mut kernel_re, &mut kernel_im, &forward);

        Self {
            n,
            working_len,
            working_log2: working_len.ilog2() as usize,
            mode: CztMode::Bluestein,
            window_re,
            window_im,
            kernel_re,
            kernel_im,
            forward,
            inverse: Some(inverse),
        }
    }
}

/// Forward DFT of arbitrary length `n` through a pre-built [`CztPlanner64`].
///
/// `input_re`/`input_im` and `output_re`/`output_im` are length `n`;
/// `scratch_re`/`scratch_im` must be `planner.working_len` long and are
/// clobbered. Nothing is allocated; repeated calls may reuse the same
/// scratch. The output is the plain unnormalized DFT, identical (within
/// rounding) to what the radix-2 core produces when `n` is a power of two.
///
/// # Panics
///
/// Panics if any slice length disagrees with the planner.
pub fn czt_fft_64(
    input_re: &[f64],
    input_im: &[f64],
    output_re: &mut [f64],
    output_im: &mut [f64],
    scratch_re: &mut [f64],
    scratch_im: &mut [f64],
    planner: &CztPlanner64,
) {
    let n = planner.n;
    let m = planner.working_len;
    assert!(input_re.len() == n && input_im.len() == n);
    assert!(output_re.len() == n && output_im.len() == n);
    assert!(scratch_re.len() == m && scratch_im.len() == m);

    if let CztMode::Direct = planner.mode {
        output_re.copy_from_slice(input_re);
        output_im.copy_from_slice(input_im);
        fft_64_with_planner(output_re, output_im, &planner.forward);
        return;
    }

    let Some(inverse) = planner.inverse.as_ref() else {
        unreachable!("a Bluestein planner always carries an inverse plan");
    };

    // (1) chirp window, zero-padded to the working length
    for j in 0..n {
        scratch_re[j] = input_re[j] * planner.window_re[j] - input_im[j] * planner.window_im[j];
        scratch_im[j] = input_re[j] * planner.window_im[j] + input_im[j] * planner.window_re[j];
    }
    scratch_re[n..m].fill(0.0);
    scratch_im[n..m].fill(0.0);

    // (2) forward transform of the windowed input
    fft_64_with_planner(scratch_re, scratch_im, &planner.forward);

    // (3) pointwise multiply by the kernel spectrum
    for (z_re, (z_im, (k_re, k_im))) in scratch_re.iter_mut().zip(
        scratch_im
            .iter_mut()
            .zip(planner.kernel_re.iter().zip(planner.kernel_im.iter())),
    ) {
        let t_re = *z_re * k_re - *z_im * k_im;
        let t_im = *z_re * k_im + *z_im * k_re;
        *z_re = t_re;
        *z_im = t_im;
    }

    // (4) inverse transform realizes the circular convolution (1/M scaled)
    fft_64_with_planner(scratch_re, scratch_im, inverse);

    // (5) chirp window again, truncated to the first n outputs
    for k in 0..n {
        output_re[k] = scratch_re[k] * planner.window_re[k] - scratch_im[k] * planner.window_im[k];
        output_im[k] = scratch_re[k] * planner.window_im[k] + scratch_im[k] * planner.window_re[k];
    }
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, gen_random_signal, reference_dft};

    use super::*;
    use crate::fft::fft_64;

    fn czt_once(input_re: &[f64], input_im: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let n = input_re.len();
        let planner = CztPlanner64::new(n);
        let mut output_re = vec![0.0; n];
        let mut output_im = vec![0.0; n];
        let mut scratch_re = vec![0.0; planner.working_len];
        let mut scratch_im = vec![0.0; planner.working_len];
        czt_fft_64(
            input_re,
            input_im,
            &mut output_re,
            &mut output_im,
            &mut scratch_re,
            &mut scratch_im,
            &planner,
        );
        (output_re, output_im)
    }

    #[test]
    fn matches_reference_dft_for_primes_and_composites() {
        for n in [1, 2, 3, 5, 6, 7, 11, 12, 13, 17, 20, 31, 45, 97, 100, 189] {
            let mut input_re = vec![0.0; n];
            let mut input_im = vec![0.0; n];
            gen_random_signal(&mut input_re, &mut input_im);

            let (out_re, out_im) = czt_once(&input_re, &input_im);

            let mut expected_re = vec![0.0; n];
            let mut expected_im = vec![0.0; n];
            reference_dft(&input_re, &input_im, &mut expected_re, &mut expected_im);

            for k in 0..n {
                assert_float_closeness(out_re[k], expected_re[k], 1e-7);
                assert_float_closeness(out_im[k], expected_im[k], 1e-7);
            }
        }
    }

    #[test]
    fn power_of_two_degenerates_to_radix2_core() {
        for n in [1, 2, 16, 64, 256] {
            let planner = CztPlanner64::new(n);
            assert_eq!(planner.mode, CztMode::Direct);
            assert_eq!(planner.working_len, n);

            let mut input_re = vec![0.0; n];
            let mut input_im = vec![0.0; n];
            gen_random_signal(&mut input_re, &mut input_im);

            let (out_re, out_im) = czt_once(&input_re, &input_im);

            let mut direct_re = input_re.clone();
            let mut direct_im = input_im.clone();
            fft_64(&mut direct_re, &mut direct_im, Direction::Forward);

            for k in 0..n {
                assert_float_closeness(out_re[k], direct_re[k], 1e-12);
                assert_float_closeness(out_im[k], direct_im[k], 1e-12);
            }
        }
    }

    #[test]
    fn working_length_covers_the_convolution() {
        let planner = CztPlanner64::new(100);
        assert_eq!(planner.mode, CztMode::Bluestein);
        assert!(planner.working_len >= 2 * 100 - 1);
        assert!(planner.working_len.is_power_of_two());
        assert_eq!(planner.working_len, 1 << planner.working_log2);
    }

    #[test]
    fn scratch_is_reusable_across_calls() {
        let n = 37;
        let planner = CztPlanner64::new(n);
        let mut scratch_re = vec![0.0; planner.working_len];
        let mut scratch_im = vec![0.0; planner.working_len];

        for seed in 0..3 {
            let input_re: Vec<f64> = (0..n).map(|i| ((i + seed) % 5) as f64).collect();
            let input_im = vec![0.0; n];
            let mut out_re = vec![0.0; n];
            let mut out_im = vec![0.0; n];
            czt_fft_64(
                &input_re,
                &input_im,
                &mut out_re,
                &mut out_im,
                &mut scratch_re,
                &mut scratch_im,
                &planner,
            );

            let mut expected_re = vec![0.0; n];
            let mut expected_im = vec![0.0; n];
            reference_dft(&input_re, &input_im, &mut expected_re, &mut expected_im);
            for k in 0..n {
                assert_float_closeness(out_re[k], expected_re[k], 1e-8);
                assert_float_closeness(out_im[k], expected_im[k], 1e-8);
            }
        }
    }
}
