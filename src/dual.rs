//! Two real transforms for the price of one complex transform.
//!
//! Sequence A is packed into the real channel and sequence B into the
//! imaginary channel of a single N-point complex FFT. A real input yields an
//! even real / odd imaginary spectrum while an imaginary-channel input yields
//! the opposite, so sums and differences of bins `k` and `N-k` pull the two
//! spectra back apart.
//!
//! Four entry points: radix-2 and radix-4 cores, each with a complex-output
//! and a real-only-output variant. Outputs are unpacked half-spectra of
//! length `N/2 + 1` (bins `0..=N/2`; the rest is redundant by Hermitian
//! symmetry).

use crate::fft::{fft_64_radix4_with_planner, fft_64_with_planner};
use crate::planner::{Direction, Planner64, Radix4Planner64};

/// Pull the spectra of the real-channel and imaginary-channel sequences out
/// of one complex spectrum: `A[k] = (Z[k] + conj(Z[N-k])) / 2`,
/// `B[k] = -i * (Z[k] - conj(Z[N-k])) / 2`, for bins `0..=N/2`.
fn separate_spectra(
    z_re: &[f64],
    z_im: &[f64],
    a_re: &mut [f64],
    a_im: &mut [f64],
    b_re: &mut [f64],
    b_im: &mut [f64],
) {
    let n = z_re.len();
    for k in 0..=n / 2 {
        let nk = (n - k) % n;
        a_re[k] = 0.5 * (z_re[k] + z_re[nk]);
        a_im[k] = 0.5 * (z_im[k] - z_im[nk]);
        b_re[k] = 0.5 * (z_im[k] + z_im[nk]);
        b_im[k] = 0.5 * (z_re[nk] - z_re[k]);
    }
}

/// Real parts only of the same separation.
fn separate_spectra_real(z_re: &[f64], z_im: &[f64], a_re: &mut [f64], b_re: &mut [f64]) {
    let n = z_re.len();
    for k in 0..=n / 2 {
        let nk = (n - k) % n;
        a_re[k] = 0.5 * (z_re[k] + z_re[nk]);
        b_re[k] = 0.5 * (z_im[k] + z_im[nk]);
    }
}

macro_rules! impl_dual_real_fft {
    ($func_name:ident, $planner:ty, $fft_func:path, $core_doc:literal) => {
        /// Transform two independent real sequences with one
        #[doc = $core_doc]
        /// complex FFT.
        ///
        /// `reals` holds sequence A and `imags` sequence B on input; both are
        /// overwritten by the shared complex spectrum. The separated spectra
        /// land in `a_re`/`a_im` and `b_re`/`b_im` as unpacked half-spectra
        /// of length `N/2 + 1`. The result matches two independent
        /// [`real_fft_64`](crate::realfft::real_fft_64) runs to within
        /// floating-point rounding.
        ///
        /// # Panics
        ///
        /// Panics if the input slices differ in length or are not a power of
        /// two long, if any output slice is not `N/2 + 1` long, or if the
        /// planner is not a forward planner for length `N`.
        pub fn $func_name(
            reals: &mut [f64],
            imags: &mut [f64],
            a_re: &mut [f64],
            a_im: &mut [f64],
            b_re: &mut [f64],
            b_im: &mut [f64],
            planner: &$planner,
        ) {
            assert_eq!(reals.len(), imags.len());
            let bins = reals.len() / 2 + 1;
            assert!(a_re.len() == bins && a_im.len() == bins);
            assert!(b_re.len() == bins && b_im.len() == bins);
            assert!(matches!(planner.direction, Direction::Forward));

            $fft_func(reals, imags, planner);
            separate_spectra(reals, imags, a_re, a_im, b_re, b_im);
        }
    };
}

macro_rules! impl_dual_real_fft_real {
    ($func_name:ident, $planner:ty, $fft_func:path, $core_doc:literal) => {
        /// Like the complex-output variant, but with one
        #[doc = $core_doc]
        /// complex FFT and only the real halves of both spectra kept, for
        /// callers that need real-valued results only.
        ///
        /// # Panics
        ///
        /// Same conditions as the complex-output variant.
        pub fn $func_name(
            reals: &mut [f64],
            imags: &mut [f64],
            a_re: &mut [f64],
            b_re: &mut [f64],
            planner: &$planner,
        ) {
            assert_eq!(reals.len(), imags.len());
            let bins = reals.len() / 2 + 1;
            assert!(a_re.len() == bins && b_re.len() == bins);
            assert!(matches!(planner.direction, Direction::Forward));

            $fft_func(reals, imags, planner);
            separate_spectra_real(reals, imags, a_re, b_re);
        }
    };
}

impl_dual_real_fft!(dual_real_fft_64, Planner64, fft_64_with_planner, "radix-2");
impl_dual_real_fft!(
    dual_real_fft_radix4_64,
    Radix4Planner64,
    fft_64_radix4_with_planner,
    "radix-4"
);
impl_dual_real_fft_real!(
    dual_real_fft_real_64,
    Planner64,
    fft_64_with_planner,
    "radix-2"
);
impl_dual_real_fft_real!(
    dual_real_fft_radix4_real_64,
    Radix4Planner64,
    fft_64_radix4_with_planner,
    "radix-4"
);

#[cfg(test)]
mod tests {
    use utilities::assert_float_closeness;

    use super::*;
    use crate::planner::ReorderMode;
    use crate::realfft::real_fft_64;

    fn sine(freq: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * freq * i as f64).sin())
            .collect()
    }

    /// Check an unpacked half-spectrum against a packed `real_fft_64` result.
    fn assert_matches_real_fft(
        seq: &[f64],
        half_re: &[f64],
        half_im: Option<&[f64]>,
        epsilon: f64,
    ) {
        let n = seq.len();
        let mut packed_re = vec![0.0; n / 2];
        let mut packed_im = vec![0.0; n / 2];
        real_fft_64(seq, &mut packed_re, &mut packed_im);

        assert_float_closeness(half_re[0], packed_re[0], epsilon);
        assert_float_closeness(half_re[n / 2], packed_im[0], epsilon);
        for k in 1..n / 2 {
            assert_float_closeness(half_re[k], packed_re[k], epsilon);
        }
        if let Some(half_im) = half_im {
            assert_float_closeness(half_im[0], 0.0, epsilon);
            assert_float_closeness(half_im[n / 2], 0.0, epsilon);
            for k in 1..n / 2 {
                assert_float_closeness(half_im[k], packed_im[k], epsilon);
            }
        }
    }

    #[test]
    fn complex_output_matches_two_real_ffts() {
        for k in 2..11 {
            let n = 1 << k;
            let seq_a = sine(0.019, n);
            let seq_b = sine(0.035, n);

            let mut reals = seq_a.clone();
            let mut imags = seq_b.clone();
            let bins = n / 2 + 1;
            let (mut a_re, mut a_im) = (vec![0.0; bins], vec![0.0; bins]);
            let (mut b_re, mut b_im) = (vec![0.0; bins], vec![0.0; bins]);

            let planner = Planner64::new(n, Direction::Forward, ReorderMode::OnTheFly);
            dual_real_fft_64(
                &mut reals, &mut imags, &mut a_re, &mut a_im, &mut b_re, &mut b_im, &planner,
            );

            assert_matches_real_fft(&seq_a, &a_re, Some(&a_im), 1e-9);
            assert_matches_real_fft(&seq_b, &b_re, Some(&b_im), 1e-9);
        }
    }

    #[test]
    fn real_only_output_matches_real_ffts() {
        let n = 1024;
        let seq_a = sine(0.019, n);
        let seq_b = sine(0.035, n);

        let mut reals = seq_a.clone();
        let mut imags = seq_b.clone();
        let bins = n / 2 + 1;
        let mut a_re = vec![0.0; bins];
        let mut b_re = vec![0.0; bins];

        let planner = Planner64::new(n, Direction::Forward, ReorderMode::Precomputed);
        dual_real_fft_real_64(&mut reals, &mut imags, &mut a_re, &mut b_re, &planner);

        assert_matches_real_fft(&seq_a, &a_re, None, 1e-9);
        assert_matches_real_fft(&seq_b, &b_re, None, 1e-9);
    }

    #[test]
    fn radix4_variants_agree_with_radix2() {
        for n in [16, 32, 64, 256] {
            let seq_a = sine(0.11, n);
            let seq_b: Vec<f64> = (0..n).map(|i| ((i * i) % 7) as f64 - 3.0).collect();
            let bins = n / 2 + 1;

            let p2 = Planner64::new(n, Direction::Forward, ReorderMode::OnTheFly);
            let p4 = Radix4Planner64::new(n, Direction::Forward, ReorderMode::OnTheFly);

            let mut re2 = seq_a.clone();
            let mut im2 = seq_b.clone();
            let (mut a2_re, mut a2_im) = (vec![0.0; bins], vec![0.0; bins]);
            let (mut b2_re, mut b2_im) = (vec![0.0; bins], vec![0.0; bins]);
            dual_real_fft_64(
                &mut re2, &mut im2, &mut a2_re, &mut a2_im, &mut b2_re, &mut b2_im, &p2,
            );

            let mut re4 = seq_a.clone();
            let mut im4 = seq_b.clone();
            let (mut a4_re, mut a4_im) = (vec![0.0; bins], vec![0.0; bins]);
            let (mut b4_re, mut b4_im) = (vec![0.0; bins], vec![0.0; bins]);
            dual_real_fft_radix4_64(
                &mut re4, &mut im4, &mut a4_re, &mut a4_im, &mut b4_re, &mut b4_im, &p4,
            );

            for k in 0..bins {
                assert_float_closeness(a4_re[k], a2_re[k], 1e-9);
                assert_float_closeness(a4_im[k], a2_im[k], 1e-9);
                assert_float_closeness(b4_re[k], b2_re[k], 1e-9);
                assert_float_closeness(b4_im[k], b2_im[k], 1e-9);
            }

            let mut re4r = seq_a.clone();
            let mut im4r = seq_b.clone();
            let mut a4r = vec![0.0; bins];
            let mut b4r = vec![0.0; bins];
            dual_real_fft_radix4_real_64(&mut re4r, &mut im4r, &mut a4r, &mut b4r, &p4);
            for k in 0..bins {
                assert_float_closeness(a4r[k], a2_re[k], 1e-9);
                assert_float_closeness(b4r[k], b2_re[k], 1e-9);
            }
        }
    }
}
