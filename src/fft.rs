//! Radix-2 and radix-4 complex FFT entry points.
//!
//! Both cores are in-place decimation-in-time transforms over split
//! real/imaginary arrays: the index reversal is applied to the input
//! internally, stages run from the smallest butterflies up, and the output
//! comes back in natural order. The inverse transform conjugates around the
//! same forward butterflies and applies the `1/N` scale.

use crate::kernels::{dft4, fft_chunk_2, fft_chunk_4, fft_chunk_n, fft_radix4_chunk_n};
use crate::planner::{Direction, Planner64, Radix4Planner64, ReorderMode};
use crate::reorder::{bit_reverse_reorder, digit_reverse_reorder, ReorderSpec};

/// Radix-2 FFT for `f64`, building a one-shot planner internally.
///
/// Prefer [`fft_64_with_planner`] when transforming repeatedly at one length.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or the length is not a power of 2.
pub fn fft_64(reals: &mut [f64], imags: &mut [f64], direction: Direction) {
    assert_eq!(reals.len(), imags.len());
    let planner = Planner64::new(reals.len(), direction, ReorderMode::OnTheFly);
    fft_64_with_planner(reals, imags, &planner);
}

/// Radix-2 FFT for `f64` with a pre-computed planner.
///
/// Runs entirely in the caller's buffers; nothing is allocated on this path.
/// Natural-order input, natural-order output. For [`Direction::Reverse`] the
/// result carries the `1/N` scale.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`, if the length is not a power of 2,
/// or if the planner was built for a different length.
pub fn fft_64_with_planner(reals: &mut [f64], imags: &mut [f64], planner: &Planner64) {
    assert_eq!(reals.len(), imags.len());
    assert!(reals.len().is_power_of_two());

    let n = reals.len();
    let log_n = n.ilog2() as usize;
    assert_eq!(log_n, planner.log_n);

    // DIT consumes bit-reversed input
    let spec = match planner.reorder_table.as_deref() {
        Some(table) => ReorderSpec::Precomputed(table),
        None => ReorderSpec::Computed,
    };
    bit_reverse_reorder(reals, imags, spec);

    // Inverse transform: conjugate in, conjugate and scale out
    if let Direction::Reverse = planner.direction {
        for z_im in imags.iter_mut() {
            *z_im = -*z_im;
        }
    }

    let mut tw_idx = 0;
    for stage in 0..log_n {
        let dist = 1 << stage;
        let chunk_size = dist << 1;

        if chunk_size == 2 {
            fft_chunk_2(reals, imags);
        } else if chunk_size == 4 {
            fft_chunk_4(reals, imags);
        } else {
            let (twiddles_re, twiddles_im) = &planner.stage_twiddles[tw_idx];
            fft_chunk_n(reals, imags, twiddles_re, twiddles_im, dist);
            tw_idx += 1;
        }
    }
    debug_assert_eq!(tw_idx, planner.num_twiddle_stages());

    if let Direction::Reverse = planner.direction {
        let scaling_factor = 1.0 / n as f64;
        for (z_re, z_im) in reals.iter_mut().zip(imags.iter_mut()) {
            *z_re *= scaling_factor;
            *z_im *= -scaling_factor;
        }
    }
}

/// Radix-4 FFT for `f64`, building a one-shot planner internally.
///
/// Numerically equivalent to [`fft_64`]; fewer passes over the data. Lengths
/// that are a power of two but not a power of four take the planner's
/// mixed-radix fallback.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or the length is not a power of 2.
pub fn fft_64_radix4(reals: &mut [f64], imags: &mut [f64], direction: Direction) {
    assert_eq!(reals.len(), imags.len());
    let planner = Radix4Planner64::new(reals.len(), direction, ReorderMode::OnTheFly);
    fft_64_radix4_with_planner(reals, imags, &planner);
}

/// Radix-4 FFT for `f64` with a pre-computed planner.
///
/// Same contract as [`fft_64_with_planner`]: in-place, natural order on both
/// sides, `1/N` scale on the inverse.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`, if the length is not a power of 2,
/// or if the planner was built for a different length.
pub fn fft_64_radix4_with_planner(reals: &mut [f64], imags: &mut [f64], planner: &Radix4Planner64) {
    assert_eq!(reals.len(), imags.len());
    assert!(reals.len().is_power_of_two());

    let n = reals.len();
    let log_n = n.ilog2() as usize;
    assert_eq!(log_n, planner.log_n);

    let spec = match planner.reorder_table.as_deref() {
        Some(table) => ReorderSpec::Precomputed(table),
        None => ReorderSpec::Computed,
    };
    digit_reverse_reorder(reals, imags, spec);

    if let Direction::Reverse = planner.direction {
        for z_im in imags.iter_mut() {
            *z_im = -*z_im;
        }
    }

    let mut quarter = 1;
    if planner.mixed_radix {
        // Setup-time fallback for lengths that are not a power of four:
        // one radix-2 pass over adjacent pairs, then radix-4 stages.
        fft_chunk_2(reals, imags);
        quarter = 2;
    }

    let mut tw_idx = 0;
    while quarter < n {
        if quarter == 1 {
            dft4(reals, imags);
        } else {
            let tw = &planner.stage_twiddles[tw_idx];
            fft_radix4_chunk_n(
                reals, imags, &tw.w1_re, &tw.w1_im, &tw.w2_re, &tw.w2_im, &tw.w3_re, &tw.w3_im,
                quarter,
            );
            tw_idx += 1;
        }
        quarter *= 4;
    }
    debug_assert_eq!(tw_idx, planner.stage_twiddles.len());

    if let Direction::Reverse = planner.direction {
        let scaling_factor = 1.0 / n as f64;
        for (z_re, z_im) in reals.iter_mut().zip(imags.iter_mut()) {
            *z_re *= scaling_factor;
            *z_im *= -scaling_factor;
        }
    }
}
