//! The planner module provides a convenient interface for planning and executing
//! a Fast Fourier Transform (FFT). A planner is responsible for pre-computing
//! the twiddle factors for every decimation stage of a fixed transform length,
//! and optionally a reorder index table, based on the direction of the FFT.
//!
//! A planner built for length `N` must only ever be used with length-`N`
//! buffers; the transform entry points assert this pairing.

use crate::reorder::{bit_reverse_table, digit_reverse_table};

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Copy, Clone, Debug)]
pub enum Direction {
    /// Leave the exponent term in the twiddle factor alone
    Forward = 1,
    /// Multiply the exponent term in the twiddle factor by -1
    Reverse = -1,
}

/// How the input-side index reversal is carried out.
///
/// The reversed address of each element can either be recomputed on the fly
/// (no extra memory) or gathered from an index table built once at planning
/// time (faster for repeated calls at the same length).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReorderMode {
    /// Compute each reversed address with bit arithmetic per element.
    #[default]
    OnTheFly,
    /// Build the permutation index table once and gather through it.
    Precomputed,
}

/// Radix-2 planner: pre-computed twiddle factors for all `log2(N)` stages of
/// a decimation-in-time FFT.
///
/// Stages with butterfly width 2 or 4 use hardcoded kernels and carry no
/// twiddles; every later stage with distance `d` stores the `d` factors
/// `W_2d^k = exp(-i*pi*k/d)`.
pub struct Planner64 {
    /// Twiddles for each stage with butterfly width > 4, in stage order.
    /// Each element holds (twiddles_re, twiddles_im) for that stage.
    pub stage_twiddles: Vec<(Vec<f64>, Vec<f64>)>,
    /// The direction of the FFT associated with this `Planner`
    pub direction: Direction,
    /// The log2 of the FFT size
    pub log_n: usize,
    /// Bit-reversal index table, present in [`ReorderMode::Precomputed`] mode.
    pub reorder_table: Option<Vec<usize>>,
}

impl Planner64 {
    /// Create a `Planner` for an FFT of size `num_points`.
    /// The twiddle factors are pre-computed based on the provided [`Direction`].
    /// For `Forward`, use [`Direction::Forward`].
    /// For `Reverse`, use [`Direction::Reverse`].
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 1` or if `num_points` is __not__ a power of 2.
    pub fn new(num_points: usize, direction: Direction, reorder_mode: ReorderMode) -> Self {
        assert!(num_points > 0 && num_points.is_power_of_two());

        let log_n = num_points.ilog2() as usize;
        let mut stage_twiddles = Vec::new();

        for stage in 0..log_n {
            let dist = 1 << stage;
            let chunk_size = dist << 1;

            // Widths 2 and 4 are handled by twiddle-free kernels.
            if chunk_size > 4 {
                let mut twiddles_re = vec![0.0; dist];
                let mut twiddles_im = vec![0.0; dist];

                let angle_mult = -2.0 * std::f64::consts::PI / chunk_size as f64;
                for (k, (w_re, w_im)) in twiddles_re
                    .iter_mut()
                    .zip(twiddles_im.iter_mut())
                    .enumerate()
                {
                    let angle = angle_mult * k as f64;
                    *w_re = angle.cos();
                    *w_im = angle.sin();
                }

                stage_twiddles.push((twiddles_re, twiddles_im));
            }
        }

        let reorder_table = match reorder_mode {
            ReorderMode::OnTheFly => None,
            ReorderMode::Precomputed => Some(bit_reverse_table(num_points)),
        };

        Self {
            stage_twiddles,
            direction,
            log_n,
            reorder_table,
        }
    }

    pub(crate) fn num_twiddle_stages(&self) -> usize {
        self.stage_twiddles.len()
    }
}

/// Twiddle factors for one radix-4 combine stage: `W^q`, `W^2q` and `W^3q`
/// over the quarter width, as parallel real/imaginary arrays.
pub struct Radix4Twiddles {
    pub w1_re: Vec<f64>,
    pub w1_im: Vec<f64>,
    pub w2_re: Vec<f64>,
    pub w2_im: Vec<f64>,
    pub w3_re: Vec<f64>,
    pub w3_im: Vec<f64>,
}

impl Radix4Twiddles {
    /// Twiddles for combining four sub-DFTs of length `quarter` into one DFT
    /// of length `4 * quarter`.
    fn new(quarter: usize) -> Self {
        let mut w1_re = vec![0.0; quarter];
        let mut w1_im = vec![0.0; quarter];
        let mut w2_re = vec![0.0; quarter];
        let mut w2_im = vec![0.0; quarter];
        let mut w3_re = vec![0.0; quarter];
        let mut w3_im = vec![0.0; quarter];

        let angle_mult = -2.0 * std::f64::consts::PI / (4 * quarter) as f64;
        for q in 0..quarter {
            let angle = angle_mult * q as f64;
            w1_re[q] = angle.cos();
            w1_im[q] = angle.sin();
            w2_re[q] = (2.0 * angle).cos();
            w2_im[q] = (2.0 * angle).sin();
            w3_re[q] = (3.0 * angle).cos();
            w3_im[q] = (3.0 * angle).sin();
        }

        Self {
            w1_re,
            w1_im,
            w2_re,
            w2_im,
            w3_re,
            w3_im,
        }
    }
}

/// Radix-4 planner: pre-computed twiddles for every radix-4 combine stage,
/// plus the digit-reversal table in [`ReorderMode::Precomputed`] mode.
///
/// When `log2(N)` is odd, `N` is not a power of four; the planner records the
/// mixed-radix fallback at setup time: one radix-2 pass over adjacent pairs
/// precedes the radix-4 stages, and the index permutation generalizes base-4
/// digit reversal accordingly.
pub struct Radix4Planner64 {
    /// Twiddles for each radix-4 combine, ordered smallest butterfly first.
    pub stage_twiddles: Vec<Radix4Twiddles>,
    /// The direction of the FFT
    pub direction: Direction,
    /// The log2 of the FFT size
    pub log_n: usize,
    /// Set when `log2(N)` is odd: a leading radix-2 pass is required.
    pub mixed_radix: bool,
    /// Digit-reversal index table, present in [`ReorderMode::Precomputed`] mode.
    pub reorder_table: Option<Vec<usize>>,
}

impl Radix4Planner64 {
    /// Create a radix-4 planner for an FFT of size `num_points`.
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 1` or if `num_points` is __not__ a power of 2.
    pub fn new(num_points: usize, direction: Direction, reorder_mode: ReorderMode) -> Self {
        assert!(num_points > 0 && num_points.is_power_of_two());

        let log_n = num_points.ilog2() as usize;
        let mixed_radix = log_n % 2 == 1;

        let mut stage_twiddles = Vec::new();
        // Sub-DFT length going into the first radix-4 combine: 2 after the
        // mixed-radix pass, 1 otherwise (the twiddle-free 4-point combine).
        let mut quarter = if mixed_radix { 2 } else { 1 };
        while quarter < num_points {
            if quarter > 1 {
                stage_twiddles.push(Radix4Twiddles::new(quarter));
            }
            quarter *= 4;
        }

        let reorder_table = match reorder_mode {
            ReorderMode::OnTheFly => None,
            ReorderMode::Precomputed => Some(digit_reverse_table(num_points)),
        };

        Self {
            stage_twiddles,
            direction,
            log_n,
            mixed_radix,
            reorder_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_twiddles_for_tiny_lengths() {
        for num_points in [1, 2, 4] {
            let planner = Planner64::new(num_points, Direction::Forward, ReorderMode::OnTheFly);
            assert_eq!(planner.num_twiddle_stages(), 0);
        }
    }

    #[test]
    fn stage_twiddle_counts() {
        let planner = Planner64::new(64, Direction::Forward, ReorderMode::OnTheFly);
        // Stages with widths 8, 16, 32, 64 carry twiddles.
        assert_eq!(planner.num_twiddle_stages(), 4);
        let dists: Vec<usize> = planner
            .stage_twiddles
            .iter()
            .map(|(re, _)| re.len())
            .collect();
        assert_eq!(dists, vec![4, 8, 16, 32]);
    }

    #[test]
    fn first_twiddle_is_unity() {
        let planner = Planner64::new(32, Direction::Forward, ReorderMode::OnTheFly);
        for (re, im) in &planner.stage_twiddles {
            assert!((re[0] - 1.0).abs() < 1e-15);
            assert!(im[0].abs() < 1e-15);
        }
    }

    #[test]
    fn radix4_mixed_flag() {
        let p16 = Radix4Planner64::new(16, Direction::Forward, ReorderMode::OnTheFly);
        assert!(!p16.mixed_radix);
        // Stages: twiddle-free 4-point pass, then one combine of quarter 4.
        assert_eq!(p16.stage_twiddles.len(), 1);
        assert_eq!(p16.stage_twiddles[0].w1_re.len(), 4);

        let p32 = Radix4Planner64::new(32, Direction::Forward, ReorderMode::OnTheFly);
        assert!(p32.mixed_radix);
        // Radix-2 pass, then combines with quarters 2 and 8.
        assert_eq!(p32.stage_twiddles.len(), 2);
        assert_eq!(p32.stage_twiddles[0].w1_re.len(), 2);
        assert_eq!(p32.stage_twiddles[1].w1_re.len(), 8);
    }

    #[test]
    fn precomputed_reorder_table() {
        let planner = Planner64::new(8, Direction::Forward, ReorderMode::Precomputed);
        assert_eq!(
            planner.reorder_table.as_deref(),
            Some(&[0, 4, 2, 6, 1, 5, 3, 7][..])
        );
    }
}
