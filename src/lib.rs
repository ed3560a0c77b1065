//! Radix-2, radix-4 and arbitrary-length FFT engines over flat, caller-owned
//! sample arrays.
//!
//! Real and imaginary channels are always separate parallel `f64` slices,
//! never interleaved. All transforms are synchronous, single-threaded and
//! in-place; the planner structs own every piece of per-length state
//! (twiddles, reorder tables, chirp coefficients), so the engines are
//! reentrant as long as each thread brings its own planners and buffers.
//!
//! Entry points, smallest to largest:
//!
//! - [`fft_64`] / [`fft_64_with_planner`] — radix-2 complex FFT, forward and
//!   inverse via [`Direction`].
//! - [`fft_64_radix4`] / [`fft_64_radix4_with_planner`] — radix-4 complex
//!   FFT, same results in fewer passes.
//! - [`real_fft_64`] — N-point real transform at N/2-point cost.
//! - [`dual_real_fft_64`] and friends — two real transforms through one
//!   complex transform.
//! - [`czt_fft_64`] — any length at all, via Bluestein's chirp z-transform.
//!
//! Every transform is natural-order in, natural-order out; the index
//! reversal the decimation-in-time cores need is applied internally and is
//! also exposed standalone in [`reorder`].

pub mod czt;
pub mod dual;
pub mod fft;
pub mod kernels;
pub mod planner;
pub mod realfft;
pub mod reorder;
pub mod utils;

pub use czt::{czt_fft_64, CztMode, CztPlanner64};
pub use dual::{
    dual_real_fft_64, dual_real_fft_radix4_64, dual_real_fft_radix4_real_64, dual_real_fft_real_64,
};
pub use fft::{fft_64, fft_64_radix4, fft_64_radix4_with_planner, fft_64_with_planner};
pub use kernels::dft4;
pub use planner::{Direction, Planner64, Radix4Planner64, ReorderMode};
pub use realfft::{real_fft_64, real_fft_64_with_planner};

#[cfg(feature = "complex-nums")]
use crate::utils::{combine_re_im, deinterleave_complex64};
#[cfg(feature = "complex-nums")]
use num_complex::Complex;

/// Radix-2 FFT over a buffer of [`Complex<f64>`] values.
///
/// Convenience wrapper around [`fft_64`] for callers holding interleaved
/// complex data; deinterleaves into the split-channel representation and
/// back, so it allocates two scratch vectors per call.
#[cfg(feature = "complex-nums")]
pub fn fft_64_complex(signal: &mut [Complex<f64>], direction: Direction) {
    let (mut reals, mut imags) = deinterleave_complex64(signal);
    fft_64(&mut reals, &mut imags, direction);
    signal.copy_from_slice(&combine_re_im(&reals, &imags));
}
