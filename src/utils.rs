//! Utility functions such as interleave/deinterleave

#[cfg(feature = "complex-nums")]
use num_complex::Complex;

#[cfg(feature = "complex-nums")]
use num_traits::Float;

#[cfg(feature = "complex-nums")]
use bytemuck::cast_slice;

/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])` for any length
#[cfg(feature = "complex-nums")]
pub(crate) fn deinterleave<T: Copy + Default>(input: &[T]) -> (Vec<T>, Vec<T>) {
    let out_len = input.len() / 2;
    let mut out_first = vec![T::default(); out_len];
    let mut out_second = vec![T::default(); out_len];

    input
        .chunks_exact(2)
        .zip(out_first.iter_mut())
        .zip(out_second.iter_mut())
        .for_each(|((pair, first), second)| {
            *first = pair[0];
            *second = pair[1];
        });

    (out_first, out_second)
}

/// Utility function to separate a slice of [`Complex<f64>`]
/// into a pair of real/imaginary component vectors.
#[cfg(feature = "complex-nums")]
pub(crate) fn deinterleave_complex64(signal: &[Complex<f64>]) -> (Vec<f64>, Vec<f64>) {
    let complex_t: &[f64] = cast_slice(signal);
    deinterleave(complex_t)
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
#[cfg(feature = "complex-nums")]
pub(crate) fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}

#[cfg(all(test, feature = "complex-nums"))]
mod tests {
    use super::*;

    #[test]
    fn deinterleave_even_length() {
        let signal: Vec<f64> = (0..16).map(f64::from).collect();
        let (first, second) = deinterleave(&signal);
        assert!(first.iter().all(|x| *x as usize % 2 == 0));
        assert!(second.iter().all(|x| *x as usize % 2 == 1));
    }

    #[test]
    fn combine_round_trips() {
        let reals = vec![1.0, 3.0];
        let imags = vec![2.0, 4.0];
        let combined = combine_re_im(&reals, &imags);
        assert_eq!(combined, vec![Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)]);

        let (r, i) = deinterleave_complex64(&combined);
        assert_eq!(r, reals);
        assert_eq!(i, imags);
    }
}
