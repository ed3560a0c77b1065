//! Decimation-in-time butterfly kernels.
//!
//! All kernels are scalar and generic over [`Float`]; `multiversion` lets the
//! compiler specialize them per target feature level so the plain loops can
//! autovectorize. Inverse transforms never reach these kernels directly: the
//! entry points conjugate around the forward butterflies instead.

use num_traits::Float;

/// `chunk_size == 2`, so skip twiddles entirely
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
pub(crate) fn fft_chunk_2<T: Float>(reals: &mut [T], imags: &mut [T]) {
    reals
        .chunks_exact_mut(2)
        .zip(imags.chunks_exact_mut(2))
        .for_each(|(reals_chunk, imags_chunk)| {
            let z0_re = reals_chunk[0];
            let z0_im = imags_chunk[0];
            let z1_re = reals_chunk[1];
            let z1_im = imags_chunk[1];

            reals_chunk[0] = z0_re + z1_re;
            imags_chunk[0] = z0_im + z1_im;
            reals_chunk[1] = z0_re - z1_re;
            imags_chunk[1] = z0_im - z1_im;
        });
}

/// `chunk_size == 4`, so hard code the twiddle factors (1 and -i)
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
pub(crate) fn fft_chunk_4<T: Float>(reals: &mut [T], imags: &mut [T]) {
    const DIST: usize = 2;
    const CHUNK_SIZE: usize = DIST << 1;

    reals
        .chunks_exact_mut(CHUNK_SIZE)
        .zip(imags.chunks_exact_mut(CHUNK_SIZE))
        .for_each(|(reals_chunk, imags_chunk)| {
            let (reals_s0, reals_s1) = reals_chunk.split_at_mut(DIST);
            let (imags_s0, imags_s1) = imags_chunk.split_at_mut(DIST);

            // First pair, twiddle W_4^0 = 1
            let in0_re = reals_s0[0];
            let in1_re = reals_s1[0];
            let in0_im = imags_s0[0];
            let in1_im = imags_s1[0];

            reals_s0[0] = in0_re + in1_re;
            imags_s0[0] = in0_im + in1_im;
            reals_s1[0] = in0_re - in1_re;
            imags_s1[0] = in0_im - in1_im;

            // Second pair, twiddle W_4^1 = -i: (re + i*im) * (-i) = im - i*re
            let in0_re = reals_s0[1];
            let in1_re = reals_s1[1];
            let in0_im = imags_s0[1];
            let in1_im = imags_s1[1];

            reals_s0[1] = in0_re + in1_im;
            imags_s0[1] = in0_im - in1_re;
            reals_s1[1] = in0_re - in1_im;
            imags_s1[1] = in0_im + in1_re;
        });
}

/// General DIT butterfly: `top = a + W*b`, `bottom = a - W*b` over pairs
/// `dist` apart, with one twiddle per butterfly position.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
pub(crate) fn fft_chunk_n<T: Float>(
    reals: &mut [T],
    imags: &mut [T],
    twiddles_re: &[T],
    twiddles_im: &[T],
    dist: usize,
) {
    let chunk_size = dist << 1;

    reals
        .chunks_exact_mut(chunk_size)
        .zip(imags.chunks_exact_mut(chunk_size))
        .for_each(|(reals_chunk, imags_chunk)| {
            let (reals_s0, reals_s1) = reals_chunk.split_at_mut(dist);
            let (imags_s0, imags_s1) = imags_chunk.split_at_mut(dist);

            reals_s0
                .iter_mut()
                .zip(reals_s1.iter_mut())
                .zip(imags_s0.iter_mut())
                .zip(imags_s1.iter_mut())
                .zip(twiddles_re.iter())
                .zip(twiddles_im.iter())
                .for_each(|(((((re_s0, re_s1), im_s0), im_s1), w_re), w_im)| {
                    let in0_re = *re_s0;
                    let in0_im = *im_s0;
                    let in1_re = *re_s1;
                    let in1_im = *im_s1;

                    let t_re = *w_re * in1_re - *w_im * in1_im;
                    let t_im = *w_re * in1_im + *w_im * in1_re;

                    *re_s0 = in0_re + t_re;
                    *im_s0 = in0_im + t_im;
                    *re_s1 = in0_re - t_re;
                    *im_s1 = in0_im - t_im;
                });
        });
}

/// 4-point complex DFT applied to each consecutive block of four elements.
///
/// This is both the twiddle-free first stage of the radix-4 core and a
/// standalone primitive:
///
/// ```text
/// X0 = (x0 + x2) + (x1 + x3)
/// X1 = (x0 - x2) - i*(x1 - x3)
/// X2 = (x0 + x2) - (x1 + x3)
/// X3 = (x0 - x2) + i*(x1 - x3)
/// ```
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or the length is not a multiple of 4.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
pub fn dft4<T: Float>(reals: &mut [T], imags: &mut [T]) {
    assert_eq!(reals.len(), imags.len());
    assert_eq!(reals.len() % 4, 0);

    reals
        .chunks_exact_mut(4)
        .zip(imags.chunks_exact_mut(4))
        .for_each(|(reals_chunk, imags_chunk)| {
            let sum02_re = reals_chunk[0] + reals_chunk[2];
            let sum02_im = imags_chunk[0] + imags_chunk[2];
            let dif02_re = reals_chunk[0] - reals_chunk[2];
            let dif02_im = imags_chunk[0] - imags_chunk[2];
            let sum13_re = reals_chunk[1] + reals_chunk[3];
            let sum13_im = imags_chunk[1] + imags_chunk[3];
            let dif13_re = reals_chunk[1] - reals_chunk[3];
            let dif13_im = imags_chunk[1] - imags_chunk[3];

            reals_chunk[0] = sum02_re + sum13_re;
            imags_chunk[0] = sum02_im + sum13_im;
            reals_chunk[1] = dif02_re + dif13_im;
            imags_chunk[1] = dif02_im - dif13_re;
            reals_chunk[2] = sum02_re - sum13_re;
            imags_chunk[2] = sum02_im - sum13_im;
            reals_chunk[3] = dif02_re - dif13_im;
            imags_chunk[3] = dif02_im + dif13_re;
        });
}

/// Radix-4 DIT combine: merges four sub-DFTs of length `quarter` into one DFT
/// of length `4 * quarter`, one block at a time.
///
/// With `t_j = W^jq * x[j*quarter + q]`, the four outputs per position `q`
/// are the 4-point DFT of `(t0, t1, t2, t3)`.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
#[allow(clippy::too_many_arguments)]
pub(crate) fn fft_radix4_chunk_n<T: Float>(
    reals: &mut [T],
    imags: &mut [T],
    w1_re: &[T],
    w1_im: &[T],
    w2_re: &[T],
    w2_im: &[T],
    w3_re: &[T],
    w3_im: &[T],
    quarter: usize,
) {
    let chunk_size = quarter << 2;

    reals
        .chunks_exact_mut(chunk_size)
        .zip(imags.chunks_exact_mut(chunk_size))
        .for_each(|(reals_chunk, imags_chunk)| {
            for q in 0..quarter {
                let t0_re = reals_chunk[q];
                let t0_im = imags_chunk[q];

                let b_re = reals_chunk[quarter + q];
                let b_im = imags_chunk[quarter + q];
                let t1_re = w1_re[q] * b_re - w1_im[q] * b_im;
                let t1_im = w1_re[q] * b_im + w1_im[q] * b_re;

                let c_re = reals_chunk[2 * quarter + q];
                let c_im = imags_chunk[2 * quarter + q];
                let t2_re = w2_re[q] * c_re - w2_im[q] * c_im;
                let t2_im = w2_re[q] * c_im + w2_im[q] * c_re;

                let d_re = reals_chunk[3 * quarter + q];
                let d_im = imags_chunk[3 * quarter + q];
                let t3_re = w3_re[q] * d_re - w3_im[q] * d_im;
                let t3_im = w3_re[q] * d_im + w3_im[q] * d_re;

                let sum02_re = t0_re + t2_re;
                let sum02_im = t0_im + t2_im;
                let dif02_re = t0_re - t2_re;
                let dif02_im = t0_im - t2_im;
                let sum13_re = t1_re + t3_re;
                let sum13_im = t1_im + t3_im;
                let dif13_re = t1_re - t3_re;
                let dif13_im = t1_im - t3_im;

                reals_chunk[q] = sum02_re + sum13_re;
                imags_chunk[q] = sum02_im + sum13_im;
                reals_chunk[quarter + q] = dif02_re + dif13_im;
                imags_chunk[quarter + q] = dif02_im - dif13_re;
                reals_chunk[2 * quarter + q] = sum02_re - sum13_re;
                imags_chunk[2 * quarter + q] = sum02_im - sum13_im;
                reals_chunk[3 * quarter + q] = dif02_re - dif13_im;
                imags_chunk[3 * quarter + q] = dif02_im + dif13_re;
            }
        });
}
