//! Bit-reversal and digit-reversal permutations.
//!
//! The decimation-in-time cores consume their input in reversed index order:
//! base-2 bit reversal for the radix-2 core, base-4 digit reversal for the
//! radix-4 core (generalized to the mixed `2 * 4^k` factorization when the
//! length is not a power of four). Both are exposed here as standalone
//! utilities and used internally by the transform entry points.
//!
//! All tables are gather tables: `table[i]` is the source index whose value
//! ends up in slot `i`.

/// How a reorder call obtains the permutation.
#[derive(Copy, Clone, Debug)]
pub enum ReorderSpec<'a> {
    /// Compute the reversed address of each index on the fly.
    Computed,
    /// Gather through a table built by [`bit_reverse_table`] or
    /// [`digit_reverse_table`] for the same length.
    Precomputed(&'a [usize]),
}

/// Reverse the lowest `log_n` bits of `x`.
#[inline]
pub fn bit_reverse_index(x: usize, log_n: usize) -> usize {
    if log_n == 0 {
        return x;
    }
    let shift = usize::BITS as usize - log_n;
    x.reverse_bits() >> shift
}

/// Reverse the base-4 digits of `i` for a transform of length `n`.
///
/// For `n` a power of four this is plain base-4 digit reversal. For the mixed
/// `2 * 4^k` case the leftover base-2 digit sits at the top of the index and
/// lands in the lowest output position, matching the stage order of the
/// mixed-radix core (radix-2 pass first, then radix-4 combines).
#[inline]
pub fn digit_reverse_index(i: usize, n: usize) -> usize {
    let mut m = n;
    let mut pos = 1;
    let mut r = 0;
    while m > 2 {
        m /= 4;
        r += ((i / m) % 4) * pos;
        pos *= 4;
    }
    if m == 2 {
        r += (i % 2) * pos;
    }
    r
}

/// Build the bit-reversal gather table for length `n`.
///
/// # Panics
///
/// Panics if `n` is not a power of two.
pub fn bit_reverse_table(n: usize) -> Vec<usize> {
    assert!(n.is_power_of_two());
    let log_n = n.ilog2() as usize;
    (0..n).map(|i| bit_reverse_index(i, log_n)).collect()
}

/// Build the digit-reversal gather table for length `n`.
///
/// # Panics
///
/// Panics if `n` is not a power of two.
pub fn digit_reverse_table(n: usize) -> Vec<usize> {
    assert!(n.is_power_of_two());
    (0..n).map(|i| digit_reverse_index(i, n)).collect()
}

/// Gather `src` into `dst` through a permutation table: `dst[i] = src[table[i]]`.
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn reorder_into<T: Copy>(src: &[T], dst: &mut [T], table: &[usize]) {
    assert!(src.len() == dst.len() && src.len() == table.len());
    for (d, &s) in dst.iter_mut().zip(table.iter()) {
        *d = src[s];
    }
}

/// Apply the bit-reversal permutation to both channels in place.
///
/// Bit reversal is an involution, so a single swap pass suffices.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`, if the length is not a power of
/// two, or if a precomputed table has the wrong length.
pub fn bit_reverse_reorder(reals: &mut [f64], imags: &mut [f64], spec: ReorderSpec<'_>) {
    assert_eq!(reals.len(), imags.len());
    let n = reals.len();
    assert!(n.is_power_of_two());
    let log_n = n.ilog2() as usize;

    match spec {
        ReorderSpec::Computed => {
            for i in 0..n {
                let j = bit_reverse_index(i, log_n);
                if i < j {
                    reals.swap(i, j);
                    imags.swap(i, j);
                }
            }
        }
        ReorderSpec::Precomputed(table) => {
            assert_eq!(table.len(), n);
            for (i, &j) in table.iter().enumerate() {
                if i < j {
                    reals.swap(i, j);
                    imags.swap(i, j);
                }
            }
        }
    }
}

/// Apply the digit-reversal permutation to both channels in place.
///
/// The mixed-radix permutation is not an involution, so this rotates each
/// permutation cycle instead of swapping; still O(1) extra space.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`, if the length is not a power of
/// two, or if a precomputed table has the wrong length.
pub fn digit_reverse_reorder(reals: &mut [f64], imags: &mut [f64], spec: ReorderSpec<'_>) {
    assert_eq!(reals.len(), imags.len());
    let n = reals.len();
    assert!(n.is_power_of_two());

    match spec {
        ReorderSpec::Computed => apply_cycles(reals, imags, |i| digit_reverse_index(i, n)),
        ReorderSpec::Precomputed(table) => {
            assert_eq!(table.len(), n);
            apply_cycles(reals, imags, |i| table[i]);
        }
    }
}

/// Permute both channels in place by the gather map `index`:
/// `new[i] = old[index(i)]`. Each cycle is rotated once, starting from its
/// smallest element.
fn apply_cycles(reals: &mut [f64], imags: &mut [f64], index: impl Fn(usize) -> usize) {
    let n = reals.len();
    for i in 0..n {
        // Only the smallest index of each cycle drives the rotation.
        let mut probe = index(i);
        while probe > i {
            probe = index(probe);
        }
        if probe < i {
            continue;
        }

        let tmp_re = reals[i];
        let tmp_im = imags[i];
        let mut j = i;
        loop {
            let k = index(j);
            if k == i {
                reals[j] = tmp_re;
                imags[j] = tmp_im;
                break;
            }
            reals[j] = reals[k];
            imags[j] = imags[k];
            j = k;
        }
    }
}
