//! Two-lane SIMD accumulation kernels.
//!
//! Sums and inner products walk the input two elements at a time in a
//! `wide::i64x2` accumulator, then fold the lanes and the odd tail with
//! scalar wrapping arithmetic. Lane arithmetic wraps on overflow, so the
//! result is bit-identical to a plain `wrapping_add` / `wrapping_mul` loop.

// External dependencies
use wide::i64x2;

/// Wrapping sum of all elements.
#[inline]
pub fn accumulate_sum(s: &[i64]) -> i64 {
    let mut acc = i64x2::splat(0);

    let chunks = s.chunks_exact(2);
    let tail = chunks.remainder();
    for pair in chunks {
        acc += i64x2::new([pair[0], pair[1]]);
    }

    let [a, b] = acc.to_array();
    let mut total = a.wrapping_add(b);
    for &val in tail {
        total = total.wrapping_add(val);
    }
    total
}

/// Wrapping sum of pairwise products. Callers guarantee equal lengths.
#[inline]
pub fn accumulate_dot(s1: &[i64], s2: &[i64]) -> i64 {
    debug_assert_eq!(s1.len(), s2.len());

    let mut acc = i64x2::splat(0);

    let left = s1.chunks_exact(2);
    let right = s2.chunks_exact(2);
    let (left_tail, right_tail) = (left.remainder(), right.remainder());
    for (a, b) in left.zip(right) {
        acc += i64x2::new([a[0], a[1]]) * i64x2::new([b[0], b[1]]);
    }

    let [a, b] = acc.to_array();
    let mut total = a.wrapping_add(b);
    for (&x, &y) in left_tail.iter().zip(right_tail) {
        total = total.wrapping_add(x.wrapping_mul(y));
    }
    total
}
