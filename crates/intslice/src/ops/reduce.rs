//! Reductions over a slice.
//!
//! ## Purpose
//!
//! Sum, product, dot product, extreme values and predicate counts.
//!
//! ## Design notes
//!
//! * **Identities**: `sum(&[]) == 0` and `product(&[]) == 1`.
//! * **Wrapping**: Accumulators wrap on overflow; `sum` and `dot` run on the
//!   two-lane SIMD kernels, which wrap identically.
//! * **Ties**: `min` and `max` report the first index holding the extreme.
//!
//! ## Non-goals
//!
//! * Overflow detection.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::lanes::{accumulate_dot, accumulate_sum};

// ============================================================================
// Arithmetic Reductions
// ============================================================================

/// Sum of all elements; 0 for an empty slice.
#[inline]
pub fn sum(s: &[i64]) -> i64 {
    accumulate_sum(s)
}

/// Product of all elements; 1 for an empty slice.
pub fn product(s: &[i64]) -> i64 {
    s.iter().fold(1i64, |acc, &val| acc.wrapping_mul(val))
}

/// Dot product `sum(s1[i] * s2[i])`.
///
/// # Panics
///
/// Panics if `s1` and `s2` differ in length.
#[track_caller]
pub fn dot(s1: &[i64], s2: &[i64]) -> i64 {
    Validator::require_len(s1.len(), s2.len());
    accumulate_dot(s1, s2)
}

// ============================================================================
// Extremes
// ============================================================================

/// Largest element and the first index where it occurs.
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
pub fn max(s: &[i64]) -> (i64, usize) {
    Validator::require_non_empty(s.len(), "max");

    let mut best = s[0];
    let mut ind = 0;
    for (i, &val) in s.iter().enumerate().skip(1) {
        if val > best {
            best = val;
            ind = i;
        }
    }
    (best, ind)
}

/// Smallest element and the first index where it occurs.
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
pub fn min(s: &[i64]) -> (i64, usize) {
    Validator::require_non_empty(s.len(), "min");

    let mut best = s[0];
    let mut ind = 0;
    for (i, &val) in s.iter().enumerate().skip(1) {
        if val < best {
            best = val;
            ind = i;
        }
    }
    (best, ind)
}

// ============================================================================
// Predicates
// ============================================================================

/// Number of elements for which `f` returns true.
pub fn count<F>(mut f: F, s: &[i64]) -> usize
where
    F: FnMut(i64) -> bool,
{
    s.iter().filter(|&&val| f(val)).count()
}
