//! Predicate search and equality checks.
//!
//! ## Purpose
//!
//! Locating elements that satisfy a predicate, and comparing slices by
//! value, by a custom relation, or by length alone.
//!
//! ## Design notes
//!
//! * **Buffer reuse**: `find` clears the caller's `Vec` instead of allocating
//!   a new one, so a buffer passed in repeatedly keeps its capacity.
//! * **Partial results**: When `find` is asked for more matches than exist, the
//!   buffer still holds every match it saw and the call returns
//!   `SliceError::InsufficientElements`.
//! * **No panics**: Equality checks report differing lengths as `false`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SliceError;

// ============================================================================
// Search
// ============================================================================

/// Collect into `inds` the positions of elements of `s` for which `f` holds.
///
/// `inds` is cleared first. The limit `k` selects how many matches to collect:
///
/// * `k == 0`: none; returns immediately.
/// * `k < 0`: every match.
/// * `k > 0`: the first `k` matches in ascending index order.
///
/// # Errors
///
/// Returns [`SliceError::InsufficientElements`] when `k > 0` and fewer than
/// `k` elements match. `inds` then holds all the matches that were found.
pub fn find<F>(inds: &mut Vec<usize>, mut f: F, s: &[i64], k: isize) -> Result<(), SliceError>
where
    F: FnMut(i64) -> bool,
{
    inds.clear();

    if k == 0 {
        return Ok(());
    }

    if k < 0 {
        inds.extend(
            s.iter()
                .enumerate()
                .filter(|&(_, &val)| f(val))
                .map(|(i, _)| i),
        );
        return Ok(());
    }

    let requested = k.unsigned_abs();
    for (i, &val) in s.iter().enumerate() {
        if f(val) {
            inds.push(i);
            if inds.len() == requested {
                return Ok(());
            }
        }
    }

    Err(SliceError::InsufficientElements {
        found: inds.len(),
        requested,
    })
}

// ============================================================================
// Equality
// ============================================================================

/// True if both slices have the same length and identical elements.
#[inline]
pub fn equal(s1: &[i64], s2: &[i64]) -> bool {
    s1 == s2
}

/// True if both slices have the same length and `f` holds for every element pair.
pub fn equal_func<F>(s1: &[i64], s2: &[i64], mut f: F) -> bool
where
    F: FnMut(i64, i64) -> bool,
{
    if s1.len() != s2.len() {
        return false;
    }
    s1.iter().zip(s2).all(|(&a, &b)| f(a, b))
}

/// True if every slice has the same length; vacuously true for zero or one slice.
pub fn equal_lengths(slices: &[&[i64]]) -> bool {
    match slices.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|slice| slice.len() == first.len()),
    }
}
