//! Whole-slice transforms.
//!
//! ## Purpose
//!
//! Function application, generation, running totals, evenly spaced values
//! and sorting with permutation tracking.
//!
//! ## Design notes
//!
//! * **Order**: `apply` and `fill` visit elements in ascending index order.
//! * **Running totals**: `dst[0] = s[0]`, then each element folds in the next
//!   source value with wrapping arithmetic.
//! * **Span**: Spacing is integer-truncated; only the first element is
//!   guaranteed to equal `lo`.
//! * **Argsort**: Delegates to the co-sort engine, so `inds` receives exactly
//!   the swaps applied to `s`.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::sorting::CoSort;

// ============================================================================
// Element Mapping
// ============================================================================

/// Replace every element with `f(element)`.
pub fn apply<F>(mut f: F, s: &mut [i64])
where
    F: FnMut(i64) -> i64,
{
    for val in s.iter_mut() {
        *val = f(*val);
    }
}

/// Overwrite every element with a fresh value from `f`, called once per element.
pub fn fill<F>(mut f: F, s: &mut [i64])
where
    F: FnMut() -> i64,
{
    for val in s.iter_mut() {
        *val = f();
    }
}

// ============================================================================
// Running Totals
// ============================================================================

/// Write the running sums of `s` into `dst`.
///
/// # Panics
///
/// Panics if `dst` and `s` differ in length or `s` is empty.
#[track_caller]
pub fn cumulative_sum(dst: &mut [i64], s: &[i64]) {
    Validator::require_len(dst.len(), s.len());
    Validator::require_non_empty(s.len(), "cumulative_sum");

    dst[0] = s[0];
    for i in 1..s.len() {
        dst[i] = dst[i - 1].wrapping_add(s[i]);
    }
}

/// Write the running products of `s` into `dst`.
///
/// # Panics
///
/// Panics if `dst` and `s` differ in length or `s` is empty.
#[track_caller]
pub fn cumulative_product(dst: &mut [i64], s: &[i64]) {
    Validator::require_len(dst.len(), s.len());
    Validator::require_non_empty(s.len(), "cumulative_product");

    dst[0] = s[0];
    for i in 1..s.len() {
        dst[i] = dst[i - 1].wrapping_mul(s[i]);
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Fill `dst` with `dst.len()` values starting at `lo` and stepping toward `hi`.
///
/// The step is `(hi - lo) / (n - 1)` in integer division, so the last value
/// equals `hi` only when the range divides evenly.
///
/// # Panics
///
/// Panics if `dst.len() < 2`.
#[track_caller]
pub fn span(dst: &mut [i64], lo: i64, hi: i64) {
    let n = dst.len();
    Validator::require_min_len(n, 2);

    let step = hi.wrapping_sub(lo).wrapping_div((n - 1) as i64);
    for (i, val) in dst.iter_mut().enumerate() {
        *val = lo.wrapping_add(step.wrapping_mul(i as i64));
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort `s` ascending in place and record in `inds` where each value came from.
///
/// `inds` is overwritten; afterwards `s[i] == original[inds[i]]`. Equal values
/// may appear in any relative order.
///
/// # Panics
///
/// Panics if `s` and `inds` differ in length.
#[track_caller]
pub fn argsort(s: &mut [i64], inds: &mut [usize]) {
    Validator::require_len(s.len(), inds.len());

    for (i, ind) in inds.iter_mut().enumerate() {
        *ind = i;
    }
    CoSort::new(s, inds).sort();
}
