//! Element-wise arithmetic.
//!
//! ## Purpose
//!
//! Addition, subtraction, multiplication, division and scaling of `i64`
//! slices, each in an in-place form and, where a second operand exists, a
//! `_to` form that writes into a caller-supplied destination.
//!
//! ## Design notes
//!
//! * **Wrapping**: `+`, `-` and `*` wrap on overflow in every build profile.
//! * **Division**: Truncates toward zero. A zero divisor panics natively and is
//!   not checked beforehand; `i64::MIN / -1` wraps to `i64::MIN`.
//! * **Shape checks**: Every buffer involved must have the same length, or the
//!   call panics before writing anything.
//!
//! ## Non-goals
//!
//! * Checked or saturating arithmetic.

// Internal dependencies
use crate::engine::validator::Validator;

// ============================================================================
// Addition
// ============================================================================

/// Add every slice in `slices` element-wise into `dst`.
///
/// `dst` accumulates: pass a zeroed buffer for the plain sum, or the first
/// addend itself for the in-place form (`add(&mut a, &[&b, &c])`). With no
/// slices, `dst` is left untouched.
///
/// # Panics
///
/// Panics if any slice's length differs from `dst.len()`.
#[track_caller]
pub fn add(dst: &mut [i64], slices: &[&[i64]]) {
    Validator::require_all_len(dst.len(), slices);

    for slice in slices {
        for (d, &val) in dst.iter_mut().zip(slice.iter()) {
            *d = d.wrapping_add(val);
        }
    }
}

/// Overwrite `dst` with the element-wise sum of `slices`.
///
/// Unlike [`add`], the previous contents of `dst` do not contribute. With no
/// slices, `dst` is left untouched.
///
/// # Panics
///
/// Panics if any slice's length differs from `dst.len()`.
#[track_caller]
pub fn add_to(dst: &mut [i64], slices: &[&[i64]]) {
    let Some((first, rest)) = slices.split_first() else {
        return;
    };
    Validator::require_all_len(dst.len(), slices);

    dst.copy_from_slice(first);
    for slice in rest {
        for (d, &val) in dst.iter_mut().zip(slice.iter()) {
            *d = d.wrapping_add(val);
        }
    }
}

/// Add `c` to every element of `s`.
pub fn add_constant(c: i64, s: &mut [i64]) {
    for val in s.iter_mut() {
        *val = val.wrapping_add(c);
    }
}

/// Compute `dst[i] += alpha * s[i]`.
///
/// # Panics
///
/// Panics if `dst` and `s` differ in length.
#[track_caller]
pub fn add_scaled(dst: &mut [i64], alpha: i64, s: &[i64]) {
    Validator::require_len(dst.len(), s.len());

    for (d, &val) in dst.iter_mut().zip(s) {
        *d = d.wrapping_add(alpha.wrapping_mul(val));
    }
}

/// Compute `dst[i] = y[i] + alpha * s[i]`.
///
/// To accumulate into `y` itself, use [`add_scaled`].
///
/// # Panics
///
/// Panics if `dst`, `y` and `s` are not all the same length.
#[track_caller]
pub fn add_scaled_to(dst: &mut [i64], y: &[i64], alpha: i64, s: &[i64]) {
    Validator::require_len(dst.len(), s.len());
    Validator::require_len(dst.len(), y.len());

    for ((d, &yv), &sv) in dst.iter_mut().zip(y).zip(s) {
        *d = yv.wrapping_add(alpha.wrapping_mul(sv));
    }
}

// ============================================================================
// Subtraction
// ============================================================================

/// Compute `s[i] -= t[i]`.
///
/// # Panics
///
/// Panics if `s` and `t` differ in length.
#[track_caller]
pub fn subtract(s: &mut [i64], t: &[i64]) {
    Validator::require_len(s.len(), t.len());

    for (a, &b) in s.iter_mut().zip(t) {
        *a = a.wrapping_sub(b);
    }
}

/// Compute `dst[i] = s[i] - t[i]`.
///
/// # Panics
///
/// Panics if `dst`, `s` and `t` are not all the same length.
#[track_caller]
pub fn subtract_to(dst: &mut [i64], s: &[i64], t: &[i64]) {
    Validator::require_len(s.len(), t.len());
    Validator::require_len(s.len(), dst.len());

    for ((d, &a), &b) in dst.iter_mut().zip(s).zip(t) {
        *d = a.wrapping_sub(b);
    }
}

// ============================================================================
// Multiplication
// ============================================================================

/// Compute `s[i] *= t[i]`.
///
/// # Panics
///
/// Panics if `s` and `t` differ in length.
#[track_caller]
pub fn multiply(s: &mut [i64], t: &[i64]) {
    Validator::require_len(s.len(), t.len());

    for (a, &b) in s.iter_mut().zip(t) {
        *a = a.wrapping_mul(b);
    }
}

/// Compute `dst[i] = s[i] * t[i]`.
///
/// # Panics
///
/// Panics if `dst`, `s` and `t` are not all the same length.
#[track_caller]
pub fn multiply_to(dst: &mut [i64], s: &[i64], t: &[i64]) {
    Validator::require_len(t.len(), s.len());
    Validator::require_len(t.len(), dst.len());

    for ((d, &a), &b) in dst.iter_mut().zip(s).zip(t) {
        *d = a.wrapping_mul(b);
    }
}

/// Multiply every element of `s` by `c`.
pub fn scale(c: i64, s: &mut [i64]) {
    for val in s.iter_mut() {
        *val = val.wrapping_mul(c);
    }
}

// ============================================================================
// Division
// ============================================================================

/// Compute `s[i] /= t[i]`, truncating toward zero.
///
/// # Panics
///
/// Panics if `s` and `t` differ in length, or when an element of `t` is zero.
#[track_caller]
pub fn divide(s: &mut [i64], t: &[i64]) {
    Validator::require_len(s.len(), t.len());

    for (a, &b) in s.iter_mut().zip(t) {
        *a = a.wrapping_div(b);
    }
}

/// Compute `dst[i] = s[i] / t[i]`, truncating toward zero.
///
/// # Panics
///
/// Panics if `dst`, `s` and `t` are not all the same length, or when an
/// element of `t` is zero.
#[track_caller]
pub fn divide_to(dst: &mut [i64], s: &[i64], t: &[i64]) {
    Validator::require_len(t.len(), s.len());
    Validator::require_len(t.len(), dst.len());

    for ((d, &a), &b) in dst.iter_mut().zip(s).zip(t) {
        *d = a.wrapping_div(b);
    }
}
