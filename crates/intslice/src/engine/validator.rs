//! Precondition checks for slice operations.
//!
//! ## Purpose
//!
//! This module centralises the length and emptiness checks every operation
//! performs before touching its buffers.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation encountered.
//! * **Two faces**: `validate_*` methods return `Result<(), SliceError>` so a
//!   caller can pre-check; `require_*` methods turn the same error into a panic
//!   for the operations, whose contract treats violations as caller bugs.
//! * **Caller location**: `require_*` are `#[track_caller]`, so the panic
//!   reports the line that made the bad call.
//!
//! ## Invariants
//!
//! * Every panic message starts with `intslice: ` followed by the error's `Display` text.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check values, only shapes.

// Internal dependencies
use crate::primitives::errors::SliceError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for slice shapes.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Fallible Checks
    // ========================================================================

    /// Validate that a buffer has exactly the expected length.
    #[inline]
    pub fn validate_len(expected: usize, got: usize) -> Result<(), SliceError> {
        if expected != got {
            return Err(SliceError::MismatchedLengths { expected, got });
        }
        Ok(())
    }

    /// Validate that every slice has exactly the expected length.
    pub fn validate_all_len(expected: usize, slices: &[&[i64]]) -> Result<(), SliceError> {
        for slice in slices {
            Self::validate_len(expected, slice.len())?;
        }
        Ok(())
    }

    /// Validate that an operation reading index 0 receives at least one element.
    #[inline]
    pub fn validate_non_empty(len: usize, op: &'static str) -> Result<(), SliceError> {
        if len == 0 {
            return Err(SliceError::EmptyInput { op });
        }
        Ok(())
    }

    /// Validate that a destination holds at least `min` elements.
    #[inline]
    pub fn validate_min_len(got: usize, min: usize) -> Result<(), SliceError> {
        if got < min {
            return Err(SliceError::TooShort { got, min });
        }
        Ok(())
    }

    // ========================================================================
    // Panicking Checks
    // ========================================================================

    /// Panic with the error's message if `result` is an error.
    #[track_caller]
    #[inline]
    pub fn require(result: Result<(), SliceError>) {
        if let Err(err) = result {
            panic!("intslice: {err}");
        }
    }

    /// Panic unless `got == expected`.
    #[track_caller]
    #[inline]
    pub fn require_len(expected: usize, got: usize) {
        Self::require(Self::validate_len(expected, got));
    }

    /// Panic unless every slice has length `expected`.
    #[track_caller]
    #[inline]
    pub fn require_all_len(expected: usize, slices: &[&[i64]]) {
        Self::require(Self::validate_all_len(expected, slices));
    }

    /// Panic if `len == 0`.
    #[track_caller]
    #[inline]
    pub fn require_non_empty(len: usize, op: &'static str) {
        Self::require(Self::validate_non_empty(len, op));
    }

    /// Panic if `got < min`.
    #[track_caller]
    #[inline]
    pub fn require_min_len(got: usize, min: usize) {
        Self::require(Self::validate_min_len(got, min));
    }
}
