#![cfg(feature = "dev")]
//! Tests for shape validation utilities.
//!
//! These tests verify the validation functions used by every operation for:
//! - Length agreement between buffers
//! - Non-empty input requirements
//! - Minimum destination sizes
//! - Panic messages of the `require_*` entry points
//!
//! ## Test Organization
//!
//! 1. **Fallible Checks** - validate_* return values
//! 2. **Panicking Checks** - require_* panics and messages
//! 3. **Error Messages** - Display formatting

use intslice::internals::engine::validator::Validator;
use intslice::internals::primitives::errors::SliceError;

// ============================================================================
// Fallible Check Tests
// ============================================================================

/// Test matching lengths pass and mismatches report both lengths.
#[test]
fn test_validate_len() {
    assert_eq!(Validator::validate_len(3, 3), Ok(()));
    assert!(
        matches!(
            Validator::validate_len(3, 2),
            Err(SliceError::MismatchedLengths {
                expected: 3,
                got: 2
            })
        ),
        "Length mismatch should error"
    );
}

/// Test validate_all_len stops at the first offending slice.
#[test]
fn test_validate_all_len() {
    let a: &[i64] = &[0; 3];
    let b: &[i64] = &[0; 4];
    let c: &[i64] = &[0; 5];

    assert_eq!(Validator::validate_all_len(3, &[a, a]), Ok(()));
    assert_eq!(Validator::validate_all_len(3, &[]), Ok(()));
    assert_eq!(
        Validator::validate_all_len(3, &[a, b, c]),
        Err(SliceError::MismatchedLengths {
            expected: 3,
            got: 4
        })
    );
}

/// Test validation rejects empty input.
#[test]
fn test_validate_non_empty() {
    assert_eq!(Validator::validate_non_empty(1, "min"), Ok(()));
    assert_eq!(
        Validator::validate_non_empty(0, "min"),
        Err(SliceError::EmptyInput { op: "min" })
    );
}

/// Test minimum destination length.
#[test]
fn test_validate_min_len() {
    assert_eq!(Validator::validate_min_len(2, 2), Ok(()));
    assert_eq!(Validator::validate_min_len(10, 2), Ok(()));
    assert_eq!(
        Validator::validate_min_len(1, 2),
        Err(SliceError::TooShort { got: 1, min: 2 })
    );
}

// ============================================================================
// Panicking Check Tests
// ============================================================================

/// Test require passes through success silently.
#[test]
fn test_require_ok() {
    Validator::require(Ok(()));
    Validator::require_len(4, 4);
    Validator::require_non_empty(1, "max");
    Validator::require_min_len(2, 2);
}

/// Test require_len panics with the formatted error.
#[test]
#[should_panic(expected = "intslice: Length mismatch: expected 4 elements, got 5")]
fn test_require_len_panics() {
    Validator::require_len(4, 5);
}

/// Test require_all_len panics with the formatted error.
#[test]
#[should_panic(expected = "intslice: Length mismatch: expected 2 elements, got 1")]
fn test_require_all_len_panics() {
    let a: &[i64] = &[0; 2];
    let b: &[i64] = &[0; 1];
    Validator::require_all_len(2, &[a, b]);
}

/// Test require_non_empty panics naming the operation.
#[test]
#[should_panic(expected = "intslice: cumulative_sum requires a non-empty slice")]
fn test_require_non_empty_panics() {
    Validator::require_non_empty(0, "cumulative_sum");
}

/// Test require_min_len panics with the formatted error.
#[test]
#[should_panic(expected = "intslice: Destination too short: got 0, need at least 2")]
fn test_require_min_len_panics() {
    Validator::require_min_len(0, 2);
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test every variant renders a readable message.
#[test]
fn test_error_display() {
    assert_eq!(
        SliceError::EmptyInput { op: "max" }.to_string(),
        "max requires a non-empty slice"
    );
    assert_eq!(
        SliceError::MismatchedLengths {
            expected: 5,
            got: 2
        }
        .to_string(),
        "Length mismatch: expected 5 elements, got 2"
    );
    assert_eq!(
        SliceError::TooShort { got: 1, min: 2 }.to_string(),
        "Destination too short: got 1, need at least 2"
    );
    assert_eq!(
        SliceError::InsufficientElements {
            found: 0,
            requested: 3
        }
        .to_string(),
        "Insufficient elements found: 0 of 3 requested"
    );
}

/// Test the error type works as a boxed std error.
#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(SliceError::TooShort { got: 0, min: 2 });
    assert!(err.to_string().contains("too short"));
}
