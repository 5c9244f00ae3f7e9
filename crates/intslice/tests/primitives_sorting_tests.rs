#![cfg(feature = "dev")]
//! Tests for the co-sort engine.
//!
//! These tests verify the sorting functionality behind `argsort` for:
//! - Sorting values in ascending order
//! - Mirroring every swap into the companion index buffer
//! - Inputs that exercise insertion sort, quicksort and adversarial orders
//!
//! ## Test Organization
//!
//! 1. **Basic Sorting** - Small and already-sorted data
//! 2. **Duplicates** - Equal values and constant runs
//! 3. **Adversarial Orders** - Reversed, organ-pipe and sawtooth data
//! 4. **Companion Buffer** - Arbitrary payloads follow their values

use intslice::internals::primitives::sorting::CoSort;

// ============================================================================
// Helper Functions
// ============================================================================

/// Sort a copy of `original` with identity indices and return both buffers.
fn co_sort(original: &[i64]) -> (Vec<i64>, Vec<usize>) {
    let mut values = original.to_vec();
    let mut inds: Vec<usize> = (0..original.len()).collect();
    CoSort::new(&mut values, &mut inds).sort();
    (values, inds)
}

/// Assert sortedness, index tracing and permutation validity.
fn assert_co_sorted(original: &[i64], values: &[i64], inds: &[usize]) {
    assert!(
        values.windows(2).all(|w| w[0] <= w[1]),
        "Values should be non-decreasing"
    );
    for (i, &src) in inds.iter().enumerate() {
        assert_eq!(values[i], original[src], "Index {i} should map to original");
    }
    let mut seen = inds.to_vec();
    seen.sort_unstable();
    assert_eq!(
        seen,
        (0..inds.len()).collect::<Vec<_>>(),
        "Indices should be a permutation"
    );
}

// ============================================================================
// Basic Sorting Tests
// ============================================================================

/// Test basic sorting with simple data.
#[test]
fn test_sort_basic() {
    let (values, inds) = co_sort(&[3, 1, 4, 2]);

    assert_eq!(values, vec![1, 2, 3, 4], "Values should be sorted");
    assert_eq!(inds, vec![1, 3, 0, 2], "Indices should map to original");
}

/// Test sorting with already sorted data.
#[test]
fn test_sort_already_sorted() {
    let original: Vec<i64> = (0..50).collect();
    let (values, inds) = co_sort(&original);

    assert_eq!(values, original, "Values should remain unchanged");
    assert_co_sorted(&original, &values, &inds);
}

/// Test length and emptiness accessors.
#[test]
fn test_len_and_is_empty() {
    let mut values = vec![2i64, 1];
    let mut inds = vec![0usize, 1];
    let view = CoSort::new(&mut values, &mut inds);
    assert_eq!(view.len(), 2);
    assert!(!view.is_empty());
}

// ============================================================================
// Duplicate Tests
// ============================================================================

/// Test many duplicates across the quicksort threshold.
#[test]
fn test_sort_duplicates() {
    let original: Vec<i64> = (0..500).map(|i| i % 3).collect();
    let (values, inds) = co_sort(&original);
    assert_co_sorted(&original, &values, &inds);
}

/// Test a constant slice.
#[test]
fn test_sort_constant() {
    let original = vec![-4i64; 257];
    let (values, inds) = co_sort(&original);
    assert_co_sorted(&original, &values, &inds);
}

// ============================================================================
// Adversarial Order Tests
// ============================================================================

/// Test strictly decreasing data.
#[test]
fn test_sort_reversed() {
    let original: Vec<i64> = (0..1000).rev().collect();
    let (values, inds) = co_sort(&original);

    assert_co_sorted(&original, &values, &inds);
    assert_eq!(inds[0], 999);
    assert_eq!(inds[999], 0);
}

/// Test organ-pipe data (ascending then descending).
#[test]
fn test_sort_organ_pipe() {
    let original: Vec<i64> = (0..400).chain((0..400).rev()).collect();
    let (values, inds) = co_sort(&original);
    assert_co_sorted(&original, &values, &inds);
}

/// Test sawtooth data with extreme values.
#[test]
fn test_sort_sawtooth_extremes() {
    let original: Vec<i64> = (0..600)
        .map(|i| match i % 4 {
            0 => i64::MIN,
            1 => i64::MAX,
            2 => i,
            _ => -i,
        })
        .collect();
    let (values, inds) = co_sort(&original);

    assert_co_sorted(&original, &values, &inds);
    assert_eq!(values[0], i64::MIN);
    assert_eq!(values[599], i64::MAX);
}

// ============================================================================
// Companion Buffer Tests
// ============================================================================

/// Test the companion buffer need not start as the identity.
#[test]
fn test_companion_payload_follows_values() {
    let mut values = vec![30i64, 10, 20];
    let mut payload = vec![300usize, 100, 200];
    CoSort::new(&mut values, &mut payload).sort();

    assert_eq!(values, vec![10, 20, 30]);
    assert_eq!(payload, vec![100, 200, 300], "Payload should follow values");
}
