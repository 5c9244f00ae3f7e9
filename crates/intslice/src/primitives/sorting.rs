//! Co-sorting of a value slice and a parallel index slice.
//!
//! ## Purpose
//!
//! This module provides the sort engine behind `argsort`. It sorts a slice of
//! values in place and mirrors every swap into a second slice of indices, so
//! the index slice records where each sorted value came from.
//!
//! ## Design notes
//!
//! * **Swap-mirrored**: The engine only touches the data through `less(i, j)`
//!   and `swap(i, j)`; `swap` exchanges both slices at once.
//! * **Introsort**: Median-of-three quicksort, insertion sort for short runs,
//!   and a heapsort fallback once the recursion depth budget is spent.
//! * **Allocation-free**: Everything happens inside the two caller buffers.
//!
//! ## Key concepts
//!
//! ### Permutation tracking
//! If `inds` starts as the identity `0..n`, then after sorting
//! `values[i] == original[inds[i]]` for every `i`.
//!
//! ## Invariants
//!
//! * Both slices always hold a permutation of their starting contents.
//! * Sorted values are non-decreasing.
//! * Worst-case running time is O(n log n).
//!
//! ## Non-goals
//!
//! * Stability. Equal values may end up in either relative order.

/// Runs of this length or shorter are finished with insertion sort.
const INSERTION_THRESHOLD: usize = 12;

// ============================================================================
// Data Structures
// ============================================================================

/// Two-buffer view sorted by the values and permuted in lockstep.
pub struct CoSort<'a> {
    /// Values that define the order.
    values: &'a mut [i64],

    /// Companion buffer receiving the same swaps as `values`.
    inds: &'a mut [usize],
}

impl<'a> CoSort<'a> {
    /// Pair a value slice with an index slice of the same length.
    #[inline]
    pub fn new(values: &'a mut [i64], inds: &'a mut [usize]) -> Self {
        debug_assert_eq!(
            values.len(),
            inds.len(),
            "CoSort: values and inds must have the same length"
        );
        Self { values, inds }
    }

    /// Number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.values[i] < self.values[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.inds.swap(i, j);
    }

    // ========================================================================
    // Sorting Entry Point
    // ========================================================================

    /// Sort the values ascending, mirroring every swap into the indices.
    pub fn sort(&mut self) {
        let n = self.len();
        if n < 2 {
            return;
        }

        // 2 * ceil(log2(n + 1)) levels before falling back to heapsort
        let depth = 2 * (usize::BITS - n.leading_zeros()) as usize;
        self.quick_sort(0, n, depth);
    }

    // ========================================================================
    // Introsort Stages
    // ========================================================================

    fn quick_sort(&mut self, mut lo: usize, mut hi: usize, mut depth: usize) {
        while hi - lo > INSERTION_THRESHOLD {
            if depth == 0 {
                self.heap_sort(lo, hi);
                return;
            }
            depth -= 1;

            let p = self.partition(lo, hi);

            // Recurse on the smaller side to bound stack depth
            if p - lo < hi - p - 1 {
                self.quick_sort(lo, p, depth);
                lo = p + 1;
            } else {
                self.quick_sort(p + 1, hi, depth);
                hi = p;
            }
        }

        if hi - lo > 1 {
            self.insertion_sort(lo, hi);
        }
    }

    /// Partition `[lo, hi)` around a median-of-three pivot and return its final position.
    fn partition(&mut self, lo: usize, hi: usize) -> usize {
        let mid = lo + (hi - lo) / 2;
        self.median_of_three(lo, mid, hi - 1);
        self.swap(lo, mid);

        let pivot = lo;
        let mut i = lo + 1;
        let mut j = hi - 1;

        // [lo + 1, i) <= pivot, (j, hi) >= pivot
        loop {
            while i <= j && self.less(i, pivot) {
                i += 1;
            }
            while i <= j && self.less(pivot, j) {
                j -= 1;
            }
            if i >= j {
                break;
            }
            self.swap(i, j);
            i += 1;
            j -= 1;
        }

        self.swap(pivot, j);
        j
    }

    fn median_of_three(&mut self, a: usize, b: usize, c: usize) {
        if self.less(b, a) {
            self.swap(a, b);
        }
        if self.less(c, b) {
            self.swap(b, c);
            if self.less(b, a) {
                self.swap(a, b);
            }
        }
    }

    fn insertion_sort(&mut self, lo: usize, hi: usize) {
        for i in (lo + 1)..hi {
            let mut j = i;
            while j > lo && self.less(j, j - 1) {
                self.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    fn heap_sort(&mut self, lo: usize, hi: usize) {
        let n = hi - lo;

        for root in (0..n / 2).rev() {
            self.sift_down(lo, root, n);
        }
        for end in (1..n).rev() {
            self.swap(lo, lo + end);
            self.sift_down(lo, 0, end);
        }
    }

    fn sift_down(&mut self, base: usize, mut root: usize, end: usize) {
        loop {
            let mut child = 2 * root + 1;
            if child >= end {
                break;
            }
            if child + 1 < end && self.less(base + child, base + child + 1) {
                child += 1;
            }
            if !self.less(base + root, base + child) {
                break;
            }
            self.swap(base + root, base + child);
            root = child;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
