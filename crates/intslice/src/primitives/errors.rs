//! Error types for slice operations.
//!
//! ## Purpose
//!
//! This module defines the conditions that can go wrong when combining
//! integer slices: disagreeing lengths, empty inputs, destinations that are
//! too short, and searches that run out of matches.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the relevant values (e.g., expected vs. actual lengths).
//! * **Two channels**: Length and emptiness errors are raised as panics by the
//!   operations themselves; only `InsufficientElements` is handed back to callers.
//! * **No-std**: `Display` is implemented through `core::fmt`.
//! * **Trait Implementation**: Implements `std::error::Error` when `std` is enabled.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Lengths and counts are reported as `usize`, matching the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for slice operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    /// The operation reads index 0 unconditionally and needs a non-empty slice.
    EmptyInput {
        /// Name of the operation (e.g., "min", "cumulative_sum").
        op: &'static str,
    },

    /// Two buffers that must agree on length do not.
    MismatchedLengths {
        /// Length every buffer is required to have.
        expected: usize,
        /// Length of the offending buffer.
        got: usize,
    },

    /// Destination is shorter than the operation requires.
    TooShort {
        /// Length provided.
        got: usize,
        /// Minimum length required.
        min: usize,
    },

    /// A bounded search finished before collecting the requested number of matches.
    InsufficientElements {
        /// Number of matches found (all of them).
        found: usize,
        /// Number of matches requested.
        requested: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SliceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput { op } => write!(f, "{op} requires a non-empty slice"),
            Self::MismatchedLengths { expected, got } => {
                write!(f, "Length mismatch: expected {expected} elements, got {got}")
            }
            Self::TooShort { got, min } => {
                write!(f, "Destination too short: got {got}, need at least {min}")
            }
            Self::InsufficientElements { found, requested } => {
                write!(
                    f,
                    "Insufficient elements found: {found} of {requested} requested"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SliceError {}
