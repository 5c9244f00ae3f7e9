//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the two low-level kernels the
//! operations are built on: the co-sort engine and the SIMD accumulators.
//! It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Ops
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Co-sorting of values and indices.
pub mod sorting;

/// SIMD accumulation kernels.
pub mod lanes;

/// Shared error types.
pub mod errors;
