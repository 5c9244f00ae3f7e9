//! Layer 3: Ops
//!
//! # Purpose
//!
//! This layer holds the public operations. Each function is stateless,
//! checks shapes through the engine layer, and touches only the buffers it
//! documents as mutated.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Ops ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element-wise arithmetic.
pub mod arithmetic;

/// Sums, products, extremes and counts.
pub mod reduce;

/// Mapping, running totals, spans and argsort.
pub mod transform;

/// Predicate search and equality checks.
pub mod search;
