//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer enforces the shape contracts (matching lengths, non-empty
//! inputs, minimum destination sizes) shared by every operation.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Ops
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;
