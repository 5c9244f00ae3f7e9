//! # intslice — Allocation-free operations on slices of `i64`
//!
//! Element-wise arithmetic, reductions and transforms over fixed-length
//! integer slices, designed for tight loops: every operation works inside
//! buffers the caller owns and allocates nothing of its own.
//!
//! ## What's included
//!
//! | Group | Operations |
//! |-------|------------|
//! | Arithmetic | [`add`], [`add_to`], [`add_constant`], [`add_scaled`], [`add_scaled_to`], [`subtract`], [`subtract_to`], [`multiply`], [`multiply_to`], [`divide`], [`divide_to`], [`scale`] |
//! | Reductions | [`sum`], [`product`], [`dot`], [`min`], [`max`], [`count`] |
//! | Transforms | [`apply`], [`fill`], [`cumulative_sum`], [`cumulative_product`], [`span`], [`argsort`] |
//! | Search | [`find`], [`equal`], [`equal_func`], [`equal_lengths`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use intslice::prelude::*;
//!
//! let a = [1, 2, 3];
//! let b = [4, 5, 6];
//! let c = [7, 8, 9];
//!
//! // Destination accumulates every addend
//! let mut total = [0; 3];
//! add(&mut total, &[&a, &b, &c]);
//! assert_eq!(total, [12, 15, 18]);
//!
//! // Sort while tracking where each value came from
//! let mut s = [3, 4, 1, 7, 5];
//! let mut inds = [0usize; 5];
//! argsort(&mut s, &mut inds);
//! assert_eq!(s, [1, 3, 4, 5, 7]);
//! assert_eq!(inds, [2, 0, 1, 4, 3]);
//!
//! let (largest, at) = max(&s);
//! assert_eq!((largest, at), (7, 4));
//! ```
//!
//! ## Result and Error Handling
//!
//! Shape mistakes are caller bugs: mismatched lengths, empty input to
//! [`min`] / [`max`] / cumulative operations, or a destination shorter than two
//! elements for [`span`] panic with a message starting with `intslice: `.
//!
//! The only recoverable outcome is [`find`] running out of matches. The index
//! buffer still holds what was found:
//!
//! ```rust
//! use intslice::prelude::*;
//!
//! let s = [3, 4, 1, 7, 5];
//! let mut inds = Vec::new();
//!
//! match find(&mut inds, |v| v > 3, &s, 4) {
//!     Ok(()) => println!("found all: {:?}", inds),
//!     Err(SliceError::InsufficientElements { found, requested }) => {
//!         assert_eq!((found, requested), (3, 4));
//!         assert_eq!(inds, vec![1, 3, 4]);
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Result::<(), SliceError>::Ok(())
//! ```
//!
//! ## Overflow
//!
//! Addition, subtraction and multiplication wrap on overflow in every build
//! profile. Division by zero panics.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! intslice = { version = "0.3", default-features = false }
//! ```
//!
//! Without `std`, the crate depends on `alloc` for [`find`]'s index buffer.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type, co-sort engine and SIMD kernels.
mod primitives;

// Layer 2: Engine - shape validation.
mod engine;

// Layer 3: Ops - the public operations.
mod ops;

pub use crate::ops::arithmetic::{
    add, add_constant, add_scaled, add_scaled_to, add_to, divide, divide_to, multiply,
    multiply_to, scale, subtract, subtract_to,
};
pub use crate::ops::reduce::{count, dot, max, min, product, sum};
pub use crate::ops::search::{equal, equal_func, equal_lengths, find};
pub use crate::ops::transform::{apply, argsort, cumulative_product, cumulative_sum, fill, span};
pub use crate::primitives::errors::SliceError;

// Standard intslice prelude.
pub mod prelude {
    pub use crate::{
        SliceError, add, add_constant, add_scaled, add_scaled_to, add_to, apply, argsort, count,
        cumulative_product, cumulative_sum, divide, divide_to, dot, equal, equal_func,
        equal_lengths, fill, find, max, min, multiply, multiply_to, product, scale, span,
        subtract, subtract_to, sum,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod ops {
        pub use crate::ops::*;
    }
}
