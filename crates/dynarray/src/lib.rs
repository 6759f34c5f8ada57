// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous, growable array backed by an exclusively owned slot buffer.
//!
//! `DynamicArray<T>` tracks its length separately from the capacity of the
//! [`ArrayBuffer`](dynarray_buffer::ArrayBuffer) it owns.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: when an operation needs more room, the new capacity is
//!   `max(capacity * 2, required)`. Appends are amortized O(1), and a single large
//!   `resize` jumps straight to its target.
//! - **Moves, never copies**: growth, insertion and erasure relocate elements by
//!   moving them, so element types without `Clone` are fully supported.
//! - **Eager release**: vacated slots (`pop_back`, `erase`, `clear`, shrinking
//!   `resize`) are reset to `T::default()` on the spot, dropping the old value.
//! - **Strong assignment safety**: `clone_from` and `try_clone_from` build a
//!   complete copy before swapping it in; a failed copy leaves the target untouched.
//!
//! # Error Tiers
//!
//! Only checked access ([`DynamicArray::try_get`]) and the fallible allocation
//! paths report errors. Every other precondition (indexing past the length,
//! erasing past the end, popping an empty array) is a `debug_assert!`. Release
//! builds never touch memory outside the buffer, but the outcome of a violated
//! precondition is unspecified.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use dynarray::{DynamicArray, DynamicArrayError, dynamic_array};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = dynamic_array![1, 2, 3];
//!     assert_eq!(array.capacity(), 3);
//!
//!     let at = array.insert(1, 9);
//!     assert_eq!(at, 1);
//!     assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
//!     assert_eq!(array.capacity(), 6);
//!
//!     assert_eq!(*array.try_get(3)?, 3);
//!     assert!(array.try_get(4).is_err());
//!
//!     array.erase(1);
//!     assert_eq!(array, dynamic_array![1, 2, 3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reservation
//!
//! ```rust
//! use dynarray::{DynamicArray, reserve};
//!
//! let mut array: DynamicArray<u32> = DynamicArray::with_reservation(reserve(10));
//! assert_eq!(array.len(), 0);
//! assert_eq!(array.capacity(), 10);
//!
//! for i in 0..5 {
//!     array.push_back(i);
//! }
//! assert_eq!(array.capacity(), 10);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! dynarray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use dynarray::{DynamicArray, DynamicArrayBehaviour, dynamic_array};
//!
//!     #[test]
//!     fn test_failed_assignment_keeps_target() {
//!         let mut target = dynamic_array![1u8, 2];
//!         target.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
//!
//!         assert!(target.try_clone_from(&dynamic_array![7u8, 8, 9]).is_err());
//!         assert_eq!(target.as_slice(), &[1, 2]);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod dynamic_array;
mod error;
mod macros;
mod reservation;

pub use dynamic_array::DynamicArray;
pub use error::DynamicArrayError;
pub use reservation::{CapacityReservationRequest, reserve};

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;

pub use dynarray_buffer::BufferError;
