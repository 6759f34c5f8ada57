// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusively owned, fixed-size slot buffer.
//!
//! [`ArrayBuffer<T>`] owns a single contiguous allocation of `T` slots. Every
//! slot always holds a constructed value: buffers are materialised by
//! default-constructing each slot, so the owner never hands out uninitialised
//! memory.
//!
//! # Core Guarantees
//!
//! - **Exclusive ownership**: `ArrayBuffer` is neither `Clone` nor `Copy`. The
//!   allocation is released exactly once, when the owner is dropped.
//! - **Constant-time swap**: [`ArrayBuffer::swap`] exchanges two allocations
//!   without touching a single element.
//! - **Fallible construction**: [`ArrayBuffer::try_with_slots`] reports capacity
//!   overflow and allocator refusal instead of aborting.
//!
//! # Example
//!
//! ```rust
//! use dynarray_buffer::{ArrayBuffer, BufferError};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut a = ArrayBuffer::<u32>::try_with_slots(4)?;
//!     let mut b = ArrayBuffer::<u32>::new();
//!
//!     a[0] = 42;
//!     a.swap(&mut b);
//!
//!     assert_eq!(a.slots(), 0);
//!     assert_eq!(b.slots(), 4);
//!     assert_eq!(b[0], 42);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod array_buffer;
mod error;

pub use array_buffer::ArrayBuffer;
pub use error::BufferError;
