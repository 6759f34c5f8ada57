// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray.

use dynarray_buffer::BufferError;
use thiserror::Error;

/// Error type for `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// Checked access at an index that is not less than the length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },

    /// A fallible allocation could not materialise a buffer.
    #[error("BufferError: {0}")]
    Buffer(#[from] BufferError),
}
