// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray-buffer.
use thiserror::Error;

/// Errors that can occur when materialising a buffer.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The byte size of the requested slots does not fit in `isize::MAX`.
    #[error("capacity overflow: {slots} slots exceed the maximum allocation size")]
    CapacityOverflow {
        /// Number of slots that was requested.
        slots: usize,
    },

    /// The global allocator refused the request.
    #[error("allocation of {slots} slots failed")]
    AllocFailed {
        /// Number of slots that was requested.
        slots: usize,
    },
}
