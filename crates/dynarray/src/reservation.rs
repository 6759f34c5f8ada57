// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Request for an empty array with pre-allocated capacity.
///
/// Only [`reserve`] creates one. It keeps "N slots of capacity" apart from
/// "N elements" ([`DynamicArray::with_len`](crate::DynamicArray::with_len)) at the
/// type level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapacityReservationRequest {
    capacity: usize,
}

impl CapacityReservationRequest {
    /// Returns the requested capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a [`CapacityReservationRequest`] for `capacity` slots.
///
/// ```rust
/// use dynarray::{DynamicArray, reserve};
///
/// let array = DynamicArray::<String>::from(reserve(8));
/// assert!(array.is_empty());
/// assert_eq!(array.capacity(), 8);
/// ```
pub fn reserve(capacity: usize) -> CapacityReservationRequest {
    CapacityReservationRequest { capacity }
}
