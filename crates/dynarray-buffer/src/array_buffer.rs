// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::ops::{Index, IndexMut};

use crate::error::BufferError;

/// Exclusive owner of a contiguous block of `T` slots.
///
/// The number of slots is fixed for the lifetime of the allocation. Growing
/// means materialising a second buffer and exchanging the two with
/// [`swap`](Self::swap).
///
/// Slot access through `Index`/`IndexMut` is bounds-checked against the slot
/// count only; the owner knows nothing about which slots its user considers live.
pub struct ArrayBuffer<T> {
    inner: Box<[T]>,
}

impl<T> ArrayBuffer<T> {
    /// Creates a buffer with zero slots. Does not allocate.
    pub fn new() -> Self {
        Self {
            inner: Vec::new().into_boxed_slice(),
        }
    }

    /// Creates a buffer of `slots` default-constructed slots.
    ///
    /// Allocation failure is fatal and handled by the global allocator's
    /// error hook. Use [`try_with_slots`](Self::try_with_slots) to observe it.
    pub fn with_slots(slots: usize) -> Self
    where
        T: Default,
    {
        Self {
            inner: core::iter::repeat_with(T::default).take(slots).collect(),
        }
    }

    /// Fallible variant of [`with_slots`](Self::with_slots).
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `slots * size_of::<T>()` exceeds `isize::MAX`.
    /// - [`BufferError::AllocFailed`] if the allocator refuses the request.
    pub fn try_with_slots(slots: usize) -> Result<Self, BufferError>
    where
        T: Default,
    {
        if Layout::array::<T>(slots).is_err() {
            return Err(BufferError::CapacityOverflow { slots });
        }

        let mut inner = Vec::new();
        inner
            .try_reserve_exact(slots)
            .map_err(|_| BufferError::AllocFailed { slots })?;
        inner.resize_with(slots, T::default);

        Ok(Self {
            inner: inner.into_boxed_slice(),
        })
    }

    /// Adopts an existing allocation. Every element becomes a slot.
    pub fn from_boxed_slice(inner: Box<[T]>) -> Self {
        Self { inner }
    }

    /// Releases ownership of the allocation to the caller.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.inner
    }

    /// Returns the number of slots.
    #[inline]
    pub fn slots(&self) -> usize {
        self.inner.len()
    }

    /// Returns a pointer to the first slot.
    ///
    /// Dangling (but aligned and non-null) when the buffer has zero slots.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.inner.as_mut_ptr()
    }

    /// Returns every slot as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns every slot as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Exchanges ownership of the two allocations. Never touches an element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }
}

impl<T> Default for ArrayBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ArrayBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<T> IndexMut<usize> for ArrayBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl<T> core::fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("slots", &self.slots())
            .finish_non_exhaustive()
    }
}
