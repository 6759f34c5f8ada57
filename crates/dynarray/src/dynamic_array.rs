// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};

use dynarray_buffer::ArrayBuffer;

#[cfg(any(test, feature = "test_utils"))]
use dynarray_buffer::BufferError;

use crate::error::DynamicArrayError;
use crate::reservation::CapacityReservationRequest;

/// Test behaviour for injecting failures in `DynamicArray` allocations.
///
/// Only available with the `test_utils` feature. The behaviour is sticky:
/// once set, it stays active until changed. It belongs to the instance and is
/// not exchanged by [`DynamicArray::swap`].
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Fallible allocations (`try_reserve`, `try_clone`, `try_clone_from`) fail
    /// with `BufferError::AllocFailed`.
    FailAtAllocation,
}

/// New capacity for a buffer of `capacity` slots that must hold `required` elements.
#[inline]
fn grown_capacity(capacity: usize, required: usize) -> usize {
    capacity.saturating_mul(2).max(required)
}

/// Contiguous growable array.
///
/// Slots `[0, len)` hold live elements. Slots `[len, capacity)` always hold
/// `T::default()`: every operation that vacates a slot resets it immediately.
///
/// # Example
///
/// ```rust
/// use dynarray::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push_back(String::from("a"));
/// array.push_back(String::from("b"));
///
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.capacity(), 2);
///
/// array.pop_back();
/// assert_eq!(array.as_slice(), &["a"]);
/// ```
pub struct DynamicArray<T> {
    buffer: ArrayBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl<T> DynamicArray<T> {
    fn from_parts(buffer: ArrayBuffer<T>, len: usize) -> Self {
        debug_assert!(len <= buffer.slots());

        Self {
            buffer,
            len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        }
    }

    /// Creates an empty array with zero capacity. Does not allocate.
    pub fn new() -> Self {
        Self::from_parts(ArrayBuffer::new(), 0)
    }

    /// Creates an array of `len` clones of `value`. Capacity equals `len`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from(alloc::vec![value; len])
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.slots()
    }

    /// Returns `true` if the array holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.len]
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, DynamicArrayError> {
        if index >= self.len {
            return Err(DynamicArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(&self.buffer[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, DynamicArrayError> {
        if index >= self.len {
            return Err(DynamicArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(&mut self.buffer[index])
    }

    /// Exchanges buffers and lengths with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// The returned array owns the original buffer; no element is touched.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    /// Changes the failure-injection behaviour of this instance.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    #[cfg(any(test, feature = "test_utils"))]
    fn injected_failure(&self, slots: usize) -> Result<(), DynamicArrayError> {
        match self.behaviour {
            DynamicArrayBehaviour::None => Ok(()),
            DynamicArrayBehaviour::FailAtAllocation => {
                Err(BufferError::AllocFailed { slots }.into())
            }
        }
    }

    #[cfg(not(any(test, feature = "test_utils")))]
    #[inline(always)]
    fn injected_failure(&self, _slots: usize) -> Result<(), DynamicArrayError> {
        Ok(())
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates an array of `len` default-constructed elements. Capacity equals `len`.
    pub fn with_len(len: usize) -> Self {
        Self::from_parts(ArrayBuffer::with_slots(len), len)
    }

    /// Creates an empty array with the requested capacity.
    pub fn with_reservation(request: CapacityReservationRequest) -> Self {
        Self::from_parts(ArrayBuffer::with_slots(request.capacity()), 0)
    }

    fn try_allocate(&self, slots: usize) -> Result<ArrayBuffer<T>, DynamicArrayError> {
        self.injected_failure(slots)?;
        Ok(ArrayBuffer::try_with_slots(slots)?)
    }

    /// Moves the live elements into `buffer`, then makes `buffer` the storage.
    ///
    /// The previous allocation is released once it has been swapped out.
    fn relocate(&mut self, mut buffer: ArrayBuffer<T>) {
        debug_assert!(buffer.slots() >= self.len);

        for (dst, src) in buffer.as_mut_slice().iter_mut().zip(self.as_mut_slice()) {
            core::mem::swap(dst, src);
        }

        self.buffer.swap(&mut buffer);
    }

    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, required: usize) {
        let capacity = grown_capacity(self.capacity(), required);
        self.relocate(ArrayBuffer::with_slots(capacity));
    }

    #[inline(always)]
    fn grow_for_one(&mut self) {
        if self.len == self.capacity() {
            self.grow_to(self.len + 1);
        }
    }

    /// Shortens to `len` elements and resets the vacated slots.
    fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        self.len = len;

        for slot in &mut self.buffer.as_mut_slice()[len..old_len] {
            drop(core::mem::take(slot));
        }
    }

    /// Appends `value`, growing the buffer if it is full.
    pub fn push_back(&mut self, value: T) {
        self.grow_for_one();
        self.buffer[self.len] = value;
        self.len += 1;
    }

    /// Appends a clone of `value`.
    pub fn push_back_clone(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Inserts `value` before position `index` (or at the end when `index == len()`).
    ///
    /// Elements at and after `index` are moved one slot to the right. Returns
    /// the index of the inserted element.
    ///
    /// `index` must not exceed `len()`. Checked with `debug_assert!` only.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        debug_assert!(
            index <= self.len,
            "insert position {} is past the end ({})",
            index,
            self.len
        );

        self.grow_for_one();

        // The vacant slot at `len` rotates into the gap.
        self.buffer.as_mut_slice()[index..=self.len].rotate_right(1);
        self.buffer[index] = value;
        self.len += 1;

        index
    }

    /// Inserts a clone of `value` before position `index`. See [`insert`](Self::insert).
    pub fn insert_clone(&mut self, index: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.insert(index, value.clone())
    }

    /// Removes the element at `index`, moving later elements one slot to the left.
    ///
    /// Returns the index of the element that now occupies the erased slot,
    /// which equals `len()` when the last element was erased.
    ///
    /// `index` must be less than `len()`. Checked with `debug_assert!` only.
    pub fn erase(&mut self, index: usize) -> usize {
        debug_assert!(
            index < self.len,
            "erase position {} is not dereferenceable (len {})",
            index,
            self.len
        );

        self.buffer.as_mut_slice()[index..self.len].rotate_left(1);
        self.truncate(self.len - 1);

        index
    }

    /// Removes the last element and drops it.
    ///
    /// The array must not be empty. Checked with `debug_assert!` only; release
    /// builds leave an empty array unchanged.
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on an empty DynamicArray");

        if let Some(len) = self.len.checked_sub(1) {
            self.truncate(len);
        }
    }

    /// Drops every element. Capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Sets the length to `len`.
    ///
    /// Growing exposes default-constructed elements and reallocates only when
    /// `len` exceeds the capacity. Shrinking drops the removed elements.
    pub fn resize(&mut self, len: usize) {
        if len > self.capacity() {
            self.grow_to(len);
        }

        if len < self.len {
            self.truncate(len);
        } else {
            // Vacant slots already hold `T::default()`.
            self.len = len;
        }
    }

    /// Grows the capacity to exactly `capacity` if it is larger than the current one.
    ///
    /// The length is unchanged.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.relocate(ArrayBuffer::with_slots(capacity));
        }
    }

    /// Fallible variant of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Buffer`] if the new buffer cannot be allocated. The
    /// array is left unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), DynamicArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        let buffer = self.try_allocate(capacity)?;
        self.relocate(buffer);

        Ok(())
    }

    /// Copies `source` into a buffer allocated under `self`'s behaviour.
    fn try_copy_of(&self, source: &Self) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let mut buffer = self.try_allocate(source.capacity())?;
        buffer.as_mut_slice()[..source.len].clone_from_slice(source.as_slice());

        Ok(Self::from_parts(buffer, source.len))
    }

    /// Fallible copy construction. See [`Clone::clone`].
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Buffer`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        self.try_copy_of(self)
    }

    /// Fallible copy assignment. See [`Clone::clone_from`].
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Buffer`] if the copy cannot be allocated. `self`
    /// is left exactly as it was.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        if source.is_empty() {
            self.clear();
            return Ok(());
        }

        let mut copy = self.try_copy_of(source)?;
        self.swap(&mut copy);

        Ok(())
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    /// Copies the live elements into a buffer with the source's capacity.
    fn clone(&self) -> Self {
        let mut buffer = ArrayBuffer::with_slots(self.capacity());
        buffer.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());

        Self::from_parts(buffer, self.len)
    }

    /// Copy assignment.
    ///
    /// An empty `source` clears `self` and keeps its buffer. Otherwise a full
    /// copy is built first and swapped in, so a panic while cloning leaves
    /// `self` unmodified.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            self.clear();
            return;
        }

        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// Unchecked access: `index < len()` is a `debug_assert!`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len, "index {} out of range ({})", index, self.len);
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len, "index {} out of range ({})", index, self.len);
        &mut self.buffer[index]
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    /// Adopts the vector's elements. Capacity equals the vector's length.
    fn from(value: Vec<T>) -> Self {
        let len = value.len();
        Self::from_parts(ArrayBuffer::from_boxed_slice(value.into_boxed_slice()), len)
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        Self::from(Vec::from(value))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(value: &[T]) -> Self {
        Self::from(value.to_vec())
    }
}

impl<T: Default> From<CapacityReservationRequest> for DynamicArray<T> {
    fn from(request: CapacityReservationRequest) -> Self {
        Self::with_reservation(request)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut inner = self.buffer.into_boxed_slice().into_vec();
        inner.truncate(self.len);
        inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
