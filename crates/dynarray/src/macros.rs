// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`DynamicArray`](crate::DynamicArray) from a list literal.
///
/// Capacity equals the number of elements.
///
/// ```rust
/// use dynarray::dynamic_array;
///
/// let listed = dynamic_array![1, 2, 3];
/// assert_eq!(listed.as_slice(), &[1, 2, 3]);
/// assert_eq!(listed.capacity(), 3);
///
/// let repeated = dynamic_array!["x"; 2];
/// assert_eq!(repeated.as_slice(), &["x", "x"]);
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
