// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod scenarios_tests {
    use dynarray::{DynamicArray, DynamicArrayError, dynamic_array, reserve};

    #[test]
    fn test_reserve_then_append_past_reservation() {
        let mut array: DynamicArray<u32> = DynamicArray::new();

        array.reserve(10);
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 10);

        for i in 0..5 {
            array.push_back(i);
        }
        assert_eq!(array.len(), 5);
        assert_eq!(array.capacity(), 10);

        for i in 5..11 {
            array.push_back(i);
        }
        assert_eq!(array.len(), 11);
        assert_eq!(array.capacity(), 20);
        assert_eq!(array.as_slice(), (0..11).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_list_literal_then_insert() {
        let mut array = dynamic_array![1, 2, 3];
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 3);

        array.insert(1, 9);

        assert_eq!(array, dynamic_array![1, 9, 2, 3]);
        assert_eq!(array.len(), 4);
    }

    #[test]
    fn test_equality_and_prefix_ordering() {
        let a = dynamic_array![1, 2, 3];
        let b = dynamic_array![1, 2, 3];
        let prefix = dynamic_array![1, 2];

        assert_eq!(a, b);
        assert!(prefix < a);
        assert!(!(a < b));
        assert!(a <= b && a >= b);
    }

    #[test]
    fn test_checked_access_boundaries() {
        let array = dynamic_array!['a', 'b'];

        assert_eq!(array.try_get(1), Ok(&'b'));
        assert_eq!(
            array.try_get(2),
            Err(DynamicArrayError::OutOfRange { index: 2, len: 2 })
        );

        let empty: DynamicArray<char> = DynamicArray::with_reservation(reserve(3));
        assert!(empty.try_get(0).is_err());
    }

    #[test]
    fn test_copy_then_move_round_trip() {
        let mut original = dynamic_array![String::from("x"), String::from("y")];
        let copy = original.clone();
        assert_eq!(copy, original);

        let moved = original.take();
        assert!(original.is_empty());
        assert_eq!(original.capacity(), 0);
        assert_eq!(moved, copy);
    }

    #[test]
    fn test_fill_clear_cycles_keep_capacity() {
        let mut array: DynamicArray<u64> = DynamicArray::new();

        for _ in 0..4 {
            for i in 0..100 {
                array.push_back(i);
            }
            let capacity = array.capacity();
            array.clear();
            assert_eq!(array.capacity(), capacity);
        }

        assert_eq!(array.capacity(), 128);
    }
}
