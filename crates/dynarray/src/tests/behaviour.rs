// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BufferError, DynamicArray, DynamicArrayBehaviour, DynamicArrayError, dynamic_array};

// =============================================================================
// try_reserve()
// =============================================================================

#[test]
fn test_try_reserve_ok() {
    let mut array = dynamic_array![1u32, 2];

    array.try_reserve(16).expect("Failed to try_reserve(..)");

    assert_eq!(array.capacity(), 16);
    assert_eq!(array.as_slice(), &[1, 2]);
}

#[test]
fn test_try_reserve_smaller_is_noop_even_when_failing() {
    let mut array = dynamic_array![1u32, 2, 3];
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    array.try_reserve(2).expect("Failed to try_reserve(..)");

    assert_eq!(array.capacity(), 3);
}

#[test]
fn test_try_reserve_capacity_overflow_leaves_array_intact() {
    let mut array = dynamic_array![1u64, 2, 3];

    let result = array.try_reserve(usize::MAX);

    assert_eq!(
        result,
        Err(DynamicArrayError::Buffer(BufferError::CapacityOverflow {
            slots: usize::MAX
        }))
    );
    assert_eq!(array.as_slice(), &[1, 2, 3]);
    assert_eq!(array.capacity(), 3);
}

#[test]
fn test_try_reserve_injected_failure() {
    let mut array = dynamic_array![1u8];
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let result = array.try_reserve(10);

    assert_eq!(
        result,
        Err(DynamicArrayError::Buffer(BufferError::AllocFailed { slots: 10 }))
    );
    assert_eq!(array.capacity(), 1);
}

#[test]
fn test_behaviour_is_sticky_until_changed() {
    let mut array: DynamicArray<u8> = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert!(array.try_reserve(1).is_err());
    assert!(array.try_reserve(1).is_err());

    array.change_behaviour(DynamicArrayBehaviour::None);
    array.try_reserve(1).expect("Failed to try_reserve(..)");
    assert_eq!(array.capacity(), 1);
}

#[test]
fn test_infallible_paths_ignore_behaviour() {
    let mut array: DynamicArray<u8> = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    array.push_back(1);
    array.reserve(8);

    assert_eq!(array.capacity(), 8);
}

// =============================================================================
// try_clone()
// =============================================================================

#[test]
fn test_try_clone_keeps_capacity() {
    let mut array = dynamic_array![1u8, 2, 3];
    array.reserve(10);

    let copy = array.try_clone().expect("Failed to try_clone()");

    assert_eq!(copy, array);
    assert_eq!(copy.capacity(), 10);
}

#[test]
fn test_try_clone_injected_failure() {
    let mut array = dynamic_array![1u8, 2, 3];
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert_eq!(
        array.try_clone().map(|c| c.len()),
        Err(DynamicArrayError::Buffer(BufferError::AllocFailed { slots: 3 }))
    );
}

// =============================================================================
// try_clone_from()
// =============================================================================

#[test]
fn test_try_clone_from_replaces_contents() {
    let mut target = dynamic_array![String::from("a")];
    let source = dynamic_array![String::from("x"), String::from("y")];

    target
        .try_clone_from(&source)
        .expect("Failed to try_clone_from(..)");

    assert_eq!(target, source);
    assert_eq!(target.capacity(), source.capacity());
}

#[test]
fn test_try_clone_from_failure_leaves_target_untouched() {
    let mut target = dynamic_array![1u32, 2];
    target.reserve(5);
    let buffer_ptr = target.as_ptr();
    target.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let source = dynamic_array![7u32, 8, 9];
    let result = target.try_clone_from(&source);

    assert!(matches!(
        result,
        Err(DynamicArrayError::Buffer(BufferError::AllocFailed { .. }))
    ));
    assert_eq!(target.as_slice(), &[1, 2]);
    assert_eq!(target.capacity(), 5);
    assert_eq!(target.as_ptr(), buffer_ptr);
}

#[test]
fn test_try_clone_from_empty_source_clears_without_allocating() {
    let mut target = dynamic_array![1u32, 2, 3];
    target.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    target
        .try_clone_from(&DynamicArray::new())
        .expect("Failed to try_clone_from(..)");

    assert!(target.is_empty());
    assert_eq!(target.capacity(), 3);
}

#[test]
fn test_try_clone_from_keeps_target_behaviour() {
    let mut target: DynamicArray<u8> = DynamicArray::new();
    target
        .try_clone_from(&dynamic_array![1, 2])
        .expect("Failed to try_clone_from(..)");

    target.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
    assert!(target.try_clone_from(&dynamic_array![3, 4]).is_err());
    assert_eq!(target.as_slice(), &[1, 2]);
}
