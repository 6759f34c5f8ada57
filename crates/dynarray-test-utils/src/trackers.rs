// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

/// Shared event counter.
pub type Counter = Rc<Cell<usize>>;

/// Creates a counter starting at zero.
pub fn counter() -> Counter {
    Rc::new(Cell::new(0))
}

/// Element that bumps a shared counter when dropped.
///
/// `DropTracker::default()` is untracked, so vacant slots holding default
/// values never show up in the count.
#[derive(Debug, Default)]
pub struct DropTracker {
    /// Payload, used to check ordering.
    pub id: u32,
    drops: Option<Counter>,
}

impl DropTracker {
    /// Creates a tracked element.
    pub fn new(id: u32, drops: &Counter) -> Self {
        Self {
            id,
            drops: Some(Rc::clone(drops)),
        }
    }

    /// Returns `true` unless this is a default (untracked) value.
    pub fn is_tracked(&self) -> bool {
        self.drops.is_some()
    }
}

impl Drop for DropTracker {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.set(drops.get() + 1);
        }
    }
}

/// Element that bumps a shared counter whenever it is cloned.
#[derive(Debug, Default)]
pub struct CloneTracker {
    /// Payload, compared by `PartialEq`.
    pub value: u32,
    clones: Option<Counter>,
}

impl CloneTracker {
    /// Creates a tracked element.
    pub fn new(value: u32, clones: &Counter) -> Self {
        Self {
            value,
            clones: Some(Rc::clone(clones)),
        }
    }
}

impl Clone for CloneTracker {
    fn clone(&self) -> Self {
        if let Some(clones) = &self.clones {
            clones.set(clones.get() + 1);
        }

        Self {
            value: self.value,
            clones: self.clones.clone(),
        }
    }
}

impl PartialEq for CloneTracker {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Element without a `Clone` impl.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveOnly(pub u32);
