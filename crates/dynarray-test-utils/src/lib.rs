// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for dynarray crates.
//!
//! Element types that make ownership transfers observable:
//!
//! - [`DropTracker`] counts how many tracked values were dropped.
//! - [`CloneTracker`] counts how many times a value was cloned, which lets
//!   tests tell a move apart from a copy.
//! - [`MoveOnly`] cannot be cloned at all.
//!
//! ## License
//!
//! GPL-3.0-only

mod trackers;

pub use trackers::{CloneTracker, Counter, DropTracker, MoveOnly, counter};
