// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the sync engine calls out through.
//!
//! The core never touches targets directly: every read and write goes
//! through a [`Mutator`], write access is gated by a [`WriteGate`]
//! (version-control checkout, read-only assets), and every mutation is
//! preceded by an [`UndoLog`] checkpoint. Hosts implement these against
//! their object model; targets are opaque `Copy` keys the core only
//! forwards.

use alloc::collections::BTreeSet;
use alloc::string::String;

use glint_schema::{PropertyValue, ValueKind};

/// Reads and writes property state on a target.
pub trait Mutator<T> {
    /// Reads the value of a property, by declared kind.
    ///
    /// Returns `None` if the target has no slot for the name.
    fn value(&self, target: T, name: &str, kind: ValueKind) -> Option<PropertyValue>;

    /// Writes a property value.
    fn set_value(&mut self, target: T, name: &str, value: &PropertyValue);

    /// Reads the target-level keyword set.
    fn keywords(&self, target: T) -> BTreeSet<String>;

    /// Replaces the target-level keyword set wholesale.
    fn set_keywords(&mut self, target: T, keywords: &BTreeSet<String>);

    /// Reads the target's render order.
    fn render_order(&self, target: T) -> i32;

    /// Writes the target's render order.
    fn set_render_order(&mut self, target: T, order: i32);
}

/// Grants or denies write access to a target.
pub trait WriteGate<T> {
    /// Attempts to make the target writable (e.g. source-control checkout).
    ///
    /// Returns `false` when the target cannot be written; the engine aborts
    /// the remainder of the operation on the first denial.
    fn try_acquire_writable(&mut self, target: T) -> bool;
}

/// Records undo checkpoints before mutations.
pub trait UndoLog<T> {
    /// Records the target's state under `label` before it is mutated.
    fn record_before_mutation(&mut self, target: T, label: &str);
}
