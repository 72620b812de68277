// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame change tracking.
//!
//! [`ChangeTracker`] is write-once-per-frame, read-many-per-frame scratch:
//! the host clears it at the top of every inspector refresh with
//! [`begin_frame`](ChangeTracker::begin_frame), the drawing collaborator
//! records widget edits as they happen, and downstream consumers query
//! [`has_changed`](ChangeTracker::has_changed) to decide whether to
//! propagate a value. Results must never be cached across frames.

use alloc::string::String;
use hashbrown::HashSet;

use glint_schema::{NotFound, SchemaMetadata};

/// Transient set of property names edited during the current frame.
///
/// Recording a change on a property with linked extra slots marks every
/// linked name as well, so consumers treat the group atomically.
#[derive(Clone, Debug, Default)]
pub struct ChangeTracker {
    changed: HashSet<String>,
}

impl ChangeTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all flags. Call once at the top of every refresh cycle.
    pub fn begin_frame(&mut self) {
        self.changed.clear();
    }

    /// Records a value edit on `name` and every linked extra slot.
    ///
    /// An unknown name indicates a metadata/session desync and fails with
    /// [`NotFound`].
    pub fn record_change(&mut self, name: &str, schema: &SchemaMetadata) -> Result<(), NotFound> {
        let descriptor = schema.lookup(name)?;
        self.changed.insert(descriptor.name().into());
        for extra in descriptor.extra_props() {
            self.changed.insert(extra.clone());
        }
        Ok(())
    }

    /// Returns whether `name` was edited this frame.
    ///
    /// An unknown name indicates a metadata/session desync and fails with
    /// [`NotFound`].
    pub fn has_changed(&self, name: &str, schema: &SchemaMetadata) -> Result<bool, NotFound> {
        schema.lookup(name)?;
        Ok(self.changed.contains(name))
    }

    /// Returns the number of names flagged this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changed.len()
    }

    /// Returns `true` if nothing was edited this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}
