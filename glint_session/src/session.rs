// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-session inspector state.

use alloc::string::String;
use alloc::vec::Vec;

use glint_schema::{NotFound, SchemaMetadata};

use crate::change::ChangeTracker;
use crate::filter::{SearchFilter, SearchMode};
use crate::preset::PresetBinding;

/// All transient state of one open inspector session.
///
/// Created when the session opens and dropped when it closes. The search
/// query, mode, and active preset bindings persist across frames; the
/// change flags are scratch that [`begin_frame`](Self::begin_frame) rebuilds
/// every refresh cycle.
///
/// # Example
///
/// ```rust
/// use glint_schema::{PropertySpec, SchemaMetadata, ValueKind};
/// use glint_session::{SearchMode, SessionState};
///
/// let schema = SchemaMetadata::build(vec![
///     PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector),
/// ])
/// .unwrap();
///
/// let mut session = SessionState::new();
/// session.begin_frame();
/// session.set_query("alb", SearchMode::DisplayName, &schema);
/// assert!(session.is_visible("_Color"));
///
/// session.record_change("_Color", &schema).unwrap();
/// assert!(session.has_changed("_Color", &schema).unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    filter: SearchFilter,
    changes: ChangeTracker,
    active_presets: Vec<PresetBinding>,
}

impl SessionState {
    /// Creates the state for a freshly opened session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame: clears the per-frame change flags.
    ///
    /// Search state and preset bindings survive; only the scratch flags are
    /// rebuilt each refresh cycle.
    pub fn begin_frame(&mut self) {
        self.changes.begin_frame();
    }

    /// Returns the search filter.
    #[must_use]
    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Returns the change tracker.
    #[must_use]
    pub fn changes(&self) -> &ChangeTracker {
        &self.changes
    }

    /// Updates the search query and mode, recomputing visibility.
    pub fn set_query(&mut self, text: impl Into<String>, mode: SearchMode, schema: &SchemaMetadata) {
        self.filter.set_query(text, mode, schema);
    }

    /// Clears the search query.
    pub fn clear_query(&mut self) {
        self.filter.clear();
    }

    /// Returns whether a property passes the current filter.
    #[must_use]
    pub fn is_visible(&self, name: &str) -> bool {
        self.filter.is_visible(name)
    }

    /// Records a value edit on `name` (and its linked extra slots).
    pub fn record_change(&mut self, name: &str, schema: &SchemaMetadata) -> Result<(), NotFound> {
        self.changes.record_change(name, schema)
    }

    /// Returns whether `name` was edited this frame.
    pub fn has_changed(&self, name: &str, schema: &SchemaMetadata) -> Result<bool, NotFound> {
        self.changes.has_changed(name, schema)
    }

    /// Returns the active preset bindings, in activation order.
    #[must_use]
    pub fn active_presets(&self) -> &[PresetBinding] {
        &self.active_presets
    }

    /// Returns mutable access to the active preset bindings.
    #[must_use]
    pub fn active_presets_mut(&mut self) -> &mut Vec<PresetBinding> {
        &mut self.active_presets
    }

    /// Appends a preset binding.
    pub fn bind_preset(&mut self, binding: PresetBinding) {
        self.active_presets.push(binding);
    }

    /// Removes the first binding anchored at `anchor`, if any.
    pub fn unbind_preset(&mut self, anchor: &str) -> Option<PresetBinding> {
        let index = self
            .active_presets
            .iter()
            .position(|binding| binding.anchor == anchor)?;
        Some(self.active_presets.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;
    use alloc::{vec, vec::Vec};
    use glint_schema::{PropertySpec, ValueKind};

    fn schema() -> SchemaMetadata {
        SchemaMetadata::build(vec![
            PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector),
            PropertySpec::new("_Metallic", "Metallic", ValueKind::Scalar),
        ])
        .unwrap()
    }

    #[test]
    fn begin_frame_keeps_search_state() {
        let schema = schema();
        let mut session = SessionState::new();

        session.set_query("alb", SearchMode::DisplayName, &schema);
        session.record_change("_Color", &schema).unwrap();

        session.begin_frame();
        // Flags rebuilt, search persists.
        assert!(!session.has_changed("_Color", &schema).unwrap());
        assert_eq!(session.filter().query(), "alb");
        assert!(!session.is_visible("_Metallic"));
    }

    #[test]
    fn preset_bindings_are_ordered() {
        let mut session = SessionState::new();
        session.bind_preset(PresetBinding::new("_A", Preset::new("first")));
        session.bind_preset(PresetBinding::new("_B", Preset::new("second")));

        let anchors: Vec<&str> = session
            .active_presets()
            .iter()
            .map(|b| b.anchor.as_str())
            .collect();
        assert_eq!(anchors, ["_A", "_B"]);

        let removed = session.unbind_preset("_A").unwrap();
        assert_eq!(removed.preset.name(), "first");
        assert!(session.unbind_preset("_A").is_none());
        assert_eq!(session.active_presets().len(), 1);
    }
}
