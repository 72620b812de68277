// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked presets: named bags of recorded property values.
//!
//! A preset stores per-property values that can later be re-applied as a
//! block. Sessions track which presets are currently influencing them via
//! [`PresetBinding`] pairs; the context-menu layer uses
//! [`Preset::get`] to decide whether a property shows an Add or an Update
//! action.

use alloc::string::String;
use hashbrown::HashMap;

use glint_schema::PropertyValue;

/// A named collection of recorded property values.
#[derive(Clone, Debug)]
pub struct Preset {
    name: String,
    values: HashMap<String, PropertyValue>,
}

impl Preset {
    /// Creates an empty preset with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Returns the preset's display name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the recorded value for a property, if any.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.values.get(property)
    }

    /// Returns `true` if the preset records a value for the property.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.values.contains_key(property)
    }

    /// Records or replaces the value for a property.
    pub fn set(&mut self, property: impl Into<String>, value: PropertyValue) {
        self.values.insert(property.into(), value);
    }

    /// Removes the recorded value for a property.
    ///
    /// Returns the removed value, if one was recorded.
    pub fn remove(&mut self, property: &str) -> Option<PropertyValue> {
        self.values.remove(property)
    }

    /// Returns the number of recorded properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the preset records nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over recorded (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One active preset and the property it is anchored to.
///
/// The anchor is the property whose widget activated the preset; its
/// display name labels the preset's context-menu entries.
#[derive(Clone, Debug)]
pub struct PresetBinding {
    /// The anchor property's name.
    pub anchor: String,
    /// The preset influencing the session.
    pub preset: Preset,
}

impl PresetBinding {
    /// Creates a binding of `preset` anchored at `anchor`.
    #[must_use]
    pub fn new(anchor: impl Into<String>, preset: Preset) -> Self {
        Self {
            anchor: anchor.into(),
            preset,
        }
    }
}
