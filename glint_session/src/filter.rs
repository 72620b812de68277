// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live search filtering over a schema's descriptors.
//!
//! [`SearchFilter`] recomputes its visibility set on every query or mode
//! change. The recompute is O(n) in the property count and deliberately not
//! cached across edits: inspectors hold tens to low hundreds of properties,
//! so recomputation is negligible next to the simplicity of always deriving
//! visibility from the current query.

use alloc::string::String;
use core::fmt;
use hashbrown::HashSet;

use glint_schema::{PropertyDescriptor, SchemaMetadata};

/// Which descriptor field the query is matched against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Match against the human-readable display name.
    #[default]
    DisplayName,
    /// Match against the property name.
    PropertyName,
    /// Match against the display name of the enclosing group header.
    Group,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DisplayName => "Display Name",
            Self::PropertyName => "Property Name",
            Self::Group => "Group",
        };
        f.write_str(name)
    }
}

/// The search query, mode, and derived visibility set for one session.
///
/// Matching is a case-insensitive substring test against the field selected
/// by the mode. An empty query makes every property visible. Headers are
/// evaluated exactly like leaves against their own fields; a hidden group
/// header never cascades to hide its children.
#[derive(Clone, Debug, Default)]
pub struct SearchFilter {
    query: String,
    mode: SearchMode,
    /// Names matching the current non-empty query.
    visible: HashSet<String>,
}

impl SearchFilter {
    /// Creates a filter with an empty query (everything visible).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current query text.
    #[must_use]
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the current search mode.
    #[must_use]
    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Updates the query and mode, recomputing visibility against `schema`.
    pub fn set_query(&mut self, text: impl Into<String>, mode: SearchMode, schema: &SchemaMetadata) {
        self.query = text.into();
        self.mode = mode;
        self.recompute(schema);
    }

    /// Clears the query; every property becomes visible again.
    pub fn clear(&mut self) {
        self.query.clear();
        self.visible.clear();
    }

    /// Returns whether a property passes the current filter.
    #[must_use]
    pub fn is_visible(&self, name: &str) -> bool {
        self.query.is_empty() || self.visible.contains(name)
    }

    fn recompute(&mut self, schema: &SchemaMetadata) {
        self.visible.clear();
        if self.query.is_empty() {
            return;
        }
        let needle = self.query.to_lowercase();
        for (_, descriptor) in schema.iter() {
            if self.matches(descriptor, schema, &needle) {
                self.visible.insert(descriptor.name().into());
            }
        }
    }

    fn matches(
        &self,
        descriptor: &PropertyDescriptor,
        schema: &SchemaMetadata,
        needle: &str,
    ) -> bool {
        let haystack = match self.mode {
            SearchMode::DisplayName => descriptor.display_name(),
            SearchMode::PropertyName => descriptor.name(),
            SearchMode::Group => match schema.group_display_name(descriptor) {
                Some(group) => group,
                None => return false,
            },
        };
        haystack.to_lowercase().contains(needle)
    }
}
