// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schema metadata build and the cross-session cache.
//!
//! [`SchemaMetadata`] is built once per distinct schema from
//! [`PropertySpec`] inputs and then reused by every inspector session
//! showing objects of that schema. [`MetadataStore`] is the cache keyed by
//! [`SchemaId`]; a rebuild happens only when the schema identity changes.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::descriptor::{DescriptorId, PropertyDescriptor, PropertySpec};
use crate::error::{NotFound, SchemaError};

/// Opaque identity of a schema ("shader"), used as the cache key.
///
/// The host decides what the identity is; the core only compares it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaId(u64);

impl SchemaId {
    /// Creates a schema ID from a host-chosen identity value.
    #[must_use]
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying identity value.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaId").field(&self.0).finish()
    }
}

/// The descriptor table for one schema.
///
/// Building is O(n) in the property count and resolves the group hierarchy
/// and linked extra-property names once, so per-frame consumers only do
/// name lookups.
///
/// # Example
///
/// ```rust
/// use glint_schema::{GroupRole, PropertySpec, SchemaMetadata, ValueKind};
///
/// let schema = SchemaMetadata::build([
///     PropertySpec::new("_Surface", "Surface", ValueKind::Scalar)
///         .group_role(GroupRole::MainHeader),
///     PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector)
///         .parent("_Surface"),
/// ])
/// .unwrap();
///
/// let color = schema.lookup("_Color").unwrap();
/// assert_eq!(color.display_name(), "Albedo Color");
/// assert!(color.parent().is_some());
/// ```
#[derive(Clone)]
pub struct SchemaMetadata {
    descriptors: Vec<PropertyDescriptor>,
    by_name: HashMap<String, DescriptorId>,
}

impl SchemaMetadata {
    /// Builds the descriptor table from declarative specs.
    ///
    /// Validates the schema invariants: unique names, extras that resolve
    /// within the same schema, and acyclic parent chains at most two levels
    /// deep.
    ///
    /// # Panics
    ///
    /// Panics if more than 65,536 properties are declared.
    pub fn build(specs: impl IntoIterator<Item = PropertySpec>) -> Result<Self, SchemaError> {
        let mut descriptors: Vec<PropertyDescriptor> = Vec::new();
        let mut by_name: HashMap<String, DescriptorId> = HashMap::new();
        let mut parent_names: Vec<Option<String>> = Vec::new();

        for spec in specs {
            if by_name.contains_key(&spec.name) {
                return Err(SchemaError::DuplicateName(spec.name));
            }
            assert!(
                descriptors.len() < u16::MAX as usize,
                "Too many properties declared (max {})",
                u16::MAX
            );

            #[expect(clippy::cast_possible_truncation, reason = "checked above")]
            let id = DescriptorId::new(descriptors.len() as u16);
            by_name.insert(spec.name.clone(), id);
            parent_names.push(spec.parent);
            descriptors.push(PropertyDescriptor {
                name: spec.name,
                display_name: spec.display_name,
                kind: spec.kind,
                group_role: spec.group_role,
                parent: None,
                extras: spec.extras,
                help: spec.help,
                is_expanded: true,
            });
        }

        for (index, parent_name) in parent_names.into_iter().enumerate() {
            let Some(parent_name) = parent_name else {
                continue;
            };
            match by_name.get(&parent_name).copied() {
                Some(parent_id) => descriptors[index].parent = Some(parent_id),
                None => {
                    return Err(SchemaError::UnknownParent {
                        property: descriptors[index].name.clone(),
                        parent: parent_name,
                    });
                }
            }
        }

        for descriptor in &descriptors {
            for extra in &descriptor.extras {
                if !by_name.contains_key(extra) {
                    return Err(SchemaError::UnknownExtra {
                        property: descriptor.name.clone(),
                        extra: extra.clone(),
                    });
                }
            }
        }

        // Walking three parent edges means the chain is either deeper than
        // group -> header -> leaf or cyclic; both are rejected.
        for descriptor in &descriptors {
            let mut depth = 0_usize;
            let mut current = descriptor.parent;
            while let Some(parent_id) = current {
                depth += 1;
                if depth > 2 {
                    return Err(SchemaError::GroupTooDeep {
                        property: descriptor.name.clone(),
                    });
                }
                current = descriptors[parent_id.index() as usize].parent;
            }
        }

        Ok(Self {
            descriptors,
            by_name,
        })
    }

    /// Returns the number of descriptors in this schema.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if the schema has no descriptors.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns the descriptor ID for a name, if present.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<DescriptorId> {
        self.by_name.get(name).copied()
    }

    /// Looks up a descriptor by name.
    pub fn lookup(&self, name: &str) -> Result<&PropertyDescriptor, NotFound> {
        self.id_of(name)
            .map(|id| &self.descriptors[id.index() as usize])
            .ok_or_else(|| NotFound { name: name.into() })
    }

    /// Returns the descriptor for an ID issued by this schema.
    #[must_use]
    pub fn get(&self, id: DescriptorId) -> Option<&PropertyDescriptor> {
        self.descriptors.get(id.index() as usize)
    }

    /// Returns an iterator over all descriptors, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (DescriptorId, &PropertyDescriptor)> {
        self.descriptors.iter().enumerate().map(|(i, d)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len < u16::MAX")]
            (DescriptorId::new(i as u16), d)
        })
    }

    /// Sets the UI fold state of one property in place.
    ///
    /// This is a UI-visible side effect only; no value semantics change.
    pub fn set_expanded(&mut self, name: &str, expanded: bool) -> Result<(), NotFound> {
        let id = self.id_of(name).ok_or_else(|| NotFound { name: name.into() })?;
        self.descriptors[id.index() as usize].is_expanded = expanded;
        Ok(())
    }

    /// Folds or unfolds every group header at once.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        for descriptor in &mut self.descriptors {
            if descriptor.group_role.is_header() {
                descriptor.is_expanded = expanded;
            }
        }
    }

    /// Returns the display name of the nearest enclosing header.
    ///
    /// Headers report their own display name; leaves walk the parent chain.
    /// Returns `None` for an ungrouped leaf.
    #[must_use]
    pub fn group_display_name<'a>(&'a self, descriptor: &'a PropertyDescriptor) -> Option<&'a str> {
        if descriptor.group_role().is_header() {
            return Some(descriptor.display_name());
        }
        let mut current = descriptor.parent();
        while let Some(id) = current {
            let parent = self.get(id)?;
            if parent.group_role().is_header() {
                return Some(parent.display_name());
            }
            current = parent.parent();
        }
        None
    }
}

impl fmt::Debug for SchemaMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaMetadata")
            .field("count", &self.descriptors.len())
            .field("properties", &self.by_name.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Cache of built schema metadata, keyed by schema identity.
///
/// One store is shared by every inspector session; sessions showing objects
/// of the same schema reuse the same descriptor table rather than re-parsing
/// the group hierarchy per session.
#[derive(Debug, Default)]
pub struct MetadataStore {
    schemas: HashMap<SchemaId, SchemaMetadata>,
}

impl MetadataStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached metadata for a schema, if built.
    #[must_use]
    pub fn get(&self, schema: SchemaId) -> Option<&SchemaMetadata> {
        self.schemas.get(&schema)
    }

    /// Returns mutable cached metadata for a schema, if built.
    #[must_use]
    pub fn get_mut(&mut self, schema: SchemaId) -> Option<&mut SchemaMetadata> {
        self.schemas.get_mut(&schema)
    }

    /// Returns the metadata for a schema, building it on first use.
    ///
    /// The `specs` closure is only invoked when the schema is not cached.
    pub fn get_or_build<F>(&mut self, schema: SchemaId, specs: F) -> Result<&SchemaMetadata, SchemaError>
    where
        F: FnOnce() -> Vec<PropertySpec>,
    {
        match self.schemas.entry(schema) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(SchemaMetadata::build(specs())?)),
        }
    }

    /// Drops the cached metadata for a schema.
    ///
    /// Returns `true` if an entry was removed. Call this when the schema
    /// identity is reused for a changed definition.
    pub fn invalidate(&mut self, schema: SchemaId) -> bool {
        self.schemas.remove(&schema).is_some()
    }

    /// Returns `true` if metadata for the schema is cached.
    #[must_use]
    pub fn contains(&self, schema: SchemaId) -> bool {
        self.schemas.contains_key(&schema)
    }

    /// Returns the number of cached schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` if no schemas are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
