// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property descriptors and their declarative build inputs.
//!
//! A [`PropertyDescriptor`] is the cached static metadata for one property
//! within a schema. Descriptors are produced by
//! [`SchemaMetadata::build`](crate::SchemaMetadata::build) from
//! [`PropertySpec`] inputs and then looked up by name for the lifetime of
//! the schema.

use alloc::string::String;
use core::fmt;
use smallvec::SmallVec;

use crate::kind::ValueKind;

/// Inline capacity for linked extra-property name lists.
///
/// Most linked properties mirror one or two physical slots.
const EXTRA_INLINE: usize = 2;

/// A compact index identifying a descriptor within one schema.
///
/// Valid only for the [`SchemaMetadata`](crate::SchemaMetadata) that issued
/// it; indices are not comparable across schemas.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescriptorId(u16);

impl DescriptorId {
    /// Creates a new descriptor ID from the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this descriptor ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescriptorId").field(&self.0).finish()
    }
}

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DescriptorId({})", self.0)
    }
}

/// The role a property plays in the group hierarchy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroupRole {
    /// An ordinary leaf property.
    #[default]
    None,
    /// A top-level group header with a fold toggle.
    MainHeader,
    /// A nested "advanced" section header.
    AdvancedHeader,
}

impl GroupRole {
    /// Returns `true` for either header role.
    #[must_use]
    #[inline]
    pub const fn is_header(self) -> bool {
        matches!(self, Self::MainHeader | Self::AdvancedHeader)
    }
}

/// Declarative build input for one property.
///
/// Parents and extras are named by string here; the schema build resolves
/// them to [`DescriptorId`]s and rejects names that don't exist.
///
/// # Example
///
/// ```rust
/// use glint_schema::{GroupRole, PropertySpec, ValueKind};
///
/// let spec = PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector)
///     .parent("_SurfaceGroup")
///     .extra("_ColorLM")
///     .help("Base surface tint.");
/// ```
#[derive(Clone, Debug)]
pub struct PropertySpec {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) kind: ValueKind,
    pub(crate) group_role: GroupRole,
    pub(crate) parent: Option<String>,
    pub(crate) extras: SmallVec<[String; EXTRA_INLINE]>,
    pub(crate) help: Option<String>,
}

impl PropertySpec {
    /// Creates a new spec for a leaf property with no parent or extras.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        kind: ValueKind,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            kind,
            group_role: GroupRole::None,
            parent: None,
            extras: SmallVec::new(),
            help: None,
        }
    }

    /// Sets the group role.
    #[must_use]
    pub fn group_role(mut self, role: GroupRole) -> Self {
        self.group_role = role;
        self
    }

    /// Names the enclosing group property.
    #[must_use]
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Appends one linked extra property name.
    ///
    /// Order matters: extras are paired positionally at paste time.
    #[must_use]
    pub fn extra(mut self, name: impl Into<String>) -> Self {
        self.extras.push(name.into());
        self
    }

    /// Sets the help message shown next to the property.
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }
}

/// Cached static metadata for one property within a schema.
///
/// Owned by the schema's [`SchemaMetadata`](crate::SchemaMetadata); the
/// `parent` link is a non-owning index back-reference into the same schema.
/// All fields except the UI fold state are immutable after build.
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) kind: ValueKind,
    pub(crate) group_role: GroupRole,
    pub(crate) parent: Option<DescriptorId>,
    pub(crate) extras: SmallVec<[String; EXTRA_INLINE]>,
    pub(crate) help: Option<String>,
    pub(crate) is_expanded: bool,
}

impl PropertyDescriptor {
    /// Returns the unique property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable display name.
    #[must_use]
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the kind of value this property holds.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns this property's role in the group hierarchy.
    #[must_use]
    #[inline]
    pub fn group_role(&self) -> GroupRole {
        self.group_role
    }

    /// Returns the ID of the enclosing group descriptor, if any.
    #[must_use]
    #[inline]
    pub fn parent(&self) -> Option<DescriptorId> {
        self.parent
    }

    /// Returns the ordered list of linked extra property names.
    ///
    /// These are other properties in the same schema that mirror this one
    /// when a logical property is backed by several physical slots.
    #[must_use]
    #[inline]
    pub fn extra_props(&self) -> &[String] {
        &self.extras
    }

    /// Returns the optional help message.
    #[must_use]
    #[inline]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns the current UI fold state.
    #[must_use]
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }
}
