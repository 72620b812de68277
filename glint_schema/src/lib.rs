// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Schema: property descriptors and the per-schema metadata cache.
//!
//! This crate is the leaf of the glint inspector core. It defines the
//! data model every other layer consumes:
//!
//! - [`ValueKind`] / [`PropertyValue`]: the closed set of value kinds a
//!   property can hold, and values tagged with them.
//! - [`ValueKindMask`]: a bit-set selecting kinds for masked paste, with the
//!   named composites `NUMBER` and `ALL`.
//! - [`PropertyDescriptor`]: cached static metadata for one property (display
//!   name, group role, parent link, linked extra slots, fold state).
//! - [`SchemaMetadata`] / [`MetadataStore`]: the descriptor table built once
//!   per distinct schema, cached across sessions by [`SchemaId`].
//!
//! ## Quick Start
//!
//! ```rust
//! use glint_schema::{
//!     GroupRole, MetadataStore, PropertySpec, SchemaId, ValueKind,
//! };
//!
//! let mut store = MetadataStore::new();
//! let schema = store
//!     .get_or_build(SchemaId::new(1), || {
//!         vec![
//!             PropertySpec::new("_Surface", "Surface", ValueKind::Scalar)
//!                 .group_role(GroupRole::MainHeader),
//!             PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector)
//!                 .parent("_Surface")
//!                 .extra("_EmissionColor"),
//!             PropertySpec::new("_EmissionColor", "Emission", ValueKind::Vector),
//!         ]
//!     })
//!     .unwrap();
//!
//! let color = schema.lookup("_Color").unwrap();
//! assert_eq!(color.display_name(), "Albedo Color");
//! assert_eq!(color.extra_props(), ["_EmissionColor"]);
//! ```
//!
//! Descriptors are owned by their schema; the parent link is a non-owning
//! [`DescriptorId`] back-reference. The only mutable field after build is
//! the UI fold state ([`SchemaMetadata::set_expanded`]).
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod descriptor;
mod error;
mod kind;
mod store;

pub use descriptor::{DescriptorId, GroupRole, PropertyDescriptor, PropertySpec};
pub use error::{NotFound, SchemaError};
pub use kind::{PropertyValue, ValueKind, ValueKindMask};
pub use store::{MetadataStore, SchemaId, SchemaMetadata};
