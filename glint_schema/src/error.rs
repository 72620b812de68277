// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schema-layer error types.

use alloc::string::String;
use core::fmt;

/// A property name was not present in the schema metadata.
///
/// Lookups are always driven by names the metadata itself produced, so
/// hitting this indicates a metadata/session desync and should be surfaced
/// loudly rather than swallowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotFound {
    /// The name that failed to resolve.
    pub name: String,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property '{}' not found in schema metadata", self.name)
    }
}

impl core::error::Error for NotFound {}

/// An invariant violation detected while building schema metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// Two specs declared the same property name.
    DuplicateName(String),
    /// An extra-property name does not resolve within the schema.
    UnknownExtra {
        /// The property declaring the extra.
        property: String,
        /// The extra name that failed to resolve.
        extra: String,
    },
    /// A parent name does not resolve within the schema.
    UnknownParent {
        /// The property declaring the parent.
        property: String,
        /// The parent name that failed to resolve.
        parent: String,
    },
    /// A parent chain is longer than two levels (or cyclic).
    GroupTooDeep {
        /// The property whose chain exceeded the limit.
        property: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "property '{name}' is declared more than once")
            }
            Self::UnknownExtra { property, extra } => write!(
                f,
                "property '{property}' links extra '{extra}' which does not exist in the schema"
            ),
            Self::UnknownParent { property, parent } => write!(
                f,
                "property '{property}' names parent '{parent}' which does not exist in the schema"
            ),
            Self::GroupTooDeep { property } => write!(
                f,
                "property '{property}' has a parent chain deeper than two levels"
            ),
        }
    }
}

impl core::error::Error for SchemaError {}
