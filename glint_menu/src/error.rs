// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu-layer error types.

use alloc::string::String;
use core::fmt;

use glint_clipboard::{NoSource, WriteDenied};
use glint_schema::NotFound;

/// A copy-side menu action failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuError {
    /// The clicked property is not in the schema metadata.
    UnknownProperty(NotFound),
    /// No source target was selected to copy from.
    NoSource,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty(err) => err.fmt(f),
            Self::NoSource => NoSource.fmt(f),
        }
    }
}

impl core::error::Error for MenuError {}

impl From<NotFound> for MenuError {
    fn from(err: NotFound) -> Self {
        Self::UnknownProperty(err)
    }
}

impl From<NoSource> for MenuError {
    fn from(_: NoSource) -> Self {
        Self::NoSource
    }
}

/// Single-property paste failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasteError<T> {
    /// The clipboard holds no single-property copy to paste.
    NothingCopied,
    /// The clicked destination property is not in the destination schema.
    UnknownProperty(NotFound),
    /// A destination target refused write access; targets after it were
    /// not touched.
    Denied(WriteDenied<T>),
}

impl<T: fmt::Debug> fmt::Display for PasteError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingCopied => f.write_str("no copied property to paste"),
            Self::UnknownProperty(err) => err.fmt(f),
            Self::Denied(err) => err.fmt(f),
        }
    }
}

impl<T: fmt::Debug> core::error::Error for PasteError<T> {}

impl<T> From<NotFound> for PasteError<T> {
    fn from(err: NotFound) -> Self {
        Self::UnknownProperty(err)
    }
}

impl<T> From<WriteDenied<T>> for PasteError<T> {
    fn from(err: WriteDenied<T>) -> Self {
        Self::Denied(err)
    }
}

/// Asset resolution found nothing for the requested name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoMatch {
    /// The name that was searched for, after instance-suffix stripping.
    pub name: String,
}

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no asset found matching '{}'", self.name)
    }
}

impl core::error::Error for NoMatch {}
