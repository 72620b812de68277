// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clipboard-layer error types.

use core::fmt;

/// Copy was attempted with no source target selected.
///
/// User-visible, with no state change: the previous snapshot (if any) is
/// left untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoSource;

impl fmt::Display for NoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no source target selected to copy from")
    }
}

impl core::error::Error for NoSource {}

/// Write access to a destination target was denied mid-paste.
///
/// Carries the offending target so the host can name it to the user.
/// Destinations processed before this one keep whatever was already
/// applied; destinations after it are untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct WriteDenied<T> {
    /// The target that could not be made writable.
    pub target: T,
}

impl<T: fmt::Debug> fmt::Debug for WriteDenied<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WriteDenied {{ target: {:?} }}", self.target)
    }
}

impl<T: fmt::Debug> fmt::Display for WriteDenied<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target {:?} is not writable; remaining paste targets were skipped",
            self.target
        )
    }
}

impl<T: fmt::Debug> core::error::Error for WriteDenied<T> {}
