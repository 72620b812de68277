// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating the backing asset for an inspected target.
//!
//! Runtime-instantiated targets carry decorated names (`"Wood_Instantiated"`,
//! `"Wood (Instance)"`, possibly stacked) while the asset database only knows
//! the undecorated name. Resolution strips the decorations and queries the
//! host's [`AssetLookup`]; when several assets share the name, the first
//! match is used and the rest are reported as alternates rather than being
//! silently dropped.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::NoMatch;

const INSTANCE_SUFFIXES: [&str; 2] = ["_Instantiated", " (Instance)"];

/// Host-side name index over the asset database.
pub trait AssetLookup {
    /// Returns the paths of every asset whose name is exactly `name`.
    fn find_by_name(&self, name: &str) -> Vec<String>;
}

/// The outcome of a successful asset resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetResolution {
    /// The path of the chosen asset.
    pub path: String,
    /// Paths of other assets sharing the name, in lookup order.
    ///
    /// Non-empty means the choice of `path` was arbitrary and the host
    /// should surface the ambiguity to the user.
    pub alternates: Vec<String>,
}

impl AssetResolution {
    /// Returns `true` if more than one asset matched the name.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        !self.alternates.is_empty()
    }
}

/// Strips instance decorations from a target name.
///
/// Decorations can stack (an instantiated copy of an instance), so suffixes
/// are peeled repeatedly until none remains.
#[must_use]
pub fn strip_instance_suffixes(name: &str) -> &str {
    let mut name = name;
    loop {
        let mut stripped = false;
        for suffix in INSTANCE_SUFFIXES {
            if let Some(rest) = name.strip_suffix(suffix) {
                name = rest;
                stripped = true;
            }
        }
        if !stripped {
            return name;
        }
    }
}

/// Resolves `target_name` to an asset path via `lookup`.
///
/// Instance decorations are stripped first. No match is an error; multiple
/// matches resolve to the first with the rest recorded as alternates.
pub fn resolve_asset<L: AssetLookup>(
    lookup: &L,
    target_name: &str,
) -> Result<AssetResolution, NoMatch> {
    let name = strip_instance_suffixes(target_name);
    let mut paths = lookup.find_by_name(name);
    if paths.is_empty() {
        return Err(NoMatch { name: name.into() });
    }
    let path = paths.remove(0);
    Ok(AssetResolution {
        path,
        alternates: paths,
    })
}
