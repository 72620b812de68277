// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyword-set helpers for keyword-backed properties.
//!
//! Keyword-backed toggles and enums map property state onto the target's
//! keyword set. Two conventions carry over from the host's shader world:
//! a property with no explicit keyword derives one as `NAME_ON` in upper
//! case, and the literal keyword `"_"` is a placeholder that must never be
//! left enabled on a target.

use alloc::string::String;

use crate::capability::Mutator;

/// Returns the effective keyword for a property.
///
/// An explicit keyword of `None`, `""`, or `"__"` counts as unset and
/// derives `<PROP_NAME>_ON` (upper-cased) instead; anything else is
/// upper-cased and used as-is.
#[must_use]
pub fn keyword_for(prop_name: &str, explicit: Option<&str>) -> String {
    match explicit {
        None | Some("") | Some("__") => {
            let mut keyword = prop_name.to_uppercase();
            keyword.push_str("_ON");
            keyword
        }
        Some(keyword) => keyword.to_uppercase(),
    }
}

/// Enables or disables one keyword across all targets.
///
/// The placeholder keyword `"_"` is always removed regardless of `enable`.
/// Targets already in the requested state are left untouched.
pub fn set_keyword<T: Copy, M: Mutator<T>>(
    mutator: &mut M,
    targets: &[T],
    keyword: &str,
    enable: bool,
) {
    if keyword.is_empty() {
        return;
    }
    for &target in targets {
        let mut keywords = mutator.keywords(target);

        if keyword == "_" {
            if keywords.remove("_") {
                mutator.set_keywords(target, &keywords);
            }
            continue;
        }

        let changed = if enable {
            keywords.insert(keyword.into())
        } else {
            keywords.remove(keyword)
        };
        if changed {
            mutator.set_keywords(target, &keywords);
        }
    }
}

/// Enables exactly `keywords[index]` and disables the rest, across all
/// targets (one-hot selection for enum-style keyword properties).
pub fn select_keyword<T: Copy, M: Mutator<T>>(
    mutator: &mut M,
    targets: &[T],
    keywords: &[&str],
    index: usize,
) {
    debug_assert!(
        !keywords.is_empty() && index < keywords.len(),
        "keyword index {index} out of range for {} keywords",
        keywords.len()
    );
    for (i, keyword) in keywords.iter().enumerate() {
        set_keyword(mutator, targets, keyword, i == index);
    }
}
