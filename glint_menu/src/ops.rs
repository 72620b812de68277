// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Executors for the context-menu actions.
//!
//! Each function here is the handler for one [`crate::MenuAction`]. They
//! are thin: validation plus a call into the clipboard engine or the
//! session's preset bindings.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::min;

use glint_clipboard::{
    Clipboard, Mutator, PASTE_UNDO_LABEL, UndoLog, WriteDenied, WriteGate, apply_property,
};
use glint_schema::{NotFound, SchemaMetadata};
use glint_session::Preset;

use crate::error::{MenuError, PasteError};

/// Copies property `name` (and its linked extras) from `source` into the
/// clipboard.
pub fn copy_property<T: Copy, M: Mutator<T>>(
    clipboard: &mut Clipboard,
    source: Option<T>,
    name: &str,
    schema: &SchemaMetadata,
    mutator: &M,
) -> Result<(), MenuError> {
    let descriptor = schema.lookup(name)?;
    clipboard.copy_property(source, descriptor, schema, mutator)?;
    Ok(())
}

/// Pastes the copied property onto `dst_name` of every destination.
///
/// The copied anchor lands on `dst_name` itself; the extras recorded at
/// copy time pair positionally with `dst_name`'s extras, up to the shorter
/// of the two lists. Per destination, write access is acquired and one
/// undo checkpoint recorded before the pairs are applied; the first denial
/// aborts the remaining destinations.
pub fn paste_property<T, M, G, U>(
    clipboard: &Clipboard,
    dests: &[T],
    dst_name: &str,
    dest_schema: &SchemaMetadata,
    mutator: &mut M,
    gate: &mut G,
    undo: &mut U,
) -> Result<(), PasteError<T>>
where
    T: Copy,
    M: Mutator<T>,
    G: WriteGate<T>,
    U: UndoLog<T>,
{
    let Some(snapshot) = clipboard.snapshot() else {
        return Err(PasteError::NothingCopied);
    };
    let src_names = clipboard.copied_props();
    if src_names.is_empty() {
        return Err(PasteError::NothingCopied);
    }

    let descriptor = dest_schema.lookup(dst_name)?;
    let mut dst_names = Vec::with_capacity(1 + descriptor.extra_props().len());
    dst_names.push(descriptor.name());
    dst_names.extend(descriptor.extra_props().iter().map(String::as_str));

    let pairs = min(src_names.len(), dst_names.len());
    for &dest in dests {
        if !gate.try_acquire_writable(dest) {
            return Err(WriteDenied { target: dest }.into());
        }
        undo.record_before_mutation(dest, PASTE_UNDO_LABEL);
        for i in 0..pairs {
            apply_property(snapshot, dest, &src_names[i], dst_names[i], dest_schema, mutator);
        }
    }
    Ok(())
}

/// Returns the text for the Copy Display Name action.
pub fn display_name_text(name: &str, schema: &SchemaMetadata) -> Result<String, NotFound> {
    Ok(schema.lookup(name)?.display_name().to_string())
}

/// Returns the text for the Copy Property Names action: the property's
/// name followed by its linked extras, comma-separated.
pub fn property_names_text(name: &str, schema: &SchemaMetadata) -> Result<String, NotFound> {
    let descriptor = schema.lookup(name)?;
    let mut text = String::from(descriptor.name());
    for extra in descriptor.extra_props() {
        text.push_str(", ");
        text.push_str(extra);
    }
    Ok(text)
}

/// Records the current values of `name` and its linked extras from
/// `source` into `preset`, replacing any previous recording.
///
/// Properties the mutator reports no value for are left out.
pub fn add_or_update_in_preset<T: Copy, M: Mutator<T>>(
    preset: &mut Preset,
    source: T,
    name: &str,
    schema: &SchemaMetadata,
    mutator: &M,
) -> Result<(), NotFound> {
    let descriptor = schema.lookup(name)?;
    let mut record = |prop: &str| {
        // Extras were validated against the schema at build time.
        if let Ok(desc) = schema.lookup(prop)
            && let Some(value) = mutator.value(source, desc.name(), desc.kind())
        {
            preset.set(desc.name(), value);
        }
    };
    record(descriptor.name());
    for extra in descriptor.extra_props() {
        record(extra);
    }
    Ok(())
}

/// Removes `name` and its linked extras from `preset`.
pub fn remove_from_preset(
    preset: &mut Preset,
    name: &str,
    schema: &SchemaMetadata,
) -> Result<(), NotFound> {
    let descriptor = schema.lookup(name)?;
    preset.remove(descriptor.name());
    for extra in descriptor.extra_props() {
        preset.remove(extra);
    }
    Ok(())
}
