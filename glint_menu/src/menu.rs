// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data-only context-menu model.
//!
//! [`property_menu`] composes the menu for a right-clicked property from
//! the clipboard and session state. The model carries no callbacks; the
//! host renders the entries and dispatches the chosen [`MenuAction`] to
//! the operations in [`crate::ops`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use glint_clipboard::Clipboard;
use glint_schema::{NotFound, SchemaMetadata};
use glint_session::SessionState;

/// What a chosen menu entry asks the host to do.
///
/// Preset variants carry the anchor of the [`glint_session::PresetBinding`]
/// they belong to, so the executor can find the binding again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Copy the property's value (and linked extras) to the clipboard.
    CopyValue,
    /// Paste the copied property onto the clicked one.
    PasteValue,
    /// Put the property's display name on the text clipboard.
    CopyDisplayName,
    /// Put the property's name list on the text clipboard.
    CopyPropertyNames,
    /// Record the property's current values into the named preset.
    AddToPreset(String),
    /// Re-record the property's current values into the named preset.
    UpdateInPreset(String),
    /// Remove the property's recorded values from the named preset.
    RemoveFromPreset(String),
}

/// One rendered context-menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// The text the host shows.
    pub label: String,
    /// The action to dispatch when chosen.
    pub action: MenuAction,
    /// Disabled entries are shown grayed out and never dispatched.
    pub enabled: bool,
}

impl MenuEntry {
    fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
            enabled: true,
        }
    }

    fn disabled(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
            enabled: false,
        }
    }
}

/// Builds the context menu for the property `name`.
///
/// Always offers Copy, Paste (disabled until a single-property copy has
/// happened), and the two name-copy entries. Each active preset binding
/// contributes an Add or Update entry, depending on whether the preset
/// already records this property, plus a Remove entry when it does.
pub fn property_menu(
    name: &str,
    schema: &SchemaMetadata,
    clipboard: &Clipboard,
    session: &SessionState,
) -> Result<Vec<MenuEntry>, NotFound> {
    let descriptor = schema.lookup(name)?;

    let mut entries = Vec::new();
    entries.push(MenuEntry::new("Copy", MenuAction::CopyValue));
    if clipboard.can_paste_property() {
        entries.push(MenuEntry::new("Paste", MenuAction::PasteValue));
    } else {
        entries.push(MenuEntry::disabled("Paste", MenuAction::PasteValue));
    }
    entries.push(MenuEntry::new(
        "Copy Display Name",
        MenuAction::CopyDisplayName,
    ));
    entries.push(MenuEntry::new(
        "Copy Property Names",
        MenuAction::CopyPropertyNames,
    ));

    for binding in session.active_presets() {
        let preset_name = binding.preset.name();
        if binding.preset.contains(descriptor.name()) {
            entries.push(MenuEntry::new(
                format!("Update in {preset_name}"),
                MenuAction::UpdateInPreset(binding.anchor.clone()),
            ));
            entries.push(MenuEntry::new(
                format!("Remove from {preset_name}"),
                MenuAction::RemoveFromPreset(binding.anchor.clone()),
            ));
        } else {
            entries.push(MenuEntry::new(
                format!("Add to {preset_name}"),
                MenuAction::AddToPreset(binding.anchor.clone()),
            ));
        }
    }

    Ok(entries)
}
