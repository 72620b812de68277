// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Menu: the context-menu layer of the glint inspector core.
//!
//! This crate composes the lower layers and owns no state of its own:
//!
//! - [`property_menu`]: builds the data-only [`MenuEntry`] list for a
//!   right-clicked property from the clipboard and session state.
//! - [`ops`]: one executor per [`MenuAction`], delegating into
//!   `glint_clipboard` and the session's preset bindings.
//! - [`resolve_asset`]: maps a decorated runtime target name back to its
//!   backing asset, reporting ambiguity instead of hiding it.
//!
//! The host renders the entries, then dispatches the chosen action:
//!
//! ```rust
//! use glint_clipboard::Clipboard;
//! use glint_menu::{MenuAction, property_menu};
//! use glint_schema::{PropertySpec, SchemaMetadata, ValueKind};
//! use glint_session::SessionState;
//!
//! let schema = SchemaMetadata::build(vec![
//!     PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector),
//! ])
//! .unwrap();
//!
//! let entries = property_menu(
//!     "_Color",
//!     &schema,
//!     &Clipboard::new(),
//!     &SessionState::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(entries[0].action, MenuAction::CopyValue);
//! // Nothing copied yet, so Paste is present but disabled.
//! assert!(!entries[1].enabled);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod asset;
mod error;
mod menu;
pub mod ops;

pub use asset::{AssetLookup, AssetResolution, resolve_asset, strip_instance_suffixes};
pub use error::{MenuError, NoMatch, PasteError};
pub use menu::{MenuAction, MenuEntry, property_menu};
