// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Clipboard: snapshot copy and typed masked paste.
//!
//! This crate is the synchronization engine of the glint inspector core:
//!
//! - [`Snapshot`]: a deep, detached copy of one target's full property set,
//!   keyword set, and render order. Stable regardless of what happens to
//!   the source afterwards.
//! - [`Clipboard`]: the one process-wide clipboard value, replaced wholesale
//!   on every copy; copying in one inspector session and pasting in another
//!   is supported by design.
//! - [`paste`] / [`paste_one`]: masked application of a snapshot to one or
//!   more destinations, with write gating and undo checkpoints per target.
//! - [`Mutator`] / [`WriteGate`] / [`UndoLog`]: the capabilities the engine
//!   calls out through; the core never touches targets directly.
//!
//! ## Failure model
//!
//! Copy with no selection fails with [`NoSource`] and changes nothing.
//! Paste processes destinations in caller order and aborts the entire
//! remainder on the first [`WriteDenied`]; earlier destinations keep their
//! mutations. Property names present in the snapshot but absent from a
//! destination schema are silently skipped, since schemas may legitimately
//! differ across targets.
//!
//! ## Example
//!
//! ```rust
//! use glint_clipboard::{Mutator, UndoLog, WriteGate, copy, paste};
//! use glint_schema::{
//!     PropertySpec, PropertyValue, SchemaMetadata, ValueKind, ValueKindMask,
//! };
//! use std::collections::BTreeSet;
//!
//! #[derive(Default)]
//! struct Host {
//!     metallic: f32,
//! }
//!
//! impl Mutator<u32> for Host {
//!     fn value(&self, _t: u32, name: &str, _k: ValueKind) -> Option<PropertyValue> {
//!         (name == "_Metallic").then(|| PropertyValue::Scalar(self.metallic))
//!     }
//!     fn set_value(&mut self, _t: u32, name: &str, value: &PropertyValue) {
//!         if let ("_Metallic", PropertyValue::Scalar(v)) = (name, value) {
//!             self.metallic = *v;
//!         }
//!     }
//!     fn keywords(&self, _t: u32) -> BTreeSet<String> {
//!         BTreeSet::new()
//!     }
//!     fn set_keywords(&mut self, _t: u32, _k: &BTreeSet<String>) {}
//!     fn render_order(&self, _t: u32) -> i32 {
//!         0
//!     }
//!     fn set_render_order(&mut self, _t: u32, _o: i32) {}
//! }
//!
//! struct AlwaysWritable;
//! impl WriteGate<u32> for AlwaysWritable {
//!     fn try_acquire_writable(&mut self, _t: u32) -> bool {
//!         true
//!     }
//! }
//!
//! #[derive(Default)]
//! struct NoUndo;
//! impl UndoLog<u32> for NoUndo {
//!     fn record_before_mutation(&mut self, _t: u32, _label: &str) {}
//! }
//!
//! let schema = SchemaMetadata::build(vec![
//!     PropertySpec::new("_Metallic", "Metallic", ValueKind::Scalar),
//! ])
//! .unwrap();
//!
//! let mut host = Host { metallic: 0.75 };
//! let snapshot = copy(Some(1_u32), &schema, &host).unwrap();
//!
//! host.metallic = 0.0;
//! paste(
//!     &snapshot,
//!     &[1_u32],
//!     ValueKindMask::ALL,
//!     &schema,
//!     &mut host,
//!     &mut AlwaysWritable,
//!     &mut NoUndo,
//! )
//! .unwrap();
//! assert_eq!(host.metallic, 0.75);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod capability;
mod error;
mod keyword;
mod snapshot;
mod sync;

pub use capability::{Mutator, UndoLog, WriteGate};
pub use error::{NoSource, WriteDenied};
pub use keyword::{keyword_for, select_keyword, set_keyword};
pub use snapshot::{Clipboard, Snapshot};
pub use sync::{PASTE_UNDO_LABEL, apply_property, copy, paste, paste_one};
