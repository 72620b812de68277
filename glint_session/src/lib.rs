// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glint Session: per-session transient inspector state.
//!
//! One [`SessionState`] exists per open inspector instance. It bundles:
//!
//! - [`SearchFilter`]: the live search query, mode, and derived visibility
//!   set, recomputed on every query or mode change.
//! - [`ChangeTracker`]: per-frame "changed this frame" flags with
//!   linked-slot fan-out, rebuilt by [`SessionState::begin_frame`] every
//!   refresh cycle.
//! - Active [`PresetBinding`]s: the ordered list of linked presets currently
//!   influencing the session.
//!
//! Everything here is synchronous scratch driven by the host's per-frame
//! refresh; there is no background work and no suspension point.
//!
//! ## Frame protocol
//!
//! ```rust
//! use glint_schema::{PropertySpec, SchemaMetadata, ValueKind};
//! use glint_session::SessionState;
//!
//! let schema = SchemaMetadata::build(vec![
//!     PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector),
//! ])
//! .unwrap();
//!
//! let mut session = SessionState::new();
//!
//! // Once per refresh cycle:
//! session.begin_frame();
//!
//! // The drawing collaborator reports widget edits:
//! session.record_change("_Color", &schema).unwrap();
//!
//! // Downstream consumers decide whether to propagate:
//! assert!(session.has_changed("_Color", &schema).unwrap());
//! ```
//!
//! Consumers must never cache `has_changed` results across frames; the
//! flags are only valid until the next `begin_frame`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod change;
mod filter;
mod preset;
mod session;

pub use change::ChangeTracker;
pub use filter::{SearchFilter, SearchMode};
pub use preset::{Preset, PresetBinding};
pub use session::SessionState;
