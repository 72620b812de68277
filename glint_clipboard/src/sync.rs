// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Masked paste over one or more destination targets.
//!
//! Destinations are processed strictly in the order supplied by the caller.
//! The first write-access denial aborts the remaining iterations and is
//! reported with the offending target; destinations already processed keep
//! their mutations (no rollback). This ordering is part of the contract
//! because it determines which targets are left mutated on partial failure.

use glint_schema::{SchemaMetadata, ValueKindMask};

use crate::capability::{Mutator, UndoLog, WriteGate};
use crate::error::{NoSource, WriteDenied};
use crate::snapshot::Snapshot;

/// Undo label recorded before every paste mutation.
pub const PASTE_UNDO_LABEL: &str = "Paste Properties";

/// Deep-copies `source` into a new [`Snapshot`].
///
/// Fails with [`NoSource`] when nothing is selected.
pub fn copy<T: Copy, M: Mutator<T>>(
    source: Option<T>,
    schema: &SchemaMetadata,
    mutator: &M,
) -> Result<Snapshot, NoSource> {
    let source = source.ok_or(NoSource)?;
    Ok(Snapshot::capture(source, schema, mutator))
}

/// Applies the masked subset of `snapshot` to every destination, in order.
///
/// Per destination: write access is acquired first and an undo checkpoint
/// recorded before any mutation. Every snapshot value whose name exists in
/// the destination schema and whose kind bit is set in `mask` is applied;
/// names absent from the destination schema are silently skipped (schemas
/// may legitimately differ across targets). The keyword set and render
/// order are applied wholesale behind their own mask bits.
pub fn paste<T, M, G, U>(
    snapshot: &Snapshot,
    dests: &[T],
    mask: ValueKindMask,
    dest_schema: &SchemaMetadata,
    mutator: &mut M,
    gate: &mut G,
    undo: &mut U,
) -> Result<(), WriteDenied<T>>
where
    T: Copy,
    M: Mutator<T>,
    G: WriteGate<T>,
    U: UndoLog<T>,
{
    for &dest in dests {
        if !gate.try_acquire_writable(dest) {
            return Err(WriteDenied { target: dest });
        }
        undo.record_before_mutation(dest, PASTE_UNDO_LABEL);

        for (name, value) in snapshot.iter() {
            if dest_schema.id_of(name).is_none() {
                continue;
            }
            if mask.contains(value.kind().mask()) {
                mutator.set_value(dest, name, value);
            }
        }
        if mask.contains(ValueKindMask::KEYWORD) {
            mutator.set_keywords(dest, snapshot.keywords());
        }
        if mask.contains(ValueKindMask::RENDER_ORDER) {
            mutator.set_render_order(dest, snapshot.render_order());
        }
    }
    Ok(())
}

/// Pastes a single named property pair onto one destination.
///
/// Same gating and undo protocol as [`paste`], restricted to one
/// (`src_name`, `dst_name`) pair and unaffected by kind masking. Used for
/// single-property context-menu paste and for linked-slot fan-out, where
/// the caller pairs the destination's extra slots positionally with the
/// list recorded at copy time.
pub fn paste_one<T, M, G, U>(
    snapshot: &Snapshot,
    dest: T,
    src_name: &str,
    dst_name: &str,
    dest_schema: &SchemaMetadata,
    mutator: &mut M,
    gate: &mut G,
    undo: &mut U,
) -> Result<(), WriteDenied<T>>
where
    T: Copy,
    M: Mutator<T>,
    G: WriteGate<T>,
    U: UndoLog<T>,
{
    if !gate.try_acquire_writable(dest) {
        return Err(WriteDenied { target: dest });
    }
    undo.record_before_mutation(dest, PASTE_UNDO_LABEL);
    apply_property(snapshot, dest, src_name, dst_name, dest_schema, mutator);
    Ok(())
}

/// Applies one (`src_name`, `dst_name`) pair without gating or undo.
///
/// Missing names on either side are silently skipped. Callers are
/// responsible for having acquired write access and recorded an undo
/// checkpoint for `dest` beforehand.
pub fn apply_property<T: Copy, M: Mutator<T>>(
    snapshot: &Snapshot,
    dest: T,
    src_name: &str,
    dst_name: &str,
    dest_schema: &SchemaMetadata,
    mutator: &mut M,
) {
    let Some(value) = snapshot.value(src_name) else {
        return;
    };
    if dest_schema.id_of(dst_name).is_none() {
        return;
    }
    mutator.set_value(dest, dst_name, value);
}
