// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `glint_clipboard` crate.
//!
//! These exercise the copy/paste engine end to end against an in-memory
//! host, with a focus on mask subsetting, snapshot independence, and the
//! ordering guarantees of multi-target paste under write denial.

use std::collections::{BTreeSet, HashMap};

use glint_clipboard::{
    Clipboard, Mutator, Snapshot, UndoLog, WriteGate, copy, paste, paste_one,
};
use glint_schema::{
    PropertySpec, PropertyValue, SchemaMetadata, ValueKind, ValueKindMask,
};

#[derive(Clone, Debug, Default, PartialEq)]
struct TargetState {
    values: HashMap<String, PropertyValue>,
    keywords: BTreeSet<String>,
    render_order: i32,
}

#[derive(Debug, Default)]
struct MemoryTargets {
    targets: HashMap<u32, TargetState>,
}

impl MemoryTargets {
    fn state(&self, target: u32) -> &TargetState {
        &self.targets[&target]
    }

    fn set(&mut self, target: u32, name: &str, value: PropertyValue) {
        self.targets
            .entry(target)
            .or_default()
            .values
            .insert(name.into(), value);
    }
}

impl Mutator<u32> for MemoryTargets {
    fn value(&self, target: u32, name: &str, kind: ValueKind) -> Option<PropertyValue> {
        self.targets
            .get(&target)?
            .values
            .get(name)
            .filter(|v| v.kind() == kind)
            .cloned()
    }

    fn set_value(&mut self, target: u32, name: &str, value: &PropertyValue) {
        self.set(target, name, value.clone());
    }

    fn keywords(&self, target: u32) -> BTreeSet<String> {
        self.targets
            .get(&target)
            .map(|s| s.keywords.clone())
            .unwrap_or_default()
    }

    fn set_keywords(&mut self, target: u32, keywords: &BTreeSet<String>) {
        self.targets.entry(target).or_default().keywords = keywords.clone();
    }

    fn render_order(&self, target: u32) -> i32 {
        self.targets.get(&target).map_or(0, |s| s.render_order)
    }

    fn set_render_order(&mut self, target: u32, order: i32) {
        self.targets.entry(target).or_default().render_order = order;
    }
}

#[derive(Debug, Default)]
struct Gate {
    denied: BTreeSet<u32>,
    attempts: Vec<u32>,
}

impl WriteGate<u32> for Gate {
    fn try_acquire_writable(&mut self, target: u32) -> bool {
        self.attempts.push(target);
        !self.denied.contains(&target)
    }
}

#[derive(Debug, Default)]
struct UndoRecorder {
    events: Vec<(u32, String)>,
}

impl UndoLog<u32> for UndoRecorder {
    fn record_before_mutation(&mut self, target: u32, label: &str) {
        self.events.push((target, label.into()));
    }
}

fn schema() -> SchemaMetadata {
    SchemaMetadata::build(vec![
        PropertySpec::new("_Metallic", "Metallic", ValueKind::Scalar),
        PropertySpec::new("_Color", "Albedo Color", ValueKind::Vector),
        PropertySpec::new("_Bump", "Normal Map", ValueKind::Texture),
        PropertySpec::new("_Mode", "Blend Mode", ValueKind::Keyword),
        PropertySpec::new("_Queue", "Render Queue", ValueKind::RenderOrder),
    ])
    .unwrap()
}

fn seeded_host(target: u32) -> MemoryTargets {
    let mut host = MemoryTargets::default();
    host.set(target, "_Metallic", PropertyValue::Scalar(0.75));
    host.set(target, "_Color", PropertyValue::Vector([1.0, 0.5, 0.25, 1.0]));
    host.set(
        target,
        "_Bump",
        PropertyValue::Texture(Some("bricks_n".into())),
    );
    host.set(target, "_Mode", PropertyValue::Keyword("_ALPHABLEND_ON".into()));
    host.set(target, "_Queue", PropertyValue::RenderOrder(3000));
    let state = host.targets.get_mut(&target).unwrap();
    state.keywords = BTreeSet::from(["_ALPHABLEND_ON".to_string()]);
    state.render_order = 3000;
    host
}

#[test]
fn full_paste_onto_the_source_is_idempotent() {
    let schema = schema();
    let mut host = seeded_host(1);
    let before = host.state(1).clone();

    let snapshot = copy(Some(1), &schema, &host).unwrap();
    paste(
        &snapshot,
        &[1],
        ValueKindMask::ALL,
        &schema,
        &mut host,
        &mut Gate::default(),
        &mut UndoRecorder::default(),
    )
    .unwrap();

    assert_eq!(host.state(1), &before);
}

#[test]
fn disjoint_masks_compose_to_their_union() {
    let schema = schema();
    let host = seeded_host(1);
    let snapshot = copy(Some(1), &schema, &host).unwrap();

    // Fresh destination with different values everywhere.
    let mut dest_host = MemoryTargets::default();
    dest_host.set(2, "_Metallic", PropertyValue::Scalar(0.0));
    dest_host.set(2, "_Color", PropertyValue::Vector([0.0; 4]));
    dest_host.set(2, "_Bump", PropertyValue::Texture(None));
    let untouched_bump = dest_host.state(2).values["_Bump"].clone();

    let mut gate = Gate::default();
    let mut undo = UndoRecorder::default();

    paste(
        &snapshot,
        &[2],
        ValueKindMask::NUMBER,
        &schema,
        &mut dest_host,
        &mut gate,
        &mut undo,
    )
    .unwrap();

    // NUMBER covers scalar + vector, nothing else.
    assert_eq!(
        dest_host.state(2).values["_Metallic"],
        PropertyValue::Scalar(0.75)
    );
    assert_eq!(
        dest_host.state(2).values["_Color"],
        PropertyValue::Vector([1.0, 0.5, 0.25, 1.0])
    );
    assert_eq!(dest_host.state(2).values["_Bump"], untouched_bump);
    assert_eq!(dest_host.state(2).render_order, 0);
    assert!(dest_host.state(2).keywords.is_empty());

    paste(
        &snapshot,
        &[2],
        ValueKindMask::TEXTURE | ValueKindMask::RENDER_ORDER,
        &schema,
        &mut dest_host,
        &mut gate,
        &mut undo,
    )
    .unwrap();

    assert_eq!(
        dest_host.state(2).values["_Bump"],
        PropertyValue::Texture(Some("bricks_n".into()))
    );
    assert_eq!(dest_host.state(2).render_order, 3000);
    // Keywords were in neither mask and stay untouched.
    assert!(dest_host.state(2).keywords.is_empty());
}

#[test]
fn keyword_mask_applies_the_set_wholesale() {
    let schema = schema();
    let host = seeded_host(1);
    let snapshot = copy(Some(1), &schema, &host).unwrap();

    let mut dest_host = MemoryTargets::default();
    dest_host
        .targets
        .entry(2)
        .or_default()
        .keywords
        .insert("_STALE_ON".into());

    paste(
        &snapshot,
        &[2],
        ValueKindMask::KEYWORD,
        &schema,
        &mut dest_host,
        &mut Gate::default(),
        &mut UndoRecorder::default(),
    )
    .unwrap();

    // Replacement, not merge.
    assert_eq!(
        dest_host.state(2).keywords,
        BTreeSet::from(["_ALPHABLEND_ON".to_string()])
    );
}

#[test]
fn snapshot_survives_source_edits_and_deletion() {
    let schema = schema();
    let mut host = seeded_host(1);
    let snapshot = copy(Some(1), &schema, &host).unwrap();

    host.set(1, "_Metallic", PropertyValue::Scalar(0.1));
    host.targets.remove(&1);

    assert_eq!(
        snapshot.value("_Metallic"),
        Some(&PropertyValue::Scalar(0.75))
    );

    // Pasting the old snapshot restores the captured state.
    paste(
        &snapshot,
        &[1],
        ValueKindMask::ALL,
        &schema,
        &mut host,
        &mut Gate::default(),
        &mut UndoRecorder::default(),
    )
    .unwrap();
    assert_eq!(
        host.state(1).values["_Metallic"],
        PropertyValue::Scalar(0.75)
    );
}

#[test]
fn copy_without_a_source_fails_and_changes_nothing() {
    let schema = schema();
    let host = seeded_host(1);
    assert!(copy::<u32, _>(None, &schema, &host).is_err());

    let mut clipboard = Clipboard::new();
    clipboard.copy_all(Some(1), &schema, &host).unwrap();
    let before_len = clipboard.snapshot().unwrap().len();

    // A failing copy leaves the previous snapshot in place.
    assert!(clipboard.copy_all::<u32, _>(None, &schema, &host).is_err());
    assert_eq!(clipboard.snapshot().unwrap().len(), before_len);
}

#[test]
fn paste_stops_at_first_write_denial() {
    let schema = schema();
    let src_host = seeded_host(1);
    let snapshot = copy(Some(1), &schema, &src_host).unwrap();

    let mut host = MemoryTargets::default();
    for t in [10, 11, 12] {
        host.set(t, "_Metallic", PropertyValue::Scalar(0.0));
    }

    let mut gate = Gate {
        denied: BTreeSet::from([11]),
        attempts: Vec::new(),
    };
    let mut undo = UndoRecorder::default();

    let err = paste(
        &snapshot,
        &[10, 11, 12],
        ValueKindMask::ALL,
        &schema,
        &mut host,
        &mut gate,
        &mut undo,
    )
    .unwrap_err();
    assert_eq!(err.target, 11);

    // The first target keeps its mutation; the denial point and everything
    // after it are untouched. This partial-mutation/full-abort asymmetry is
    // intentional.
    assert_eq!(
        host.state(10).values["_Metallic"],
        PropertyValue::Scalar(0.75)
    );
    assert_eq!(
        host.state(11).values["_Metallic"],
        PropertyValue::Scalar(0.0)
    );
    assert_eq!(
        host.state(12).values["_Metallic"],
        PropertyValue::Scalar(0.0)
    );

    // The gate was never asked about the third target.
    assert_eq!(gate.attempts, [10, 11]);
    // Undo checkpoints only exist for targets that were actually mutated.
    assert_eq!(undo.events.len(), 1);
    assert_eq!(undo.events[0].0, 10);
}

#[test]
fn names_missing_from_the_destination_schema_are_skipped() {
    let schema = schema();
    let host = seeded_host(1);
    let snapshot = copy(Some(1), &schema, &host).unwrap();

    // The destination schema only knows _Metallic.
    let narrow = SchemaMetadata::build(vec![PropertySpec::new(
        "_Metallic",
        "Metallic",
        ValueKind::Scalar,
    )])
    .unwrap();

    let mut dest_host = MemoryTargets::default();
    dest_host.set(2, "_Metallic", PropertyValue::Scalar(0.0));

    paste(
        &snapshot,
        &[2],
        ValueKindMask::ALL,
        &narrow,
        &mut dest_host,
        &mut Gate::default(),
        &mut UndoRecorder::default(),
    )
    .unwrap();

    assert_eq!(
        dest_host.state(2).values["_Metallic"],
        PropertyValue::Scalar(0.75)
    );
    assert!(!dest_host.state(2).values.contains_key("_Color"));
}

#[test]
fn paste_one_remaps_source_to_destination_name() {
    let schema = SchemaMetadata::build(vec![
        PropertySpec::new("_ColorA", "Color A", ValueKind::Vector),
        PropertySpec::new("_ColorB", "Color B", ValueKind::Vector),
    ])
    .unwrap();

    let mut host = MemoryTargets::default();
    host.set(1, "_ColorA", PropertyValue::Vector([1.0, 0.0, 0.0, 1.0]));
    host.set(2, "_ColorB", PropertyValue::Vector([0.0; 4]));
    let snapshot = copy(Some(1), &schema, &host).unwrap();

    paste_one(
        &snapshot,
        2,
        "_ColorA",
        "_ColorB",
        &schema,
        &mut host,
        &mut Gate::default(),
        &mut UndoRecorder::default(),
    )
    .unwrap();

    assert_eq!(
        host.state(2).values["_ColorB"],
        PropertyValue::Vector([1.0, 0.0, 0.0, 1.0])
    );
    // The destination's own _ColorA slot was not created.
    assert!(!host.state(2).values.contains_key("_ColorA"));
}

#[test]
fn paste_one_respects_the_write_gate() {
    let schema = schema();
    let host_src = seeded_host(1);
    let snapshot = copy(Some(1), &schema, &host_src).unwrap();

    let mut host = MemoryTargets::default();
    host.set(2, "_Metallic", PropertyValue::Scalar(0.0));
    let mut gate = Gate {
        denied: BTreeSet::from([2]),
        attempts: Vec::new(),
    };

    let err = paste_one(
        &snapshot,
        2,
        "_Metallic",
        "_Metallic",
        &schema,
        &mut host,
        &mut gate,
        &mut UndoRecorder::default(),
    )
    .unwrap_err();
    assert_eq!(err.target, 2);
    assert_eq!(
        host.state(2).values["_Metallic"],
        PropertyValue::Scalar(0.0)
    );
}

#[test]
fn paste_one_silently_skips_unknown_names() {
    let schema = schema();
    let host_src = seeded_host(1);
    let snapshot = copy(Some(1), &schema, &host_src).unwrap();

    let mut host = MemoryTargets::default();
    host.set(2, "_Metallic", PropertyValue::Scalar(0.0));
    let mut undo = UndoRecorder::default();

    // Unknown source name: no value to apply, but not an error.
    paste_one(
        &snapshot,
        2,
        "_Ghost",
        "_Metallic",
        &schema,
        &mut host,
        &mut Gate::default(),
        &mut undo,
    )
    .unwrap();
    assert_eq!(
        host.state(2).values["_Metallic"],
        PropertyValue::Scalar(0.0)
    );

    // Unknown destination name: skipped the same way.
    paste_one(
        &snapshot,
        2,
        "_Metallic",
        "_Ghost",
        &schema,
        &mut host,
        &mut Gate::default(),
        &mut undo,
    )
    .unwrap();
    assert!(!host.state(2).values.contains_key("_Ghost"));
}

#[test]
fn cross_session_paste_uses_the_shared_clipboard() {
    let schema = schema();
    let host_a = seeded_host(1);

    // Session A copies into the shared clipboard value.
    let mut clipboard = Clipboard::new();
    clipboard.copy_all(Some(1), &schema, &host_a).unwrap();

    // Session B, with its own host view, pastes from it.
    let mut host_b = MemoryTargets::default();
    host_b.set(9, "_Metallic", PropertyValue::Scalar(0.0));
    paste(
        clipboard.snapshot().unwrap(),
        &[9],
        ValueKindMask::ALL,
        &schema,
        &mut host_b,
        &mut Gate::default(),
        &mut UndoRecorder::default(),
    )
    .unwrap();

    assert_eq!(
        host_b.state(9).values["_Metallic"],
        PropertyValue::Scalar(0.75)
    );
}

#[test]
fn snapshot_capture_is_a_deep_copy() {
    let schema = schema();
    let mut host = seeded_host(1);
    let snapshot = Snapshot::capture(1, &schema, &host);

    host.targets.get_mut(&1).unwrap().keywords.clear();
    assert!(snapshot.keywords().contains("_ALPHABLEND_ON"));
}
